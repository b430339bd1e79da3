// File: crates/marquee-raster/src/frame.rs
// Summary: RGBA8 pixel frame with src-over fills and PNG encoding.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use marquee_core::{Line, Rect, Rgba};

/// Failures on the way from pixels to a PNG on disk.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("png encode failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Row-major RGBA8 surface, straight alpha. Geometry lands here
/// through src-over fills; everything off the frame is clipped.
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// Frame filled with `background`. Zero dimensions are bumped to
    /// one pixel so the buffer is never empty.
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut data = vec![0u8; width as usize * height as usize * 4];
        for px in data.chunks_exact_mut(4) {
            px.copy_from_slice(&[background.r, background.g, background.b, background.a]);
        }
        Self { width, height, data }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    /// Color at `(x, y)`. Both coordinates must be inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Rgba { r: self.data[i], g: self.data[i + 1], b: self.data[i + 2], a: self.data[i + 3] }
    }

    /// Fill `rect` with `color`, src-over, clipped to the frame. Edges
    /// round to the nearest pixel.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if color.a == 0 {
            return;
        }
        let Some((x0, x1)) = clip_span(rect.x, rect.right(), self.width) else { return };
        let Some((y0, y1)) = clip_span(rect.y, rect.bottom(), self.height) else { return };
        for y in y0..y1 {
            let row = y as usize * self.width as usize * 4;
            for x in x0..x1 {
                let i = row + x as usize * 4;
                blend(&mut self.data[i..i + 4], color);
            }
        }
    }

    /// Stroke the border of `rect` with a `width`-pixel pen.
    pub fn stroke_rect(&mut self, rect: Rect, width: f32, color: Rgba) {
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, width), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - width, rect.w, width), color);
        self.fill_rect(Rect::new(rect.x, rect.y + width, width, rect.h - 2.0 * width), color);
        self.fill_rect(
            Rect::new(rect.right() - width, rect.y + width, width, rect.h - 2.0 * width),
            color,
        );
    }

    /// Fill a stroked segment. Axis-aligned segments become rectangles
    /// centered on the line; anything else is stamped step by step.
    pub fn fill_line(&mut self, line: Line, color: Rgba) {
        let half = line.width / 2.0;
        if line.y0 == line.y1 {
            let (x0, x1) = (line.x0.min(line.x1), line.x0.max(line.x1));
            self.fill_rect(Rect::new(x0, line.y0 - half, x1 - x0, line.width), color);
        } else if line.x0 == line.x1 {
            let (y0, y1) = (line.y0.min(line.y1), line.y0.max(line.y1));
            self.fill_rect(Rect::new(line.x0 - half, y0, line.width, y1 - y0), color);
        } else {
            let dx = line.x1 - line.x0;
            let dy = line.y1 - line.y0;
            let steps = dx.abs().max(dy.abs()).ceil().max(1.0);
            for s in 0..=steps as u32 {
                let t = s as f32 / steps;
                let x = line.x0 + dx * t;
                let y = line.y0 + dy * t;
                self.fill_rect(Rect::centered(x, y - half, line.width, line.width), color);
            }
        }
    }

    /// Consume the frame into raw pixels: `(rgba, width, height, stride)`.
    pub fn into_rgba8(self) -> (Vec<u8>, u32, u32, usize) {
        let stride = self.stride();
        (self.data, self.width, self.height, stride)
    }

    /// Encode the frame as PNG bytes.
    pub fn png_bytes(&self) -> Result<Vec<u8>, RasterError> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out).write_image(
            &self.data,
            self.width,
            self.height,
            ExtendedColorType::Rgba8,
        )?;
        Ok(out)
    }

    /// Write the frame as a PNG, creating parent directories as needed.
    pub fn write_png(&self, path: impl AsRef<std::path::Path>) -> Result<(), RasterError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.png_bytes()?)?;
        Ok(())
    }
}

/// Clip `[a, b)` to `[0, limit)` in whole pixels. `None` when nothing
/// survives.
fn clip_span(a: f32, b: f32, limit: u32) -> Option<(u32, u32)> {
    let lo = a.round().max(0.0);
    let hi = b.round().min(limit as f32);
    if hi <= lo {
        return None;
    }
    Some((lo as u32, hi as u32))
}

/// Src-over blend of straight-alpha `color` into one RGBA pixel.
fn blend(dst: &mut [u8], color: Rgba) {
    let a = color.a as u32;
    if a == 255 {
        dst.copy_from_slice(&[color.r, color.g, color.b, 255]);
        return;
    }
    let inv = 255 - a;
    dst[0] = ((color.r as u32 * a + dst[0] as u32 * inv + 127) / 255) as u8;
    dst[1] = ((color.g as u32 * a + dst[1] as u32 * inv + 127) / 255) as u8;
    dst[2] = ((color.b as u32 * a + dst[2] as u32 * inv + 127) / 255) as u8;
    dst[3] = (a + dst[3] as u32 * inv / 255) as u8;
}
