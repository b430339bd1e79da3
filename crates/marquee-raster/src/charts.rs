// File: crates/marquee-raster/src/charts.rs
// Summary: Paints bar and candle geometry into frames, one paint op at a time.

use marquee_core::{
    BarChartGeometry, CandleChartGeometry, Class, Label, Line, PaintOp, Primitive, Rect, Rgba,
    Role, Theme,
};

use crate::frame::Frame;

/// Side length of the triangular trend markers in pixels.
pub const MARKER_SIZE: f32 = 8.0;
/// Threshold line dash pattern: pixels on, then pixels off.
const DASH_ON: f32 = 6.0;
const DASH_OFF: f32 = 4.0;
/// Half side of the square notch marking a caption anchor.
const NOTCH: f32 = 2.0;

/// Paint a portfolio bar chart onto a fresh panel-colored frame.
pub fn render_bar_chart(geom: &BarChartGeometry, theme: &Theme) -> Frame {
    let mut frame = Frame::new(geom.width.round() as u32, geom.height.round() as u32, theme.panel);
    paint_ops(&mut frame, &geom.paint_ops(), theme);
    for label in geom.labels() {
        anchor_notch(&mut frame, label, theme.axis_label);
    }
    frame
}

/// Paint a candlestick chart onto a fresh panel-colored frame.
pub fn render_candle_chart(geom: &CandleChartGeometry, theme: &Theme) -> Frame {
    let mut frame = Frame::new(geom.width.round() as u32, geom.height.round() as u32, theme.panel);
    paint_ops(&mut frame, &geom.paint_ops(), theme);
    for label in geom.labels() {
        anchor_notch(&mut frame, label, theme.axis_label);
    }
    frame
}

fn paint_ops(frame: &mut Frame, ops: &[PaintOp], theme: &Theme) {
    for op in ops {
        let color = theme.color_for(op.role, op.class);
        match op.shape {
            Primitive::Rect(rect) => frame.fill_rect(rect, color),
            Primitive::Line(line) => match op.role {
                Role::SupportLine | Role::ResistanceLine => dashed_hline(frame, line, color),
                _ => frame.fill_line(line, color),
            },
            Primitive::Marker { x, y } => marker(frame, x, y, op.class, color),
        }
    }
}

/// Horizontal dashed stroke, 6px on / 4px off.
fn dashed_hline(frame: &mut Frame, line: Line, color: Rgba) {
    let half = line.width / 2.0;
    let x1 = line.x0.max(line.x1);
    let mut x = line.x0.min(line.x1);
    while x < x1 {
        let seg = (x + DASH_ON).min(x1);
        frame.fill_rect(Rect::new(x, line.y0 - half, seg - x, line.width), color);
        x = seg + DASH_OFF;
    }
}

/// Triangular trend glyph; gains point up, losses point down.
fn marker(frame: &mut Frame, x: f32, y: f32, class: Class, color: Rgba) {
    let size = MARKER_SIZE;
    let rows = size as u32;
    for r in 0..rows {
        let half = (r as f32 + 1.0) * size / (2.0 * rows as f32);
        let dy = r as f32 - size / 2.0;
        let row_y = match class {
            Class::Loss => y - dy - 1.0,
            _ => y + dy,
        };
        frame.fill_rect(Rect::new(x - half, row_y, 2.0 * half, 1.0), color);
    }
}

/// Text is left to GUI hosts; headless frames mark each caption anchor
/// with a small notch instead.
fn anchor_notch(frame: &mut Frame, label: &Label, color: Rgba) {
    frame.fill_rect(Rect::centered(label.x, label.y - NOTCH, 2.0 * NOTCH, 2.0 * NOTCH), color);
}
