// File: crates/marquee-raster/src/cards.rs
// Summary: Catalog card grid: layout, hover hit-testing, and sheet painting.

use marquee_core::{CatalogEntry, Rect, Rgba, Theme};

use crate::frame::Frame;

pub const CARD_W: f32 = 200.0;
pub const CARD_H: f32 = 300.0;
pub const CARD_GAP: f32 = 28.0;
pub const SHEET_MARGIN: f32 = 24.0;

const CARD_INSET: f32 = 10.0;
const CAPTION_H: f32 = 60.0;
const TAG_W: f32 = 54.0;
const TAG_H: f32 = 10.0;
const HOVER_PEN: f32 = 3.0;

/// Card positions for `count` entries on a sheet `width` px wide.
/// Cards flow row-major; rows below the sheet just clip when painted.
pub fn card_rects(width: f32, count: usize) -> Vec<Rect> {
    let usable = (width - 2.0 * SHEET_MARGIN + CARD_GAP).max(CARD_W + CARD_GAP);
    let cols = (usable / (CARD_W + CARD_GAP)) as usize;
    let cols = cols.max(1);
    (0..count)
        .map(|i| {
            let col = (i % cols) as f32;
            let row = (i / cols) as f32;
            Rect::new(
                SHEET_MARGIN + col * (CARD_W + CARD_GAP),
                SHEET_MARGIN + row * (CARD_H + CARD_GAP),
                CARD_W,
                CARD_H,
            )
        })
        .collect()
}

/// Index of the card under `(x, y)`, if any. Uses the same layout as
/// [`card_rects`], so hover tracking agrees with what was painted.
pub fn card_at(width: f32, count: usize, x: f32, y: f32) -> Option<usize> {
    card_rects(width, count).iter().position(|r| r.contains(x, y))
}

/// Paint one page of catalog cards. `hover` highlights that card with
/// the theme's hover ring.
pub fn render_card_sheet(
    entries: &[&CatalogEntry],
    hover: Option<usize>,
    theme: &Theme,
    width: u32,
    height: u32,
) -> Frame {
    let mut frame = Frame::new(width, height, theme.background);
    let rects = card_rects(width as f32, entries.len());
    for (i, (entry, rect)) in entries.iter().zip(rects).enumerate() {
        frame.fill_rect(rect, theme.card);

        // Poster block, tinted per title so cards stay tellable apart
        let poster = Rect::new(
            rect.x + CARD_INSET,
            rect.y + CARD_INSET,
            rect.w - 2.0 * CARD_INSET,
            rect.h - 2.0 * CARD_INSET - CAPTION_H,
        );
        frame.fill_rect(poster, poster_tint(&entry.title, theme.card));

        // Caption strip under the poster
        let caption = Rect::new(
            rect.x + CARD_INSET,
            poster.bottom() + CARD_INSET / 2.0,
            rect.w - 2.0 * CARD_INSET,
            CAPTION_H - CARD_INSET,
        );
        frame.fill_rect(caption, theme.panel);

        if let Some(tag) = entry.tag {
            let stripe = Rect::new(poster.x + 4.0, poster.y + 4.0, TAG_W, TAG_H);
            frame.fill_rect(stripe, theme.tag_color(tag));
        }

        if hover == Some(i) {
            frame.stroke_rect(rect, HOVER_PEN, theme.hover);
        } else {
            frame.stroke_rect(rect, 1.0, theme.card_edge);
        }
    }
    frame
}

/// Stable decorative tint derived from the title bytes. Stands in for
/// real poster art in headless output.
pub fn poster_tint(title: &str, base: Rgba) -> Rgba {
    let k = title
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    Rgba {
        r: base.r.saturating_add((k % 70) as u8),
        g: base.g.saturating_add(((k >> 8) % 70) as u8),
        b: base.b.saturating_add(((k >> 16) % 70) as u8),
        a: 255,
    }
}
