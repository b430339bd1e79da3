// File: crates/marquee-raster/src/lib.rs
// Summary: CPU raster backend entry point; paints core geometry into RGBA frames.

pub mod cards;
pub mod charts;
pub mod frame;

pub use cards::{card_at, card_rects, poster_tint, render_card_sheet};
pub use charts::{render_bar_chart, render_candle_chart, MARKER_SIZE};
pub use frame::{Frame, RasterError};
