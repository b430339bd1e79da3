// File: crates/marquee-core/src/types.rs
// Summary: Layout constants shared by the bar and candle geometry engines.

/// Default raster surface width in pixels.
pub const SURFACE_WIDTH: u32 = 1024;
/// Default raster surface height in pixels.
pub const SURFACE_HEIGHT: u32 = 640;

/// Top of the candle plot band, as a fraction of surface height.
pub const PLOT_TOP: f32 = 0.10;
/// Height of the candle plot band, as a fraction of surface height.
pub const PLOT_BAND: f32 = 0.70;
/// Baseline for portfolio bars, as a fraction of surface height.
pub const BAR_BASELINE: f32 = 0.85;
/// Maximum volume bar height, as a fraction of surface height.
pub const VOLUME_BAND: f32 = 0.18;
/// Bottom edge shared by every volume bar, as a fraction of surface height.
pub const VOLUME_FLOOR: f32 = 0.80;

/// Number of horizontal gridlines on a candle chart.
pub const GRIDLINE_COUNT: usize = 6;
/// Stroke width of candle wicks in pixels.
pub const WICK_WIDTH: f32 = 2.0;
/// Vertical offset of trend markers above a candle close, in pixels.
pub const MARKER_RISE: f32 = 18.0;
/// Vertical offset of threshold labels from their line, in pixels.
pub const THRESHOLD_LABEL_RISE: f32 = 18.0;

/// Floor applied to price ranges before division so flat and
/// single-point series map to finite pixels.
pub const RANGE_EPSILON: f64 = 1e-9;
