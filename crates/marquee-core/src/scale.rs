// File: crates/marquee-core/src/scale.rs
// Summary: Price-to-pixel scales for the banded candle plot and the anchored bar plot.

use crate::types::{BAR_BASELINE, PLOT_BAND, PLOT_TOP, RANGE_EPSILON};

/// Maps prices into the candle plot band. The band is inset from the
/// surface: its top sits at 10% of the height and it spans 70%, which
/// leaves the strip underneath for volume bars.
#[derive(Clone, Copy, Debug)]
pub struct PriceScale {
    top: f32,
    band: f32,
    max: f64,
    range: f64,
}

impl PriceScale {
    /// Scale for a surface `height` px tall showing `[min_price, max_price]`.
    /// The range is floored by [`RANGE_EPSILON`] so a flat window still
    /// maps every price to a finite y.
    pub fn banded(height: f32, max_price: f64, min_price: f64) -> Self {
        Self {
            top: height * PLOT_TOP,
            band: height * PLOT_BAND,
            max: max_price,
            range: (max_price - min_price).max(RANGE_EPSILON),
        }
    }

    /// Pixel y of `price`. The maximum lands on the band top and the
    /// minimum on the band bottom.
    pub fn to_y(&self, price: f64) -> f32 {
        self.top + ((self.max - price) / self.range) as f32 * self.band
    }

    pub fn band_top(&self) -> f32 {
        self.top
    }

    pub fn band_bottom(&self) -> f32 {
        self.top + self.band
    }
}

/// Maps signed bar values to lengths above (or below) a fixed baseline
/// near the bottom of the surface.
#[derive(Clone, Copy, Debug)]
pub struct BarScale {
    baseline: f32,
    px_per_unit: f64,
}

impl BarScale {
    /// Scale for a surface `height` px tall covering `[min_val, max_val]`.
    /// A collapsed range pins the scale to one pixel per unit instead of
    /// dividing by zero.
    pub fn anchored(height: f32, max_val: f64, min_val: f64) -> Self {
        let span = max_val - min_val;
        let px_per_unit = if span == 0.0 {
            1.0
        } else {
            (height * PLOT_BAND) as f64 / span
        };
        Self { baseline: height * BAR_BASELINE, px_per_unit }
    }

    /// Bar length in pixels for `value`, sign discarded.
    pub fn bar_len(&self, value: f64) -> f32 {
        (value.abs() * self.px_per_unit) as f32
    }

    /// Pixel y of the horizontal line sitting `value` units above the
    /// baseline. Negative values land below it.
    pub fn line_y(&self, value: f64) -> f32 {
        self.baseline - (value * self.px_per_unit) as f32
    }

    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    pub fn px_per_unit(&self) -> f64 {
        self.px_per_unit
    }
}
