// File: crates/marquee-core/src/candles.rs
// Summary: OHLCV candlestick layout: bodies, wicks, volume bars, gridlines, trend markers.

use crate::geometry::{slot_center, slot_width, Class, Label, Line, PaintOp, Primitive, Rect, Role};
use crate::scale::PriceScale;
use crate::types::{
    GRIDLINE_COUNT, MARKER_RISE, PLOT_BAND, RANGE_EPSILON, VOLUME_BAND, VOLUME_FLOOR, WICK_WIDTH,
};

/// Stroke width of gridlines in pixels.
pub const GRID_WIDTH: f32 = 1.0;
/// Fixed x anchor of gridline price labels.
pub const GRID_LABEL_X: f32 = 32.0;
/// Vertical offset of a gridline label above its line, in pixels.
pub const GRID_LABEL_RISE: f32 = 10.0;

/// One trading period: open/high/low/close prices plus traded volume.
///
/// `is_gain` normally follows from close versus open but is stored
/// explicitly so a feed can override it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OhlcvPoint {
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    pub is_gain: bool,
}

impl OhlcvPoint {
    /// Point with `is_gain` derived from the close/open comparison.
    pub fn new(open: f64, close: f64, high: f64, low: f64, volume: f64) -> Self {
        Self { open, close, high, low, volume, is_gain: close >= open }
    }

    /// Whether the high/low span covers the open/close body. Layout
    /// does not require this; a point violating it just draws with the
    /// wick inside the body.
    pub fn body_contained(&self) -> bool {
        self.high >= self.open.max(self.close) && self.low <= self.open.min(self.close)
    }
}

/// One laid-out candle: body rectangle plus the wick running through it.
#[derive(Clone, Debug, PartialEq)]
pub struct CandleShape {
    pub body: Rect,
    pub wick: Line,
    pub center_x: f32,
    pub class: Class,
}

/// Horizontal reference line with its price caption.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub price: f64,
    pub line: Line,
    pub label: Label,
}

/// Anchor for the per-period gain/loss glyph above a candle close.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendMarker {
    pub x: f32,
    pub y: f32,
    pub class: Class,
}

/// Complete candle chart geometry for one surface size.
#[derive(Clone, Debug)]
pub struct CandleChartGeometry {
    pub width: f32,
    pub height: f32,
    /// Width of each candle body; also the gap between candles.
    pub bar_width: f32,
    /// Price window after the empty-series fallback, before the
    /// epsilon floor.
    pub max_price: f64,
    pub min_price: f64,
    pub candles: Vec<CandleShape>,
    pub volume: Vec<Rect>,
    pub gridlines: Vec<GridLine>,
    pub markers: Vec<TrendMarker>,
}

impl CandleChartGeometry {
    /// Draw commands back-to-front: gridlines, then wicks under their
    /// bodies, then volume bars, then markers on top.
    pub fn paint_ops(&self) -> Vec<PaintOp> {
        let mut ops = Vec::with_capacity(
            self.gridlines.len() + self.candles.len() * 2 + self.volume.len() + self.markers.len(),
        );
        for grid in &self.gridlines {
            ops.push(PaintOp::new(Role::Gridline, Class::Neutral, Primitive::Line(grid.line)));
        }
        for candle in &self.candles {
            ops.push(PaintOp::new(Role::Wick, candle.class, Primitive::Line(candle.wick)));
            ops.push(PaintOp::new(Role::Body, candle.class, Primitive::Rect(candle.body)));
        }
        for &rect in &self.volume {
            ops.push(PaintOp::new(Role::VolumeBar, Class::Neutral, Primitive::Rect(rect)));
        }
        for marker in &self.markers {
            ops.push(PaintOp::new(
                Role::Marker,
                marker.class,
                Primitive::Marker { x: marker.x, y: marker.y },
            ));
        }
        ops
    }

    /// Gridline price captions.
    pub fn labels(&self) -> Vec<&Label> {
        self.gridlines.iter().map(|g| &g.label).collect()
    }
}

/// Lay out `points` on a `width` x `height` surface.
///
/// The price window is the extent of highs and lows; an empty series
/// falls back to `[0, 1]` so the gridlines still draw. Candles sit in
/// equal slots across the width, volume bars share a bottom edge at
/// 80% height, and six gridlines split the plot band with the price
/// each one crosses. Total for every input: flat windows and all-zero
/// volume are floored before division.
pub fn layout_candles(points: &[OhlcvPoint], width: f32, height: f32) -> CandleChartGeometry {
    let max_price = points.iter().map(|p| p.high).fold(None, fold_max).unwrap_or(1.0);
    let min_price = points.iter().map(|p| p.low).fold(None, fold_min).unwrap_or(0.0);
    let scale = PriceScale::banded(height, max_price, min_price);
    let range = max_price - min_price;

    let bar_width = slot_width(width, points.len());
    let max_volume = points
        .iter()
        .map(|p| p.volume)
        .fold(None, fold_max)
        .unwrap_or(1.0)
        .max(RANGE_EPSILON);
    let volume_floor = height * VOLUME_FLOOR;

    let mut candles = Vec::with_capacity(points.len());
    let mut volume = Vec::with_capacity(points.len());
    let mut markers = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let center = slot_center(i, bar_width);
        let open_y = scale.to_y(p.open);
        let close_y = scale.to_y(p.close);
        let body_top = open_y.min(close_y);
        let class = Class::of_gain(p.is_gain);
        candles.push(CandleShape {
            body: Rect::centered(center, body_top, bar_width, (close_y - open_y).abs()),
            wick: Line::vertical(center, scale.to_y(p.high), scale.to_y(p.low), WICK_WIDTH),
            center_x: center,
            class,
        });
        let vol_h = (p.volume / max_volume) as f32 * height * VOLUME_BAND;
        volume.push(Rect::centered(center, volume_floor - vol_h, bar_width, vol_h));
        markers.push(TrendMarker { x: center, y: close_y - MARKER_RISE, class });
    }

    let steps = (GRIDLINE_COUNT - 1) as f64;
    let gridlines = (0..GRIDLINE_COUNT)
        .map(|i| {
            let y = scale.band_top() + i as f32 * (height * PLOT_BAND) / steps as f32;
            let price = max_price - i as f64 * range / steps;
            GridLine {
                price,
                line: Line::horizontal(y, 0.0, width, GRID_WIDTH),
                label: Label::new(format!("{price:.0}"), GRID_LABEL_X, y - GRID_LABEL_RISE),
            }
        })
        .collect();

    CandleChartGeometry {
        width,
        height,
        bar_width,
        max_price,
        min_price,
        candles,
        volume,
        gridlines,
        markers,
    }
}

fn fold_max(acc: Option<f64>, v: f64) -> Option<f64> {
    Some(match acc {
        None => v,
        Some(hi) => f64::max(hi, v),
    })
}

fn fold_min(acc: Option<f64>, v: f64) -> Option<f64> {
    Some(match acc {
        None => v,
        Some(lo) => f64::min(lo, v),
    })
}
