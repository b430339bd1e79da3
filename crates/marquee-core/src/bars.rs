// File: crates/marquee-core/src/bars.rs
// Summary: Portfolio bar chart layout: signed bars over a baseline plus threshold lines.

use crate::geometry::{slot_center, slot_width, Class, Label, Line, PaintOp, Primitive, Rect, Role};
use crate::scale::BarScale;
use crate::types::THRESHOLD_LABEL_RISE;

/// Stroke width of the support and resistance lines in pixels.
pub const THRESHOLD_WIDTH: f32 = 2.0;

/// Input to the bar layout: signed per-period values bracketed by a
/// support and a resistance threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries {
    pub values: Vec<f64>,
    pub support: f64,
    pub resistance: f64,
}

impl BarSeries {
    pub fn new(values: Vec<f64>, support: f64, resistance: f64) -> Self {
        Self { values, support, resistance }
    }
}

/// One laid-out bar. Gains and losses both rise from the baseline; the
/// class tells them apart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarShape {
    pub rect: Rect,
    pub value: f64,
    pub class: Class,
    /// Rounded value, anchored just inside the top of the bar.
    pub label: Label,
}

/// Support or resistance line with its caption.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdLine {
    pub value: f64,
    pub line: Line,
    pub label: Label,
}

/// Complete bar chart geometry for one surface size.
#[derive(Clone, Debug)]
pub struct BarChartGeometry {
    pub width: f32,
    pub height: f32,
    /// Width of each bar; also the gap between bars.
    pub bar_width: f32,
    /// Pixels per value unit. Exactly 1.0 when the value range collapses.
    pub v_scale: f64,
    pub baseline_y: f32,
    pub bars: Vec<BarShape>,
    pub support: ThresholdLine,
    pub resistance: ThresholdLine,
}

impl BarChartGeometry {
    /// Draw commands back-to-front: bars first, then the threshold
    /// lines over them.
    pub fn paint_ops(&self) -> Vec<PaintOp> {
        let mut ops = Vec::with_capacity(self.bars.len() + 2);
        for bar in &self.bars {
            ops.push(PaintOp::new(Role::Bar, bar.class, Primitive::Rect(bar.rect)));
        }
        ops.push(PaintOp::new(
            Role::SupportLine,
            Class::Neutral,
            Primitive::Line(self.support.line),
        ));
        ops.push(PaintOp::new(
            Role::ResistanceLine,
            Class::Neutral,
            Primitive::Line(self.resistance.line),
        ));
        ops
    }

    /// Every caption on the chart: one per bar plus the two thresholds.
    pub fn labels(&self) -> Vec<&Label> {
        let mut labels: Vec<&Label> = self.bars.iter().map(|b| &b.label).collect();
        labels.push(&self.support.label);
        labels.push(&self.resistance.label);
        labels
    }
}

/// Lay out `series` on a `width` x `height` surface.
///
/// The value window is the union of both thresholds and the data
/// extent; with no data it collapses to the thresholds alone. Bars are
/// slotted across the full width, bottom-anchored on the baseline, and
/// sized by the anchored scale. Total for every input: a flat window
/// falls back to one pixel per unit instead of dividing by zero.
pub fn layout_bars(series: &BarSeries, width: f32, height: f32) -> BarChartGeometry {
    let extent = series.values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
    });
    let (min_val, max_val) = match extent {
        Some((lo, hi)) => (series.support.min(lo), series.resistance.max(hi)),
        None => (series.support, series.resistance),
    };

    let scale = BarScale::anchored(height, max_val, min_val);
    let bar_width = slot_width(width, series.values.len());
    let baseline_y = scale.baseline();

    let bars = series
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let center = slot_center(i, bar_width);
            let len = scale.bar_len(value);
            let rect = Rect::centered(center, baseline_y - len, bar_width, len);
            let label = Label::new(format!("{value:.0}"), center, rect.y + 2.0);
            BarShape { rect, value, class: Class::of_value(value), label }
        })
        .collect();

    let support_y = scale.line_y(series.support);
    let resistance_y = scale.line_y(series.resistance);
    let support = ThresholdLine {
        value: series.support,
        line: Line::horizontal(support_y, 0.0, width, THRESHOLD_WIDTH),
        label: Label::new("SUPPORT", width * 0.18, support_y - THRESHOLD_LABEL_RISE),
    };
    let resistance = ThresholdLine {
        value: series.resistance,
        line: Line::horizontal(resistance_y, 0.0, width, THRESHOLD_WIDTH),
        label: Label::new("RESISTANCE", width * 0.70, resistance_y + THRESHOLD_LABEL_RISE),
    };

    BarChartGeometry {
        width,
        height,
        bar_width,
        v_scale: scale.px_per_unit(),
        baseline_y,
        bars,
        support,
        resistance,
    }
}
