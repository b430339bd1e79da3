// File: crates/marquee-core/src/geometry.rs
// Summary: Pixel-space primitives and the paint-op stream shared by both charts.

/// Axis-aligned rectangle in pixel space. `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size whose horizontal midpoint sits on `cx`.
    pub fn centered(cx: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x: cx - w / 2.0, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Hit test used for hover highlighting.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// Stroked segment. The engines only emit axis-aligned segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub width: f32,
}

impl Line {
    pub fn horizontal(y: f32, x0: f32, x1: f32, width: f32) -> Self {
        Self { x0, y0: y, x1, y1: y, width }
    }

    pub fn vertical(x: f32, y0: f32, y1: f32, width: f32) -> Self {
        Self { x0: x, y0, x1: x, y1, width }
    }
}

/// Text anchored at a point. Renderers decide font and alignment;
/// the engine only fixes the anchor the way the views placed it.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

impl Label {
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self { text: text.into(), x, y }
    }
}

/// What a shape depicts. Themes map roles to colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Bar,
    Body,
    Wick,
    VolumeBar,
    Gridline,
    SupportLine,
    ResistanceLine,
    Marker,
}

/// Gain/loss classification carried alongside a role so themes can
/// split profitable shapes from losing ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Class {
    Gain,
    Loss,
    Neutral,
}

impl Class {
    /// Zero counts as a gain.
    pub fn of_value(value: f64) -> Self {
        if value >= 0.0 {
            Self::Gain
        } else {
            Self::Loss
        }
    }

    pub fn of_gain(gain: bool) -> Self {
        if gain {
            Self::Gain
        } else {
            Self::Loss
        }
    }
}

/// Geometry primitive inside a paint op. `Marker` is an anchor point;
/// renderers draw a small directional glyph there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Rect(Rect),
    Line(Line),
    Marker { x: f32, y: f32 },
}

/// One renderer-agnostic draw command. Ops are emitted back-to-front,
/// so painting them in order reproduces the intended stacking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintOp {
    pub role: Role,
    pub class: Class,
    pub shape: Primitive,
}

impl PaintOp {
    pub fn new(role: Role, class: Class, shape: Primitive) -> Self {
        Self { role, class, shape }
    }
}

/// Width of one shape slot when `count` shapes share `width` pixels.
/// Every shape gets an equal slot plus equal padding, so the divisor
/// is twice the count. Empty input yields a zero slot.
pub fn slot_width(width: f32, count: usize) -> f32 {
    if count == 0 {
        0.0
    } else {
        width / (count as f32 * 2.0)
    }
}

/// Horizontal midpoint of slot `index`.
pub fn slot_center(index: usize, slot: f32) -> f32 {
    (2 * index + 1) as f32 * slot
}
