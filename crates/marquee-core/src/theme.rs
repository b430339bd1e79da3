// File: crates/marquee-core/src/theme.rs
// Summary: Color themes mapping paint-op roles and catalog tags to RGBA colors.

use crate::catalog::CatalogTag;
use crate::geometry::{Class, Role};

/// 8-bit RGBA color, straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub panel: Rgba,
    pub grid: Rgba,
    pub axis_label: Rgba,
    pub gain: Rgba,
    pub loss: Rgba,
    pub volume: Rgba,
    pub support: Rgba,
    pub resistance: Rgba,
    pub card: Rgba,
    pub card_edge: Rgba,
    pub hover: Rgba,
    pub tag_hot_pick: Rgba,
    pub tag_low_risk: Rgba,
    pub tag_trending: Rgba,
}

impl Theme {
    pub fn noir() -> Self {
        Self {
            name: "noir",
            background: Rgba::from_argb(255, 16, 10, 28),
            panel: Rgba::from_argb(255, 24, 18, 42),
            grid: Rgba::from_argb(46, 168, 168, 180),
            axis_label: Rgba::from_argb(255, 232, 234, 246),
            gain: Rgba::from_argb(255, 52, 199, 89),
            loss: Rgba::from_argb(255, 255, 69, 58),
            volume: Rgba::from_argb(102, 10, 132, 255), // translucent blue band
            support: Rgba::from_argb(178, 10, 132, 255),
            resistance: Rgba::from_argb(178, 255, 69, 58),
            card: Rgba::from_argb(255, 32, 26, 56),
            card_edge: Rgba::from_argb(255, 74, 62, 110),
            hover: Rgba::from_argb(255, 100, 210, 255),
            tag_hot_pick: Rgba::from_argb(255, 255, 55, 95),
            tag_low_risk: Rgba::from_argb(255, 64, 200, 224),
            tag_trending: Rgba::from_argb(255, 52, 199, 89),
        }
    }

    pub fn neon() -> Self {
        Self {
            name: "neon",
            background: Rgba::from_argb(255, 6, 12, 26),
            panel: Rgba::from_argb(255, 12, 20, 40),
            grid: Rgba::from_argb(46, 191, 90, 242), // faint purple
            axis_label: Rgba::from_argb(255, 224, 240, 250),
            gain: Rgba::from_argb(255, 48, 209, 88),
            loss: Rgba::from_argb(255, 255, 55, 95),
            volume: Rgba::from_argb(102, 50, 220, 240), // translucent cyan band
            support: Rgba::from_argb(178, 50, 220, 240),
            resistance: Rgba::from_argb(178, 255, 55, 95),
            card: Rgba::from_argb(255, 18, 28, 54),
            card_edge: Rgba::from_argb(255, 46, 76, 120),
            hover: Rgba::from_argb(255, 255, 214, 80),
            tag_hot_pick: Rgba::from_argb(255, 255, 55, 95),
            tag_low_risk: Rgba::from_argb(255, 64, 200, 224),
            tag_trending: Rgba::from_argb(255, 48, 209, 88),
        }
    }

    pub fn daylight() -> Self {
        Self {
            name: "daylight",
            background: Rgba::from_argb(255, 248, 248, 252),
            panel: Rgba::from_argb(255, 255, 255, 255),
            grid: Rgba::from_argb(46, 60, 60, 70),
            axis_label: Rgba::from_argb(255, 22, 22, 30),
            gain: Rgba::from_argb(255, 32, 160, 90),
            loss: Rgba::from_argb(255, 208, 58, 48),
            volume: Rgba::from_argb(102, 10, 110, 220),
            support: Rgba::from_argb(178, 10, 110, 220),
            resistance: Rgba::from_argb(178, 208, 58, 48),
            card: Rgba::from_argb(255, 255, 255, 255),
            card_edge: Rgba::from_argb(255, 214, 214, 224),
            hover: Rgba::from_argb(255, 10, 110, 220),
            tag_hot_pick: Rgba::from_argb(255, 224, 44, 84),
            tag_low_risk: Rgba::from_argb(255, 24, 150, 180),
            tag_trending: Rgba::from_argb(255, 32, 160, 90),
        }
    }

    /// Fill color for a paint op. Shapes that read as gain or loss take
    /// the classed color; neutral shapes take their role's color.
    pub fn color_for(&self, role: Role, class: Class) -> Rgba {
        match role {
            Role::Gridline => self.grid,
            Role::SupportLine => self.support,
            Role::ResistanceLine => self.resistance,
            Role::VolumeBar => self.volume,
            Role::Bar | Role::Body | Role::Wick | Role::Marker => match class {
                Class::Gain => self.gain,
                Class::Loss => self.loss,
                Class::Neutral => self.axis_label,
            },
        }
    }

    pub fn tag_color(&self, tag: CatalogTag) -> Rgba {
        match tag {
            CatalogTag::HotPick => self.tag_hot_pick,
            CatalogTag::LowRisk => self.tag_low_risk,
            CatalogTag::Trending => self.tag_trending,
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::noir(), Theme::neon(), Theme::daylight()]
}

/// Find a theme by its `name`, falling back to noir.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::noir()
}
