// File: crates/marquee-core/src/lib.rs
// Summary: Core library entry point; exports the catalog, chart geometry, and view state API.

pub mod bars;
pub mod candles;
pub mod catalog;
pub mod geometry;
pub mod scale;
pub mod showcase;
pub mod theme;
pub mod types;
pub mod view;

pub use bars::{layout_bars, BarChartGeometry, BarSeries, BarShape, ThresholdLine};
pub use candles::{layout_candles, CandleChartGeometry, CandleShape, GridLine, OhlcvPoint, TrendMarker};
pub use catalog::{
    filter_entries, page_view, paginate, total_pages, CatalogEntry, CatalogPage, CatalogTag,
    ALL_PLATFORMS, PAGE_SIZE,
};
pub use geometry::{Class, Label, Line, PaintOp, Primitive, Rect, Role};
pub use scale::{BarScale, PriceScale};
pub use theme::{Rgba, Theme};
pub use view::{CarouselState, FilterState, CAROUSEL_INTERVAL};
