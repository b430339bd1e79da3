// File: crates/marquee-core/tests/candle_layout.rs
// Purpose: Validate candle chart geometry: banded scale, volume, gridlines, markers.

use marquee_core::{layout_candles, showcase, Class, OhlcvPoint, Primitive, Role};

const W: f32 = 960.0;
const H: f32 = 320.0;

fn cosmic() -> Vec<OhlcvPoint> {
    showcase::cosmic_front().series
}

// Price y for the cosmic window [95, 210] on a 320px surface.
fn price_y(price: f64) -> f32 {
    H * 0.1 + ((210.0 - price) / 115.0) as f32 * (H * 0.7)
}

#[test]
fn price_window_spans_highs_and_lows() {
    let geom = layout_candles(&cosmic(), W, H);
    assert_eq!(geom.max_price, 210.0);
    assert_eq!(geom.min_price, 95.0);
    // 10 candles over 960px => 48px bodies with 48px gaps
    assert!((geom.bar_width - 48.0).abs() < 1e-4);
}

#[test]
fn extremes_touch_the_band_edges() {
    let points = cosmic();
    let geom = layout_candles(&points, W, H);
    // Highest high (210, candle 9) lands on the band top; lowest low
    // (95, candle 0) lands on the band bottom
    assert!((geom.candles[9].wick.y0 - H * 0.1).abs() < 1e-3);
    assert!((geom.candles[0].wick.y1 - H * 0.8).abs() < 1e-3);
}

#[test]
fn bodies_span_open_to_close() {
    let points = cosmic();
    let geom = layout_candles(&points, W, H);
    for (p, candle) in points.iter().zip(&geom.candles) {
        let open_y = price_y(p.open);
        let close_y = price_y(p.close);
        assert!((candle.body.y - open_y.min(close_y)).abs() < 1e-3);
        assert!((candle.body.h - (open_y - close_y).abs()).abs() < 1e-3);
        assert!((candle.body.w - 48.0).abs() < 1e-4);
        // Wick runs high to low through the slot center
        assert!((candle.wick.x0 - candle.center_x).abs() < 1e-4);
        assert!((candle.wick.y0 - price_y(p.high)).abs() < 1e-3);
        assert!((candle.wick.y1 - price_y(p.low)).abs() < 1e-3);
        assert_eq!(candle.class, if p.is_gain { Class::Gain } else { Class::Loss });
    }
}

#[test]
fn candles_sit_in_odd_slots() {
    let geom = layout_candles(&cosmic(), W, H);
    for (i, candle) in geom.candles.iter().enumerate() {
        let center = (2 * i + 1) as f32 * 48.0;
        assert!((candle.center_x - center).abs() < 1e-3);
        assert!((candle.body.x - (center - 24.0)).abs() < 1e-3);
    }
}

#[test]
fn volume_bars_share_the_floor() {
    let points = cosmic();
    let geom = layout_candles(&points, W, H);
    // Largest volume in the feed is 3500
    for (p, rect) in points.iter().zip(&geom.volume) {
        let expect_h = (p.volume / 3500.0) as f32 * H * 0.18;
        assert!((rect.h - expect_h).abs() < 1e-3);
        assert!((rect.bottom() - H * 0.8).abs() < 1e-3);
    }
    // The 3500-volume candle fills the whole band
    assert!((geom.volume[8].h - H * 0.18).abs() < 1e-3);
}

#[test]
fn six_gridlines_split_the_band() {
    let geom = layout_candles(&cosmic(), W, H);
    assert_eq!(geom.gridlines.len(), 6);
    let texts: Vec<&str> = geom.gridlines.iter().map(|g| g.label.text.as_str()).collect();
    assert_eq!(texts, ["210", "187", "164", "141", "118", "95"]);
    for (i, grid) in geom.gridlines.iter().enumerate() {
        let y = H * 0.1 + i as f32 * (H * 0.7) / 5.0;
        assert!((grid.line.y0 - y).abs() < 1e-3);
        assert!((grid.line.x1 - W).abs() < 1e-4);
        // Captions hang at a fixed x, just above their line
        assert!((grid.label.x - 32.0).abs() < 1e-6);
        assert!((grid.label.y - (y - 10.0)).abs() < 1e-3);
    }
}

#[test]
fn markers_float_above_the_close() {
    let points = cosmic();
    let geom = layout_candles(&points, W, H);
    assert_eq!(geom.markers.len(), points.len());
    for (i, (p, marker)) in points.iter().zip(&geom.markers).enumerate() {
        assert!((marker.x - (2 * i + 1) as f32 * 48.0).abs() < 1e-3);
        assert!((marker.y - (price_y(p.close) - 18.0)).abs() < 1e-3);
        assert_eq!(marker.class, if p.is_gain { Class::Gain } else { Class::Loss });
    }
}

#[test]
fn flat_series_stays_finite() {
    let points: Vec<OhlcvPoint> = (0..5).map(|_| OhlcvPoint::new(100.0, 100.0, 100.0, 100.0, 1000.0)).collect();
    let geom = layout_candles(&points, W, H);
    for candle in &geom.candles {
        assert!(candle.body.y.is_finite());
        assert!(candle.wick.y0.is_finite());
        // Every price collapses onto the band top
        assert!((candle.body.y - H * 0.1).abs() < 1e-2);
        assert!(candle.body.h < 1e-2);
    }
    for grid in &geom.gridlines {
        assert_eq!(grid.label.text, "100");
        assert!(grid.line.y0.is_finite());
    }
}

#[test]
fn zero_volume_feed_draws_no_volume_height() {
    let points = vec![
        OhlcvPoint::new(10.0, 12.0, 13.0, 9.0, 0.0),
        OhlcvPoint::new(12.0, 11.0, 14.0, 10.0, 0.0),
    ];
    let geom = layout_candles(&points, W, H);
    for rect in &geom.volume {
        assert!(rect.h.abs() < 1e-6);
    }
}

#[test]
fn empty_series_falls_back_to_unit_window() {
    let geom = layout_candles(&[], W, H);
    assert!(geom.candles.is_empty());
    assert!(geom.volume.is_empty());
    assert!(geom.markers.is_empty());
    assert_eq!(geom.max_price, 1.0);
    assert_eq!(geom.min_price, 0.0);
    // Gridlines still draw over the unit window
    assert_eq!(geom.gridlines.len(), 6);
    let texts: Vec<&str> = geom.gridlines.iter().map(|g| g.label.text.as_str()).collect();
    assert_eq!(texts, ["1", "1", "1", "0", "0", "0"]);
}

#[test]
fn paint_ops_order_back_to_front() {
    let geom = layout_candles(&cosmic(), W, H);
    let ops = geom.paint_ops();
    assert_eq!(ops.len(), 6 + 10 * 2 + 10 + 10);
    // Gridlines first, markers last
    assert_eq!(ops[0].role, Role::Gridline);
    assert_eq!(ops.last().unwrap().role, Role::Marker);
    // Each wick comes immediately before its body
    assert_eq!(ops[6].role, Role::Wick);
    assert_eq!(ops[7].role, Role::Body);
    assert!(matches!(ops[7].shape, Primitive::Rect(_)));
}

#[test]
fn seeded_feeds_are_well_formed() {
    for page in showcase::detail_pages() {
        assert_eq!(page.series.len(), 10);
        for p in &page.series {
            assert!(p.body_contained());
            assert!(p.volume > 0.0);
        }
    }
}
