// File: crates/marquee-raster/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow for the three painters.
// Behavior:
// - Renders deterministic frames from the seeded showcase data.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns without failing to ease first run.

use marquee_core::{layout_bars, layout_candles, page_view, showcase, theme, FilterState, PAGE_SIZE};
use marquee_raster::{render_bar_chart, render_candle_chart, render_card_sheet, Frame};

fn check(name: &str, frame: &Frame) {
    let bytes = frame.png_bytes().expect("encode png");
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join(name);

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(
            got_img.as_raw(),
            want_img.as_raw(),
            "rendered pixels differ from golden snapshot: {}",
            snap_path.display()
        );
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}

#[test]
fn golden_bar_chart() {
    let rows = showcase::portfolio();
    let geom = layout_bars(&rows[0].series, 420.0, 320.0);
    let frame = render_bar_chart(&geom, &theme::Theme::noir());
    check("bar_chart_noir.png", &frame);
}

#[test]
fn golden_candle_chart() {
    let page = showcase::cosmic_front();
    let geom = layout_candles(&page.series, 960.0, 320.0);
    let frame = render_candle_chart(&geom, &theme::Theme::noir());
    check("candle_chart_noir.png", &frame);
}

#[test]
fn golden_card_sheet() {
    let catalog = showcase::catalog();
    let view = page_view(&catalog, &FilterState::new(), PAGE_SIZE);
    let frame = render_card_sheet(&view.items, Some(2), &theme::Theme::neon(), 1024, 640);
    check("card_sheet_neon.png", &frame);
}
