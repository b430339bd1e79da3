// File: crates/demo/src/main.rs
// Summary: Demo walks the seeded catalog and renders card sheets, candle charts, and bar charts to PNGs.

use anyhow::{Context, Result};
use marquee_core::types::{SURFACE_HEIGHT, SURFACE_WIDTH};
use marquee_core::{
    filter_entries, layout_bars, layout_candles, page_view, showcase, theme, total_pages,
    FilterState, ALL_PLATFORMS, PAGE_SIZE,
};
use marquee_raster::{render_bar_chart, render_candle_chart, render_card_sheet};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Accept a theme name and output dir from the CLI, with defaults
    let theme_name = std::env::args().nth(1).unwrap_or_else(|| "noir".to_string());
    let out_dir = PathBuf::from(std::env::args().nth(2).unwrap_or_else(|| "target/out".to_string()));
    let theme = theme::find(&theme_name);
    println!("Using theme: {}", theme.name);

    let catalog = showcase::catalog();
    println!(
        "Catalog: {} titles across {} platforms",
        catalog.len(),
        showcase::PLATFORMS.len() - 1
    );

    // 1) Per-platform counts
    for platform in &showcase::PLATFORMS[1..] {
        let n = filter_entries(&catalog, platform, "").len();
        println!("  {platform}: {n}");
    }

    // 2) A search narrowing the grid; matching is case-insensitive
    let hits = filter_entries(&catalog, ALL_PLATFORMS, "COSMIC");
    println!("Search 'COSMIC': {} match(es)", hits.len());

    // 3) Card sheets, one per page
    let pages = total_pages(catalog.len(), PAGE_SIZE);
    for page in 1..=pages {
        let state = FilterState { page, ..FilterState::new() };
        let view = page_view(&catalog, &state, PAGE_SIZE);
        let frame = render_card_sheet(&view.items, None, &theme, SURFACE_WIDTH, SURFACE_HEIGHT);
        let out = out_dir.join(format!("catalog_p{page}.png"));
        frame
            .write_png(&out)
            .with_context(|| format!("failed to write '{}'", out.display()))?;
        println!("Wrote {} ({} cards)", out.display(), view.items.len());
    }

    // 4) Trading charts for the detail pages
    for page in showcase::detail_pages() {
        let geom = layout_candles(&page.series, 960.0, 320.0);
        let frame = render_candle_chart(&geom, &theme);
        let out = out_dir.join(format!("candles_{}.png", slug(&page.title)));
        frame
            .write_png(&out)
            .with_context(|| format!("failed to write '{}'", out.display()))?;
        println!(
            "Wrote {} (price window {:.0}..{:.0})",
            out.display(),
            geom.min_price,
            geom.max_price
        );
    }

    // 5) Portfolio bar charts
    for row in showcase::portfolio() {
        let geom = layout_bars(&row.series, 420.0, 320.0);
        let frame = render_bar_chart(&geom, &theme);
        let out = out_dir.join(format!("bars_{}.png", slug(&row.title)));
        frame
            .write_png(&out)
            .with_context(|| format!("failed to write '{}'", out.display()))?;
        println!("Wrote {} ({} invested, {})", out.display(), row.invested, row.gain);
    }

    Ok(())
}

/// Lowercase file-name slug of a title.
fn slug(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}
