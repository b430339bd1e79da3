// File: crates/marquee-core/tests/filtering.rs
// Purpose: Validate the platform/search filter predicate over the seeded catalog.

use marquee_core::{filter_entries, showcase, CatalogEntry, ALL_PLATFORMS};

fn titles<'a>(entries: &[&'a CatalogEntry]) -> Vec<&'a str> {
    entries.iter().map(|e| e.title.as_str()).collect()
}

#[test]
fn all_platforms_empty_search_passes_everything() {
    let catalog = showcase::catalog();
    let filtered = filter_entries(&catalog, ALL_PLATFORMS, "");
    assert_eq!(filtered.len(), catalog.len());
    // Catalog order is preserved
    for (kept, seed) in filtered.iter().zip(&catalog) {
        assert_eq!(kept.title, seed.title);
    }
}

#[test]
fn platform_narrows_to_exact_matches() {
    let catalog = showcase::catalog();
    let filtered = filter_entries(&catalog, "A24", "");
    assert_eq!(titles(&filtered), ["Echoes of the Past", "The Glass Orchard"]);

    let filtered = filter_entries(&catalog, "Netflix", "");
    assert_eq!(titles(&filtered), ["Neon City Nights"]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let catalog = showcase::catalog();
    let filtered = filter_entries(&catalog, ALL_PLATFORMS, "COSMIC");
    assert_eq!(titles(&filtered), ["The Cosmic Front"]);

    // Mid-word fragment matches too
    let filtered = filter_entries(&catalog, ALL_PLATFORMS, "ers");
    assert_eq!(titles(&filtered), ["Whispers of the Dead"]);
}

#[test]
fn platform_and_search_combine_as_and() {
    let catalog = showcase::catalog();
    let filtered = filter_entries(&catalog, "Hulu", "star");
    assert_eq!(titles(&filtered), ["Starlight Serenade"]);

    // Right title, wrong platform => empty
    let filtered = filter_entries(&catalog, "Netflix", "star");
    assert!(filtered.is_empty());
}

#[test]
fn unmatched_search_yields_empty() {
    let catalog = showcase::catalog();
    assert!(filter_entries(&catalog, ALL_PLATFORMS, "zzz").is_empty());
}

#[test]
fn filter_is_idempotent() {
    let catalog = showcase::catalog();
    let once = filter_entries(&catalog, "Hulu", "a");
    let owned: Vec<CatalogEntry> = once.iter().map(|e| (*e).clone()).collect();
    let twice = filter_entries(&owned, "Hulu", "a");
    assert_eq!(titles(&once), titles(&twice));
}

#[test]
fn empty_catalog_filters_to_empty() {
    let none: Vec<CatalogEntry> = Vec::new();
    assert!(filter_entries(&none, ALL_PLATFORMS, "").is_empty());
    assert!(filter_entries(&none, "Netflix", "x").is_empty());
}
