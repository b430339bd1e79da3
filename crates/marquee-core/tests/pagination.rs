// File: crates/marquee-core/tests/pagination.rs
// Purpose: Validate pagination windows, page counts, and the combined page view.

use marquee_core::{page_view, paginate, showcase, total_pages, FilterState, PAGE_SIZE};

#[test]
fn total_pages_rounds_up_and_floors_at_one() {
    assert_eq!(total_pages(0, 6), 1);
    assert_eq!(total_pages(1, 6), 1);
    assert_eq!(total_pages(6, 6), 1);
    assert_eq!(total_pages(7, 6), 2);
    assert_eq!(total_pages(12, 6), 2);
    assert_eq!(total_pages(13, 6), 3);
}

#[test]
fn zero_page_size_counts_as_one() {
    assert_eq!(total_pages(10, 0), 10);
    assert_eq!(total_pages(0, 0), 1);
}

#[test]
fn paginate_windows_without_clamping() {
    let items: Vec<u32> = (0..8).collect();
    assert_eq!(paginate(&items, 1, 6), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(paginate(&items, 2, 6), &[6, 7]);
    // Out-of-range pages are empty, not clamped to the last page
    assert!(paginate(&items, 3, 6).is_empty());
    assert!(paginate(&items, 99, 6).is_empty());
    assert!(paginate::<u32>(&[], 1, 6).is_empty());
}

#[test]
fn page_zero_is_out_of_range() {
    let items: Vec<u32> = (0..8).collect();
    assert!(paginate(&items, 0, 6).is_empty());
}

#[test]
fn zero_page_size_windows_are_empty() {
    let items: Vec<u32> = (0..8).collect();
    assert!(paginate(&items, 1, 0).is_empty());
}

#[test]
fn pages_partition_the_input() {
    let items: Vec<u32> = (0..23).collect();
    let pages = total_pages(items.len(), 6);
    assert_eq!(pages, 4);
    let mut rebuilt = Vec::new();
    for page in 1..=pages {
        rebuilt.extend_from_slice(paginate(&items, page, 6));
    }
    assert_eq!(rebuilt, items);
}

#[test]
fn page_view_reports_matches_and_pages() {
    let catalog = showcase::catalog();
    let state = FilterState::new();
    let view = page_view(&catalog, &state, PAGE_SIZE);
    assert_eq!(view.matches, 8);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.items.len(), 6);
    assert_eq!(view.page, 1);

    let state = FilterState { page: 2, ..FilterState::new() };
    let view = page_view(&catalog, &state, PAGE_SIZE);
    assert_eq!(view.items.len(), 2);
    assert_eq!(view.items[0].title, "The Glass Orchard");
}

#[test]
fn stale_page_shows_empty_after_filter_narrows() {
    let catalog = showcase::catalog();
    // User is on page 2, then a search narrows matches to a single page
    let state = FilterState { search: "the".to_string(), page: 2, ..FilterState::new() };
    let view = page_view(&catalog, &state, PAGE_SIZE);
    assert!(view.matches <= PAGE_SIZE);
    assert_eq!(view.total_pages, 1);
    assert!(view.items.is_empty());
    // The requested page is reported untouched
    assert_eq!(view.page, 2);
}
