// File: crates/marquee-core/src/catalog.rs
// Summary: Catalog entries plus the platform/search filter and pagination windowing.

use crate::view::FilterState;

/// Platform selector value that matches every entry.
pub const ALL_PLATFORMS: &str = "All Platforms";

/// Entries shown per catalog page.
pub const PAGE_SIZE: usize = 6;

/// Promotional badge attached to some catalog entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogTag {
    HotPick,
    LowRisk,
    Trending,
}

impl CatalogTag {
    pub fn label(&self) -> &'static str {
        match self {
            Self::HotPick => "Hot Pick",
            Self::LowRisk => "Low Risk",
            Self::Trending => "Trending",
        }
    }
}

/// One listed title in the investment catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,
    pub platform: String,
    pub release: String,
    pub poster: String,
    pub tag: Option<CatalogTag>,
}

impl CatalogEntry {
    pub fn new(
        title: impl Into<String>,
        platform: impl Into<String>,
        release: impl Into<String>,
        poster: impl Into<String>,
        tag: Option<CatalogTag>,
    ) -> Self {
        Self {
            title: title.into(),
            platform: platform.into(),
            release: release.into(),
            poster: poster.into(),
            tag,
        }
    }
}

/// Entries passing the platform and search predicates, in catalog order.
///
/// The platform test is an exact match unless `platform` is
/// [`ALL_PLATFORMS`]. The search test is a case-insensitive substring
/// match on the title; an empty needle passes everything.
pub fn filter_entries<'a>(
    entries: &'a [CatalogEntry],
    platform: &str,
    search: &str,
) -> Vec<&'a CatalogEntry> {
    let needle = search.to_lowercase();
    entries
        .iter()
        .filter(|e| platform == ALL_PLATFORMS || e.platform == platform)
        .filter(|e| needle.is_empty() || e.title.to_lowercase().contains(&needle))
        .collect()
}

/// Window of `items` for one-based `page`. Pages past the end (and
/// page zero) come back empty rather than clamping to the last page.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Pages needed for `count` items, never less than one. A zero
/// `page_size` is treated as one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// One rendered page of the catalog together with its pagination facts.
#[derive(Clone, Debug)]
pub struct CatalogPage<'a> {
    /// Entries on the requested page, at most `page_size` of them.
    pub items: Vec<&'a CatalogEntry>,
    /// The page that was asked for, unclamped.
    pub page: usize,
    pub total_pages: usize,
    /// Entries passing the filter across all pages.
    pub matches: usize,
}

/// Filter then window in one step. The page in `state` is honored
/// as-is, so a page left stale by a narrowing filter simply shows up
/// empty while `total_pages` reports the new count.
pub fn page_view<'a>(
    entries: &'a [CatalogEntry],
    state: &FilterState,
    page_size: usize,
) -> CatalogPage<'a> {
    let filtered = filter_entries(entries, &state.platform, &state.search);
    let matches = filtered.len();
    let total = total_pages(matches, page_size);
    let items = paginate(&filtered, state.page, page_size).to_vec();
    CatalogPage { items, page: state.page, total_pages: total, matches }
}
