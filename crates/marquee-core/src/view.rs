// File: crates/marquee-core/src/view.rs
// Summary: Owned view state for the catalog filter and the poster carousel.

use std::time::Duration;

use crate::catalog::ALL_PLATFORMS;

/// How long each carousel poster stays up before auto-advancing.
pub const CAROUSEL_INTERVAL: Duration = Duration::from_millis(3500);

/// Filter and pagination selections for the catalog grid.
///
/// The page is one-based and deliberately not reset when the filter
/// narrows; pagination reports a stale page as empty instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub platform: String,
    pub search: String,
    pub page: usize,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Steps back, never below page one.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self { platform: ALL_PLATFORMS.to_string(), search: String::new(), page: 1 }
    }
}

/// Cyclic poster index. The index is always in range while the
/// carousel is non-empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advances to the next poster, wrapping at the end. A no-op when
    /// empty.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Jumps to `index` modulo the poster count.
    pub fn select(&mut self, index: usize) {
        if self.len > 0 {
            self.index = index % self.len;
        }
    }
}
