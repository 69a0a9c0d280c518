use crate::LayoutError;
use serde::{Deserialize, Serialize};

/// Row capacities of each page template shape.
///
/// No text is measured; these are empirically fixed per template geometry.
/// The defaults match the bundled templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationPolicy {
    /// Up to this many rows fit on a single page together with header and totals.
    ///
    /// Defaults to `8`.
    pub single_page_max: usize,
    /// Up to this many rows go on a first page followed by a row-less footer page.
    ///
    /// Defaults to `13`.
    pub short_first_page_max: usize,
    /// Rows taken by the first page of a longer document.
    ///
    /// Defaults to `16`.
    pub long_first_page_max: usize,
    /// Rows taken by each middle page, and the most a last page may hold.
    ///
    /// Defaults to `18`.
    pub continuation_page_max: usize,
}

impl PaginationPolicy {
    pub const SINGLE_PAGE_MAX: usize = 8;
    pub const SHORT_FIRST_PAGE_MAX: usize = 13;
    pub const LONG_FIRST_PAGE_MAX: usize = 16;
    pub const CONTINUATION_PAGE_MAX: usize = 18;

    /// Rejects zero capacities and tiers that are out of order.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let capacities = [
            ("single_page_max", self.single_page_max),
            ("short_first_page_max", self.short_first_page_max),
            ("long_first_page_max", self.long_first_page_max),
            ("continuation_page_max", self.continuation_page_max),
        ];
        if let Some((name, _)) = capacities.iter().find(|(_, value)| *value == 0) {
            return Err(LayoutError::InvalidPolicy(format!("{name} must be at least 1")));
        }
        if self.single_page_max > self.short_first_page_max {
            return Err(LayoutError::InvalidPolicy(format!(
                "single_page_max ({}) exceeds short_first_page_max ({})",
                self.single_page_max, self.short_first_page_max
            )));
        }
        if self.short_first_page_max > self.long_first_page_max {
            return Err(LayoutError::InvalidPolicy(format!(
                "short_first_page_max ({}) exceeds long_first_page_max ({})",
                self.short_first_page_max, self.long_first_page_max
            )));
        }
        Ok(())
    }
}

impl Default for PaginationPolicy {
    fn default() -> Self {
        Self {
            single_page_max: Self::SINGLE_PAGE_MAX,
            short_first_page_max: Self::SHORT_FIRST_PAGE_MAX,
            long_first_page_max: Self::LONG_FIRST_PAGE_MAX,
            continuation_page_max: Self::CONTINUATION_PAGE_MAX,
        }
    }
}
