//! Listing results, pagination and facets.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Pagination info for one page of a listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (0-indexed).
    pub page_number: usize,
    /// Items per page.
    pub page_size: usize,
    /// Number of records that matched the filters.
    pub total_elements: usize,
    /// Total number of pages; zero when nothing matched.
    pub total_pages: usize,
}

impl Pagination {
    /// Create pagination info. A page size of zero is treated as one.
    pub fn new(page_number: usize, page_size: usize, total_elements: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_number,
            page_size,
            total_elements,
            total_pages: total_elements.div_ceil(page_size),
        }
    }

    /// Index of the first record on this page.
    pub fn offset(&self) -> usize {
        self.page_number.saturating_mul(self.page_size)
    }

    /// Indices of this page's records, clipped to the result set.
    ///
    /// Empty when the page is past the end.
    pub fn range(&self) -> Range<usize> {
        let start = self.offset().min(self.total_elements);
        let end = self
            .offset()
            .saturating_add(self.page_size)
            .min(self.total_elements);
        start..end
    }

    /// Whether there's a next page.
    pub fn has_next(&self) -> bool {
        self.page_number.saturating_add(1) < self.total_pages
    }

    /// Whether there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.page_number > 0
    }

    /// Get start item number (1-indexed), or 0 for an empty page.
    pub fn start_item(&self) -> usize {
        let range = self.range();
        if range.is_empty() {
            0
        } else {
            range.start + 1
        }
    }

    /// Get end item number (1-indexed), or 0 for an empty page.
    pub fn end_item(&self) -> usize {
        let range = self.range();
        if range.is_empty() {
            0
        } else {
            range.end
        }
    }

    /// Page indices for a pager widget, centred on the current page.
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if self.total_pages <= max_visible {
            return (0..self.total_pages).collect();
        }
        if max_visible == 0 {
            return Vec::new();
        }

        let half = max_visible / 2;
        let last = self.total_pages - 1;
        let start = self.page_number.min(last).saturating_sub(half);
        let end = (start + max_visible - 1).min(last);
        let start = end + 1 - max_visible;

        (start..=end).collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, super::DEFAULT_PAGE_SIZE, 0)
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageResult<T> {
    /// The page's items, in sorted order.
    pub items: Vec<T>,
    /// Pagination info.
    pub pagination: Pagination,
}

impl<T> PageResult<T> {
    /// Create a page result.
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self { items, pagination }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self::new(Vec::new(), Pagination::default())
    }
}

/// A facet for filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Brand").
    pub name: String,
    /// Query-string key this facet filters on.
    pub field: String,
    /// Facet values.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create an empty facet.
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            values: Vec::new(),
        }
    }

    /// Add a value to the facet.
    pub fn add_value(&mut self, value: impl Into<String>, count: usize, selected: bool) {
        self.values.push(FacetValue {
            value: value.into(),
            count,
            selected,
        });
    }

    /// Look up a value's count.
    pub fn count_of(&self, value: &str) -> Option<usize> {
        self.values
            .iter()
            .find(|v| v.value == value)
            .map(|v| v.count)
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// The value.
    pub value: String,
    /// Number of items with this value.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
}

/// Sidebar facets for a product listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchFacets {
    pub brands: Facet,
    pub categories: Facet,
    pub genders: Facet,
}
