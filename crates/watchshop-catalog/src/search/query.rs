//! Listing query: sort keys and filter criteria.

use std::fmt;
use std::str::FromStr;

use crate::catalog::Gender;
use crate::error::CatalogError;
use crate::ids::{BrandId, CategoryId};
use crate::money::{Currency, Money};
use crate::search::Filter;
use serde::{Deserialize, Serialize};

/// Items per page when the caller does not say.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Sort by list price, low to high.
    PriceAsc,
    /// Sort by list price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    #[default]
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
}

impl SortKey {
    /// All sort keys in menu order.
    pub const ALL: [SortKey; 4] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::NameAsc => "Name: A-Z",
            SortKey::NameDesc => "Name: Z-A",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    /// Accepts `price-asc` as well as `price_asc`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "name-asc" => Ok(SortKey::NameAsc),
            "name-desc" => Ok(SortKey::NameDesc),
            _ => Err(CatalogError::UnknownSortKey(s.to_string())),
        }
    }
}

/// What to list: filters, ordering and the page to return.
///
/// Every filter is optional; `None` means "not filtered on", which is
/// distinct from a filter that matches nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against product names.
    pub text_query: Option<String>,
    /// Exact brand match.
    pub brand_id: Option<BrandId>,
    /// Exact category match.
    pub category_id: Option<CategoryId>,
    /// Exact gender match.
    pub gender: Option<Gender>,
    /// Inclusive lower bound on the effective price.
    pub min_price: Option<Money>,
    /// Inclusive upper bound on the effective price.
    pub max_price: Option<Money>,
    /// Only keep products with stock.
    pub in_stock_only: bool,
    /// Sort order.
    pub sort: SortKey,
    /// Zero-based page index.
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            text_query: None,
            brand_id: None,
            category_id: None,
            gender: None,
            min_price: None,
            max_price: None,
            in_stock_only: false,
            sort: SortKey::default(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterCriteria {
    /// Create criteria that match everything, first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query. Blank input clears it.
    pub fn with_text(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        self.text_query = if q.trim().is_empty() { None } else { Some(q) };
        self
    }

    /// Filter by brand.
    pub fn with_brand(mut self, id: impl Into<BrandId>) -> Self {
        self.brand_id = Some(id.into());
        self
    }

    /// Filter by category.
    pub fn with_category(mut self, id: impl Into<CategoryId>) -> Self {
        self.category_id = Some(id.into());
        self
    }

    /// Filter by gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Bound the effective price on either side.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Only keep in-stock products.
    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// Set sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination. A page size of zero is raised to one.
    pub fn with_pagination(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size.max(1);
        self
    }

    /// Page size with the lower bound of one applied.
    ///
    /// Deserialized criteria can still carry a zero.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Trimmed text query, or `None` if absent or blank.
    pub fn text(&self) -> Option<&str> {
        self.text_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    /// Lower the criteria into predicates, in pipeline order.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();

        if let Some(text) = self.text().and_then(Filter::text) {
            filters.push(text);
        }
        if let Some(brand) = &self.brand_id {
            filters.push(Filter::Brand(brand.clone()));
        }
        if let Some(category) = &self.category_id {
            filters.push(Filter::Category(category.clone()));
        }
        if let Some(gender) = self.gender {
            filters.push(Filter::Gender(gender));
        }
        if self.in_stock_only {
            filters.push(Filter::InStock);
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            filters.push(Filter::price_range(self.min_price, self.max_price));
        }

        filters
    }

    /// Parse criteria from a URL query string.
    ///
    /// Recognized keys: `q`, `brand`, `category`, `gender`, `min_price`,
    /// `max_price`, `in_stock`, `sort`, `page`, `size` (or `per_page`).
    /// Prices are decimal amounts in `currency`. Unknown keys are ignored
    /// and unparsable values fall back to their defaults.
    pub fn from_query_string(qs: &str, currency: Currency) -> Self {
        let mut criteria = FilterCriteria::new();

        for pair in qs.trim_start_matches('?').split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = urlencoding_decode(parts.next().unwrap_or(""));
            if value.trim().is_empty() {
                continue;
            }

            match key {
                "q" => criteria = criteria.with_text(value),
                "brand" => criteria.brand_id = Some(value.into()),
                "category" => criteria.category_id = Some(value.into()),
                "gender" => criteria.gender = value.parse().ok(),
                "min_price" => criteria.min_price = Money::parse_decimal(&value, currency),
                "max_price" => criteria.max_price = Money::parse_decimal(&value, currency),
                "in_stock" => criteria.in_stock_only = matches!(value.as_str(), "1" | "true"),
                "sort" => criteria.sort = value.parse().unwrap_or_default(),
                "page" => criteria.page = value.parse().unwrap_or(0),
                "size" | "per_page" => {
                    criteria.page_size = value.parse().unwrap_or(DEFAULT_PAGE_SIZE).max(1)
                }
                _ => {}
            }
        }

        criteria
    }

    /// Render the set fields back into a query string.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if let Some(q) = self.text() {
            pairs.push(("q", q.to_string()));
        }
        if let Some(brand) = &self.brand_id {
            pairs.push(("brand", brand.to_string()));
        }
        if let Some(category) = &self.category_id {
            pairs.push(("category", category.to_string()));
        }
        if let Some(gender) = self.gender {
            pairs.push(("gender", gender.to_string()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("min_price", min.display_amount()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("max_price", max.display_amount()));
        }
        if self.in_stock_only {
            pairs.push(("in_stock", "true".to_string()));
        }
        pairs.push(("sort", self.sort.to_string()));
        pairs.push(("page", self.page.to_string()));
        pairs.push(("size", self.effective_page_size().to_string()));

        pairs
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding_encode(&v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Percent/plus decoding. Invalid escapes are dropped.
fn urlencoding_decode(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut chars = s.bytes();

    while let Some(b) = chars.next() {
        match b {
            b'%' => {
                let hex: Vec<u8> = chars.by_ref().take(2).collect();
                if let Some(byte) = std::str::from_utf8(&hex)
                    .ok()
                    .and_then(|h| u8::from_str_radix(h, 16).ok())
                {
                    bytes.push(byte);
                }
            }
            b'+' => bytes.push(b' '),
            _ => bytes.push(b),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

fn urlencoding_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}
