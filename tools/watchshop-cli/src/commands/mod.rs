//! CLI command implementations.

pub mod facets;
pub mod list;
pub mod validate;

use anyhow::{anyhow, Result};
use clap::Args;
use watchshop_catalog::catalog::Gender;
use watchshop_catalog::money::{Currency, Money};
use watchshop_catalog::search::{FilterCriteria, SortKey};

use crate::config::CliConfig;

/// Filter flags shared by `list` and `facets`.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Catalog JSON file (default: config, then the demo catalog).
    #[arg(long)]
    pub catalog: Option<String>,

    /// Start from a storefront query string, e.g. "q=rolex&sort=price-asc".
    #[arg(long)]
    pub url: Option<String>,

    /// Case-insensitive text matched against product names.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Brand id.
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Category id.
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// MALE, FEMALE or UNISEX.
    #[arg(short, long)]
    pub gender: Option<Gender>,

    /// Minimum effective price, e.g. 250 or 99.95.
    #[arg(long)]
    pub min_price: Option<String>,

    /// Maximum effective price.
    #[arg(long)]
    pub max_price: Option<String>,

    /// Only in-stock products.
    #[arg(long)]
    pub in_stock: bool,
}

impl FilterArgs {
    /// Build criteria: the `--url` query string (or config defaults) first,
    /// then explicit flags on top.
    pub fn criteria(&self, currency: Currency, config: &CliConfig) -> Result<FilterCriteria> {
        let mut criteria = match &self.url {
            Some(qs) => FilterCriteria::from_query_string(qs, currency),
            None => FilterCriteria::new()
                .with_sort(config.default_sort)
                .with_pagination(0, config.default_page_size),
        };

        if let Some(q) = &self.query {
            criteria = criteria.with_text(q.as_str());
        }
        if let Some(brand) = &self.brand {
            criteria = criteria.with_brand(brand.as_str());
        }
        if let Some(category) = &self.category {
            criteria = criteria.with_category(category.as_str());
        }
        if let Some(gender) = self.gender {
            criteria = criteria.with_gender(gender);
        }
        if let Some(min) = &self.min_price {
            criteria.min_price = Some(parse_price("--min-price", min, currency)?);
        }
        if let Some(max) = &self.max_price {
            criteria.max_price = Some(parse_price("--max-price", max, currency)?);
        }
        if self.in_stock {
            criteria = criteria.in_stock_only();
        }

        Ok(criteria)
    }
}

fn parse_price(flag: &str, value: &str, currency: Currency) -> Result<Money> {
    Money::parse_decimal(value, currency)
        .ok_or_else(|| anyhow!("{flag} must be a non-negative amount, got '{value}'"))
}

/// Arguments for the list command.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// price-asc, price-desc, name-asc or name-desc.
    #[arg(short, long)]
    pub sort: Option<SortKey>,

    /// Zero-based page index.
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Items per page.
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl ListArgs {
    /// Criteria including sort and pagination overrides.
    pub fn criteria(&self, currency: Currency, config: &CliConfig) -> Result<FilterCriteria> {
        let mut criteria = self.filter.criteria(currency, config)?;

        if let Some(sort) = self.sort {
            criteria = criteria.with_sort(sort);
        }
        let page = self.page.unwrap_or(criteria.page);
        let page_size = self.page_size.unwrap_or(criteria.page_size);

        Ok(criteria.with_pagination(page, page_size))
    }
}

/// Arguments for the facets command.
#[derive(Args, Debug, Default)]
pub struct FacetsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the validate command.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Catalog JSON file (default: config, then the demo catalog).
    pub catalog: Option<String>,
}
