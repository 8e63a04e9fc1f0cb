//! Listing filter predicates.

use std::cmp::Ordering;

use crate::catalog::{Gender, Product};
use crate::ids::{BrandId, CategoryId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A single predicate over product records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Lower-cased, trimmed substring of the product name.
    Text(String),
    /// Filter by brand.
    Brand(BrandId),
    /// Filter by category.
    Category(CategoryId),
    /// Filter by gender.
    Gender(Gender),
    /// Only show in-stock items.
    InStock,
    /// Inclusive bounds on the effective (discounted) price.
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
}

impl Filter {
    /// Create a text filter. Blank queries produce no filter.
    pub fn text(query: &str) -> Option<Self> {
        let query = query.trim();
        if query.is_empty() {
            None
        } else {
            Some(Filter::Text(query.to_lowercase()))
        }
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(needle) => product.name.to_lowercase().contains(needle.as_str()),
            Filter::Brand(id) => &product.brand_id == id,
            Filter::Category(id) => &product.category_id == id,
            Filter::Gender(gender) => product.gender == *gender,
            Filter::InStock => product.is_in_stock(),
            Filter::PriceRange { min, max } => {
                min.map_or(true, |m| product.cmp_effective_price(&m) != Ordering::Less)
                    && max.map_or(true, |m| product.cmp_effective_price(&m) != Ordering::Greater)
            }
        }
    }
}

/// Keep the records that pass every filter, preserving input order.
pub fn apply_filters<'a>(records: &'a [Product], filters: &[Filter]) -> Vec<&'a Product> {
    records
        .iter()
        .filter(|product| filters.iter().all(|f| f.matches(product)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn watch(name: &str) -> Product {
        Product::new("w-1", name, "rolex", "chronograph", Gender::Male, usd(100_000))
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let product = watch("Rolex Daytona");
        assert!(Filter::text("daytona").unwrap().matches(&product));
        assert!(Filter::text("  DAYTONA ").unwrap().matches(&product));
        assert!(!Filter::text("omega").unwrap().matches(&product));
        assert!(Filter::text(" \n ").is_none());
    }

    #[test]
    fn test_exact_filters() {
        let product = watch("Rolex Daytona");
        assert!(Filter::Brand("rolex".into()).matches(&product));
        assert!(!Filter::Brand("omega".into()).matches(&product));
        assert!(Filter::Category("chronograph".into()).matches(&product));
        assert!(!Filter::Gender(Gender::Female).matches(&product));
    }

    #[test]
    fn test_in_stock() {
        assert!(!Filter::InStock.matches(&watch("a")));
        assert!(Filter::InStock.matches(&watch("a").with_quantity(1)));
    }

    #[test]
    fn test_price_range_uses_effective_price() {
        // 1000.00 at 20% off = 800.00
        let product = watch("Rolex Daytona").with_discount(20);

        assert!(Filter::price_range(Some(usd(70_000)), Some(usd(90_000))).matches(&product));
        assert!(!Filter::price_range(Some(usd(90_000)), None).matches(&product));
        assert!(Filter::price_range(Some(usd(80_000)), Some(usd(80_000))).matches(&product));
        assert!(Filter::price_range(None, None).matches(&product));
    }

    #[test]
    fn test_price_range_compares_unrounded_price() {
        // 9.99 at 15% off = 8.4915, which rounds to 8.49 for display.
        let product = Product::new("w-2", "Seiko 5", "seiko", "dress", Gender::Male, usd(999))
            .with_discount(15);
        assert_eq!(product.effective_price().amount_cents, 849);
        assert!(!Filter::price_range(None, Some(usd(849))).matches(&product));
        assert!(Filter::price_range(None, Some(usd(850))).matches(&product));

        // 0.05 at 50% off = 0.025, which rounds up to 0.03.
        let product = Product::new("w-3", "Strap", "seiko", "dress", Gender::Male, usd(5))
            .with_discount(50);
        assert_eq!(product.effective_price().amount_cents, 3);
        assert!(!Filter::price_range(Some(usd(3)), None).matches(&product));
        assert!(Filter::price_range(Some(usd(2)), None).matches(&product));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let product = watch("Rolex Daytona");
        assert!(!Filter::price_range(Some(usd(200_000)), Some(usd(50_000))).matches(&product));
    }

    #[test]
    fn test_apply_filters_preserves_order() {
        let records = vec![
            watch("Rolex Daytona"),
            watch("Omega Speedmaster"),
            watch("Rolex Explorer"),
        ];
        let kept = apply_filters(&records, &[Filter::text("rolex").unwrap()]);
        let names: Vec<&str> = kept.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Rolex Daytona", "Rolex Explorer"]);
    }
}
