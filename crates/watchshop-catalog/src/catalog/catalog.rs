//! A loaded catalog: reference data plus product records.

use std::collections::HashSet;

use crate::catalog::{Brand, Category, Product};
use crate::error::CatalogError;
use crate::ids::{BrandId, CategoryId};
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// A self-contained catalog as served by the storefront's data source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Catalog {
    /// Base currency every product is priced in.
    #[serde(default)]
    pub currency: Currency,
    /// Known brands.
    #[serde(default)]
    pub brands: Vec<Brand>,
    /// Known categories.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Product records, in catalog order.
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// Parse a catalog from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check every product's invariants and references.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let brands: HashSet<&BrandId> = self.brands.iter().map(|b| &b.id).collect();
        let categories: HashSet<&CategoryId> = self.categories.iter().map(|c| &c.id).collect();
        let mut seen = HashSet::with_capacity(self.products.len());

        for product in &self.products {
            product.validate()?;

            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateProduct(product.id.to_string()));
            }
            if product.price.currency != self.currency {
                return Err(CatalogError::CurrencyMismatch {
                    product_id: product.id.to_string(),
                    expected: self.currency.to_string(),
                    got: product.price.currency.to_string(),
                });
            }
            if !brands.contains(&product.brand_id) {
                return Err(CatalogError::UnknownBrand {
                    product_id: product.id.to_string(),
                    brand_id: product.brand_id.to_string(),
                });
            }
            if !categories.contains(&product.category_id) {
                return Err(CatalogError::UnknownCategory {
                    product_id: product.id.to_string(),
                    category_id: product.category_id.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Look up a brand by id.
    pub fn brand(&self, id: &BrandId) -> Option<&Brand> {
        self.brands.iter().find(|b| &b.id == id)
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Brand display name, falling back to the raw id.
    pub fn brand_name<'a>(&'a self, id: &'a BrandId) -> &'a str {
        self.brand(id).map_or(id.as_str(), |b| b.name.as_str())
    }

    /// Category display name, falling back to the raw id.
    pub fn category_name<'a>(&'a self, id: &'a CategoryId) -> &'a str {
        self.category(id).map_or(id.as_str(), |c| c.name.as_str())
    }
}
