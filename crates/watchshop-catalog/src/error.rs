//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while loading or validating catalog data.
///
/// The listing pipeline itself never fails; these surface from catalog
/// validation and from parsing user-supplied query values.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product price below zero.
    #[error("Invalid price for {product_id}: {amount_cents} (must be >= 0)")]
    InvalidPrice {
        product_id: String,
        amount_cents: i64,
    },

    /// Discount outside 0..=100.
    #[error("Invalid discount for {product_id}: {percent}% (must be 0-100)")]
    InvalidDiscount { product_id: String, percent: u8 },

    /// Product references a brand that is not in the catalog.
    #[error("Unknown brand {brand_id} on product {product_id}")]
    UnknownBrand {
        product_id: String,
        brand_id: String,
    },

    /// Product references a category that is not in the catalog.
    #[error("Unknown category {category_id} on product {product_id}")]
    UnknownCategory {
        product_id: String,
        category_id: String,
    },

    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Product priced in a different currency than its catalog.
    #[error("Currency mismatch on {product_id}: expected {expected}, got {got}")]
    CurrencyMismatch {
        product_id: String,
        expected: String,
        got: String,
    },

    /// Unrecognized gender tag.
    #[error("Unknown gender: {0}")]
    UnknownGender(String),

    /// Unrecognized sort key.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
