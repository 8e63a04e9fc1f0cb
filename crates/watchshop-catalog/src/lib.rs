//! Watch shop catalog types and the product listing pipeline.
//!
//! This crate provides the strongly-typed core behind the storefront's
//! product listing screens:
//!
//! - **Catalog**: Products, brands, categories and a demo catalog
//! - **Search**: Filter criteria, sort keys, facets and the
//!   filter → sort → paginate pipeline
//!
//! # Example
//!
//! ```
//! use watchshop_catalog::prelude::*;
//!
//! let catalog = demo_catalog();
//! let criteria = FilterCriteria::new()
//!     .with_text("daytona")
//!     .with_sort(SortKey::PriceAsc)
//!     .with_pagination(0, 12);
//!
//! let page = list_products(&catalog.products, &criteria);
//! assert!(page.pagination.total_elements >= 1);
//! assert!(page.items.len() <= 12);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{demo_catalog, Brand, Catalog, Category, Gender, Product};

    // Search
    pub use crate::search::{
        facets, list_products, Facet, FacetValue, Filter, FilterCriteria, PageResult, Pagination,
        SearchFacets, SortKey,
    };
}
