//! Product catalog module.
//!
//! Contains product records, brands, categories and the demo catalog.

mod brand;
mod catalog;
mod demo;
mod product;

pub use brand::{Brand, Category};
pub use catalog::Catalog;
pub use demo::demo_catalog;
pub use product::{Gender, Product};
