//! Brand and category reference records.

use crate::ids::{BrandId, CategoryId};
use serde::{Deserialize, Serialize};

/// A watch brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    /// Unique brand identifier.
    pub id: BrandId,
    /// Brand name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
}

impl Brand {
    pub fn new(id: impl Into<BrandId>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// A product category (dress, diver, chronograph, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
}

impl Category {
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
        }
    }
}
