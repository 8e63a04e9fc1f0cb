//! Newtype IDs for type-safe identifiers.
//!
//! Brand and category ids are opaque foreign keys; keeping them as
//! distinct types stops a brand filter from being fed a category id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// An opaque identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(BrandId);
define_id!(CategoryId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_str() {
        let id: BrandId = "rolex".into();
        assert_eq!(id.as_str(), "rolex");
        assert_eq!(id.to_string(), "rolex");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = CategoryId::new("diver");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"diver\"");

        let back: CategoryId = serde_json::from_str("\"diver\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new("w-1"), ProductId::new("w-1"));
        assert_ne!(ProductId::new("w-1"), ProductId::new("w-2"));
    }
}
