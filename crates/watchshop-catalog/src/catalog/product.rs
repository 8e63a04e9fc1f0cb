//! Product records.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::ids::{BrandId, CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Who a watch is marketed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Unisex => "UNISEX",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            "UNISEX" => Ok(Gender::Unisex),
            _ => Err(CatalogError::UnknownGender(s.to_string())),
        }
    }
}

/// A product in the catalog.
///
/// Records are treated as immutable by the listing pipeline; it only
/// ever borrows them and clones the ones it returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name, used for free-text matching.
    pub name: String,
    /// Brand this watch belongs to.
    pub brand_id: BrandId,
    /// Category this watch belongs to.
    pub category_id: CategoryId,
    /// Target gender.
    pub gender: Gender,
    /// List price in the catalog's base currency.
    pub price: Money,
    /// Discount percentage, 0-100.
    #[serde(default)]
    pub discount_percent: u8,
    /// Units in stock; zero means out of stock.
    #[serde(default)]
    pub quantity: u32,
}

impl Product {
    /// Create a new product with no discount and no stock.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        brand_id: impl Into<BrandId>,
        category_id: impl Into<CategoryId>,
        gender: Gender,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand_id: brand_id.into(),
            category_id: category_id.into(),
            gender,
            price,
            discount_percent: 0,
            quantity: 0,
        }
    }

    /// Set the discount percentage.
    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount_percent = percent;
        self
    }

    /// Set the stock count.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Price after applying the discount.
    pub fn effective_price(&self) -> Money {
        self.price.apply_discount(self.discount_percent)
    }

    /// Compare the exact (unrounded) effective price against `bound`.
    pub fn cmp_effective_price(&self, bound: &Money) -> Ordering {
        self.price.cmp_discounted(self.discount_percent, bound)
    }

    /// Check if the product is on sale.
    pub fn is_on_sale(&self) -> bool {
        self.discount_percent > 0
    }

    /// Check if the product is in stock.
    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Check the record invariants: non-negative price, discount within 0-100.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.price.is_negative() {
            return Err(CatalogError::InvalidPrice {
                product_id: self.id.to_string(),
                amount_cents: self.price.amount_cents,
            });
        }
        if self.discount_percent > 100 {
            return Err(CatalogError::InvalidDiscount {
                product_id: self.id.to_string(),
                percent: self.discount_percent,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn daytona() -> Product {
        Product::new(
            "w-1",
            "Rolex Daytona",
            "rolex",
            "chronograph",
            Gender::Male,
            Money::new(100_000, Currency::USD),
        )
    }

    #[test]
    fn test_effective_price() {
        let product = daytona().with_discount(20);
        assert_eq!(product.effective_price().amount_cents, 80_000);
        assert!(product.is_on_sale());
    }

    #[test]
    fn test_stock() {
        assert!(!daytona().is_in_stock());
        assert!(daytona().with_quantity(3).is_in_stock());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut product = daytona();
        product.price = Money::new(-1, Currency::USD);
        assert!(matches!(
            product.validate(),
            Err(CatalogError::InvalidPrice { amount_cents: -1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_discount_over_100() {
        let product = daytona().with_discount(101);
        assert!(matches!(
            product.validate(),
            Err(CatalogError::InvalidDiscount { percent: 101, .. })
        ));
        assert!(daytona().with_discount(100).validate().is_ok());
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" UNISEX ".parse::<Gender>().unwrap(), Gender::Unisex);
        assert!("kids".parse::<Gender>().is_err());
    }

    #[test]
    fn test_product_json_shape() {
        let json = r#"{
            "id": "w-9",
            "name": "Omega Speedmaster",
            "brand_id": "omega",
            "category_id": "chronograph",
            "gender": "UNISEX",
            "price": { "amount_cents": 650000 }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.gender, Gender::Unisex);
        assert_eq!(product.discount_percent, 0);
        assert_eq!(product.quantity, 0);
    }
}
