//! Built-in demo catalog.
//!
//! Stands in for the storefront's mock product service: a fixed set of
//! watches in a deterministic order.

use crate::catalog::{Brand, Catalog, Category, Gender, Product};
use crate::money::{Currency, Money};

fn usd(dollars: i64) -> Money {
    Money::new(dollars * 100, Currency::USD)
}

/// Build the demo catalog.
pub fn demo_catalog() -> Catalog {
    let brands = vec![
        Brand::new("rolex", "Rolex", "rolex"),
        Brand::new("omega", "Omega", "omega"),
        Brand::new("seiko", "Seiko", "seiko"),
        Brand::new("cartier", "Cartier", "cartier"),
        Brand::new("tag-heuer", "TAG Heuer", "tag-heuer"),
    ];

    let categories = vec![
        Category::new("diver", "Diver", "diver"),
        Category::new("chronograph", "Chronograph", "chronograph"),
        Category::new("dress", "Dress", "dress"),
    ];

    let products = vec![
        Product::new("w-001", "Rolex Daytona", "rolex", "chronograph", Gender::Male, usd(14_800))
            .with_quantity(2),
        Product::new("w-002", "Rolex Submariner Date", "rolex", "diver", Gender::Male, usd(10_250))
            .with_quantity(4),
        Product::new("w-003", "Rolex Lady-Datejust", "rolex", "dress", Gender::Female, usd(8_900))
            .with_discount(5)
            .with_quantity(1),
        Product::new("w-004", "Omega Speedmaster Moonwatch", "omega", "chronograph", Gender::Unisex, usd(6_600))
            .with_quantity(6),
        Product::new("w-005", "Omega Seamaster Diver 300M", "omega", "diver", Gender::Male, usd(5_600))
            .with_discount(10)
            .with_quantity(3),
        Product::new("w-006", "Omega Constellation", "omega", "dress", Gender::Female, usd(4_750))
            .with_discount(15),
        Product::new("w-007", "Seiko Prospex Turtle", "seiko", "diver", Gender::Male, usd(495))
            .with_discount(20)
            .with_quantity(12),
        Product::new("w-008", "Seiko Presage Cocktail Time", "seiko", "dress", Gender::Unisex, usd(425))
            .with_quantity(8),
        Product::new("w-009", "Seiko Speedtimer", "seiko", "chronograph", Gender::Male, usd(695))
            .with_discount(10)
            .with_quantity(5),
        Product::new("w-010", "Cartier Tank Must", "cartier", "dress", Gender::Female, usd(3_150))
            .with_quantity(2),
        Product::new("w-011", "Cartier Santos de Cartier", "cartier", "dress", Gender::Unisex, usd(7_750)),
        Product::new("w-012", "TAG Heuer Carrera", "tag-heuer", "chronograph", Gender::Male, usd(6_350))
            .with_discount(25)
            .with_quantity(3),
        Product::new("w-013", "TAG Heuer Aquaracer", "tag-heuer", "diver", Gender::Female, usd(3_200))
            .with_quantity(7),
    ];

    Catalog {
        currency: Currency::USD,
        brands,
        categories,
        products,
    }
}
