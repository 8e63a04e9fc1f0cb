//! Validate a catalog file.

use anyhow::Result;
use serde_json::json;

use super::ValidateArgs;
use crate::context::Context;

/// Run the validate command.
///
/// Loading already validates; a bad catalog surfaces as the command error.
pub fn run(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "valid": true,
            "currency": catalog.currency.code(),
            "brands": catalog.brands.len(),
            "categories": catalog.categories.len(),
            "products": catalog.products.len(),
        }));
        return Ok(());
    }

    ctx.output.success("Catalog is valid");
    ctx.output.kv("Currency", catalog.currency.code());
    ctx.output.kv("Brands", &catalog.brands.len().to_string());
    ctx.output.kv("Categories", &catalog.categories.len().to_string());
    ctx.output.kv("Products", &catalog.products.len().to_string());

    Ok(())
}
