//! Show facet counts for the current filters.

use anyhow::Result;
use watchshop_catalog::catalog::Catalog;
use watchshop_catalog::search::{facets, Facet};

use super::FacetsArgs;
use crate::context::Context;

/// Run the facets command.
pub fn run(args: FacetsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.filter.catalog.as_deref())?;
    let criteria = args.filter.criteria(catalog.currency, &ctx.config)?;

    let facets = facets(&catalog.products, &criteria);

    if ctx.output.is_json() {
        ctx.output.json(&facets);
        return Ok(());
    }

    print_facet(ctx, &catalog, &facets.brands);
    print_facet(ctx, &catalog, &facets.categories);
    print_facet(ctx, &catalog, &facets.genders);

    Ok(())
}

fn print_facet(ctx: &Context, catalog: &Catalog, facet: &Facet) {
    ctx.output.header(&facet.name);
    if facet.values.is_empty() {
        ctx.output.info("(none)");
        return;
    }

    for value in &facet.values {
        let label = match facet.field.as_str() {
            "brand" => catalog.brand_name(&value.value.as_str().into()).to_string(),
            "category" => catalog.category_name(&value.value.as_str().into()).to_string(),
            _ => value.value.clone(),
        };
        let marker = if value.selected { " *" } else { "" };
        ctx.output
            .kv(&format!("{label}{marker}"), &value.count.to_string());
    }
}
