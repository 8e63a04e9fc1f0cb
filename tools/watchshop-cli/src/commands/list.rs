//! List a page of products.

use anyhow::Result;
use watchshop_catalog::search::{list_products, Pagination};

use super::ListArgs;
use crate::context::Context;
use crate::output::{price_label, stock_badge};

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.filter.catalog.as_deref())?;
    let criteria = args.criteria(catalog.currency, &ctx.config)?;
    ctx.output.debug(&format!("query: {}", criteria.to_query_string()));

    let page = list_products(&catalog.products, &criteria);

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    let p = page.pagination;
    if p.total_elements == 0 {
        ctx.output.info("No watches match these filters.");
        return Ok(());
    }

    ctx.output.header(&format!(
        "Watches {}-{} of {} ({})",
        p.start_item(),
        p.end_item(),
        p.total_elements,
        criteria.sort.display_name()
    ));

    if page.is_empty() {
        ctx.output.info(&format!(
            "Page {} is past the end; there are {} page(s).",
            p.page_number + 1,
            p.total_pages
        ));
        return Ok(());
    }

    let widths = [8, 30, 12, 32, 14];
    ctx.output
        .table_row(&["ID", "NAME", "BRAND", "PRICE", "STOCK"], &widths);
    for product in &page.items {
        let price = price_label(product);
        let stock = stock_badge(product);
        ctx.output.table_row(
            &[
                product.id.as_str(),
                product.name.as_str(),
                catalog.brand_name(&product.brand_id),
                price.as_str(),
                stock.as_str(),
            ],
            &widths,
        );
    }

    ctx.output.kv("Page", &pager_line(&p));

    Ok(())
}

/// Pager footer such as `2 of 5  ‹ prev  1 [2] 3 4 5  next ›`. Pages print one-based.
fn pager_line(p: &Pagination) -> String {
    let mut parts = vec![format!("{} of {}", p.page_number + 1, p.total_pages)];
    if p.has_prev() {
        parts.push("‹ prev".to_string());
    }
    let pages: Vec<String> = p
        .page_numbers(7)
        .into_iter()
        .map(|n| {
            if n == p.page_number {
                format!("[{}]", n + 1)
            } else {
                (n + 1).to_string()
            }
        })
        .collect();
    parts.push(pages.join(" "));
    if p.has_next() {
        parts.push("next ›".to_string());
    }
    parts.join("  ")
}
