//! The product listing pipeline: filter, sort, paginate.

use std::cmp::Reverse;

use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::catalog::Product;
use crate::search::filter::apply_filters;
use crate::search::{FilterCriteria, PageResult, Pagination, SortKey};

/// List one page of products matching `criteria`.
///
/// Stages run in a fixed order: text filter, exact filters, price range,
/// stable sort, then pagination. `records` is never mutated; the returned
/// items are clones. A page past the end yields no items but keeps the
/// totals.
#[tracing::instrument(
    name = "catalog.list_products",
    level = "debug",
    skip_all,
    fields(records = records.len(), sort = %criteria.sort, page = criteria.page)
)]
pub fn list_products(records: &[Product], criteria: &FilterCriteria) -> PageResult<Product> {
    let mut matched = apply_filters(records, &criteria.filters());
    sort_products(&mut matched, criteria.sort);

    let pagination = Pagination::new(
        criteria.page,
        criteria.effective_page_size(),
        matched.len(),
    );
    let items: Vec<Product> = matched[pagination.range()]
        .iter()
        .map(|p| (*p).clone())
        .collect();

    debug!(
        total_elements = pagination.total_elements,
        total_pages = pagination.total_pages,
        returned = items.len(),
        "listed products"
    );

    PageResult::new(items, pagination)
}

/// Stable sort by `key`. Equal keys keep their input order in both directions.
pub(crate) fn sort_products(products: &mut [&Product], key: SortKey) {
    match key {
        SortKey::PriceAsc => products.sort_by_key(|p| p.price.amount_cents),
        SortKey::PriceDesc => products.sort_by_key(|p| Reverse(p.price.amount_cents)),
        SortKey::NameAsc => products.sort_by_cached_key(|p| name_key(&p.name)),
        SortKey::NameDesc => products.sort_by_cached_key(|p| Reverse(name_key(&p.name))),
    }
}

/// Collation key: accents and case folded at the primary level, then
/// case-insensitive with accents, then the exact text.
fn name_key(name: &str) -> (String, String, String) {
    let base: String = name
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    (base, name.to_lowercase(), name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Gender;
    use crate::money::{Currency, Money};

    fn watch(id: &str, name: &str, dollars: i64) -> Product {
        Product::new(
            id,
            name,
            "brand",
            "category",
            Gender::Unisex,
            Money::new(dollars * 100, Currency::USD),
        )
    }

    fn ids(page: &PageResult<Product>) -> Vec<&str> {
        page.items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let page = list_products(&[], &FilterCriteria::new().with_text("rolex"));
        assert!(page.is_empty());
        assert_eq!(page.pagination.total_elements, 0);
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[test]
    fn test_price_asc() {
        let records = vec![
            watch("a", "A", 100),
            watch("b", "B", 50),
            watch("c", "C", 75),
        ];
        let criteria = FilterCriteria::new()
            .with_sort(SortKey::PriceAsc)
            .with_pagination(0, 10);

        let page = list_products(&records, &criteria);
        assert_eq!(ids(&page), vec!["b", "c", "a"]);
        assert_eq!(page.pagination.total_elements, 3);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_price_sort_uses_list_price() {
        // "a" is cheaper after discount but dearer by list price.
        let records = vec![watch("a", "A", 100).with_discount(60), watch("b", "B", 50)];
        let page = list_products(&records, &FilterCriteria::new().with_sort(SortKey::PriceAsc));
        assert_eq!(ids(&page), vec!["b", "a"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let records = vec![
            watch("1", "omega", 1),
            watch("2", "Cartier", 1),
            watch("3", "TAG Heuer", 1),
            watch("4", "breitling", 1),
        ];
        let page = list_products(&records, &FilterCriteria::new().with_sort(SortKey::NameAsc));
        assert_eq!(ids(&page), vec!["4", "2", "1", "3"]);

        let page = list_products(&records, &FilterCriteria::new().with_sort(SortKey::NameDesc));
        assert_eq!(ids(&page), vec!["3", "1", "2", "4"]);
    }

    #[test]
    fn test_name_sort_folds_accents() {
        let records = vec![
            watch("z", "Zenith Defy", 1),
            watch("e1", "\u{c9}dox Delfin", 1),
            watch("e2", "Eterna Kontiki", 1),
        ];
        let page = list_products(&records, &FilterCriteria::new().with_sort(SortKey::NameAsc));
        assert_eq!(ids(&page), vec!["e1", "e2", "z"]);

        let page = list_products(&records, &FilterCriteria::new().with_sort(SortKey::NameDesc));
        assert_eq!(ids(&page), vec!["z", "e2", "e1"]);
    }

    #[test]
    fn test_accent_only_difference_sorts_after_plain() {
        let records = vec![watch("acc", "R\u{e9}gate", 1), watch("plain", "Regate", 1)];
        let page = list_products(&records, &FilterCriteria::new().with_sort(SortKey::NameAsc));
        assert_eq!(ids(&page), vec!["plain", "acc"]);
    }

    #[test]
    fn test_descending_sort_is_stable() {
        let records = vec![
            watch("first", "Same", 10),
            watch("cheap", "Cheap", 5),
            watch("second", "Same", 10),
        ];
        let page = list_products(&records, &FilterCriteria::new().with_sort(SortKey::PriceDesc));
        assert_eq!(ids(&page), vec!["first", "second", "cheap"]);

        let page = list_products(&records, &FilterCriteria::new().with_sort(SortKey::NameDesc));
        assert_eq!(ids(&page), vec!["first", "second", "cheap"]);
    }

    #[test]
    fn test_last_partial_page() {
        let records: Vec<Product> = (0..5)
            .map(|i| watch(&format!("w{i}"), "Same", 10))
            .collect();
        let criteria = FilterCriteria::new().with_pagination(2, 2);

        let page = list_products(&records, &criteria);
        assert_eq!(ids(&page), vec!["w4"]);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn test_page_out_of_range() {
        let records: Vec<Product> = (0..5).map(|i| watch(&format!("w{i}"), "W", 10)).collect();
        let criteria = FilterCriteria::new().with_pagination(99, 2);

        let page = list_products(&records, &criteria);
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total_elements, 5);
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pagination.page_number, 99);
    }

    #[test]
    fn test_zero_page_size_from_deserialized_criteria() {
        let records = vec![watch("a", "A", 1), watch("b", "B", 2)];
        let criteria: FilterCriteria = serde_json::from_str(r#"{"page_size": 0}"#).unwrap();

        let page = list_products(&records, &criteria);
        assert_eq!(page.len(), 1);
        assert_eq!(page.pagination.page_size, 1);
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let records = vec![watch("b", "B", 2), watch("a", "A", 1)];
        let before = records.clone();
        let _ = list_products(&records, &FilterCriteria::new().with_sort(SortKey::NameAsc));
        assert_eq!(records, before);
    }
}
