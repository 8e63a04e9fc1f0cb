//! Facet counts for the listing sidebar.

use std::collections::BTreeMap;

use crate::catalog::Product;
use crate::search::filter::apply_filters;
use crate::search::{Facet, FilterCriteria, SearchFacets};

/// Count brand, category and gender values over the products that match
/// `criteria`. Sort and pagination are ignored.
///
/// Values are ordered by count, highest first, then by value.
pub fn facets(records: &[Product], criteria: &FilterCriteria) -> SearchFacets {
    let matched = apply_filters(records, &criteria.filters());

    let brands = build_facet(
        "Brand",
        "brand",
        matched.iter().map(|p| p.brand_id.as_str()),
        criteria.brand_id.as_ref().map(|id| id.as_str()),
    );
    let categories = build_facet(
        "Category",
        "category",
        matched.iter().map(|p| p.category_id.as_str()),
        criteria.category_id.as_ref().map(|id| id.as_str()),
    );
    let genders = build_facet(
        "Gender",
        "gender",
        matched.iter().map(|p| p.gender.as_str()),
        criteria.gender.map(|g| g.as_str()),
    );

    SearchFacets {
        brands,
        categories,
        genders,
    }
}

fn build_facet<'a>(
    name: &str,
    field: &str,
    values: impl Iterator<Item = &'a str>,
    selected: Option<&str>,
) -> Facet {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut ordered: Vec<(&str, usize)> = counts.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1));

    let mut facet = Facet::new(name, field);
    for (value, count) in ordered {
        facet.add_value(value, count, selected == Some(value));
    }
    facet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{demo_catalog, Gender};

    #[test]
    fn test_facets_over_demo_catalog() {
        let catalog = demo_catalog();
        let facets = facets(&catalog.products, &FilterCriteria::new());

        assert_eq!(facets.brands.count_of("rolex"), Some(3));
        assert_eq!(facets.brands.count_of("tag-heuer"), Some(2));
        assert_eq!(facets.categories.count_of("dress"), Some(5));
        assert_eq!(facets.genders.count_of("MALE"), Some(6));

        let total: usize = facets.brands.values.iter().map(|v| v.count).sum();
        assert_eq!(total, catalog.products.len());
    }

    #[test]
    fn test_facet_ordering() {
        let catalog = demo_catalog();
        let facets = facets(&catalog.products, &FilterCriteria::new());

        let values: Vec<&str> = facets.categories.values.iter().map(|v| v.value.as_str()).collect();
        // dress 5, chronograph 4, diver 4 (ties by value)
        assert_eq!(values, vec!["dress", "chronograph", "diver"]);
    }

    #[test]
    fn test_facets_respect_filters_and_selection() {
        let catalog = demo_catalog();
        let criteria = FilterCriteria::new()
            .with_brand("omega")
            .with_gender(Gender::Female);
        let facets = facets(&catalog.products, &criteria);

        assert_eq!(facets.brands.values.len(), 1);
        assert!(facets.brands.values[0].selected);
        assert_eq!(facets.categories.count_of("dress"), Some(1));
        assert_eq!(facets.genders.count_of("FEMALE"), Some(1));
        assert!(facets.genders.values[0].selected);
    }

    #[test]
    fn test_facets_empty() {
        let facets = facets(&[], &FilterCriteria::new());
        assert!(facets.brands.values.is_empty());
        assert!(facets.genders.values.is_empty());
    }
}
