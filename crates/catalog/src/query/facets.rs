//! Per-category facet counts.

use std::collections::BTreeMap;

use crate::types::{ALL_CATEGORY, Product};

use super::pipeline::{filter_by_price_range, filter_by_search};
use super::{QueryError, QuerySpec};

/// Count matching products per category under the current search and price
/// filters, *ignoring* the category filter itself.
///
/// This lets a user see how many results each other category would yield
/// under the active constraints. Every category present in the full
/// collection appears in the map, zero counts included; the [`ALL_CATEGORY`]
/// entry holds the total after search+price filtering.
///
/// # Errors
///
/// Returns a [`QueryError`] when the spec is malformed, exactly as
/// [`super::run_query`] would.
pub fn compute_category_facets(
    products: &[Product],
    spec: &QuerySpec,
) -> Result<BTreeMap<String, usize>, QueryError> {
    spec.validate()?;

    let narrowed = filter_by_price_range(
        &filter_by_search(products, &spec.search_term),
        spec.price_range,
    );

    let mut facets: BTreeMap<String, usize> =
        products.iter().map(|p| (p.category.clone(), 0)).collect();
    for product in &narrowed {
        if let Some(count) = facets.get_mut(&product.category) {
            *count += 1;
        }
    }
    facets.insert(ALL_CATEGORY.to_string(), narrowed.len());

    Ok(facets)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;

    use super::super::{PriceRange, SortKey};
    use super::*;

    fn product(id: &str, category: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            title: format!("{id} title"),
            description: String::new(),
            category: category.to_string(),
            price: Decimal::from(price),
            original_price: None,
            discount: None,
            rating: 0.0,
            review_count: 0,
            images: Vec::new(),
            in_stock: true,
            featured: false,
            trending: false,
            features: Vec::new(),
            sizes: Vec::new(),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("p1", "coffee", 10),
            product("p2", "tea", 20),
            product("p3", "coffee", 30),
            product("p4", "tea", 40),
            product("p5", "syrups", 50),
        ]
    }

    #[test]
    fn counts_sum_to_the_all_facet() {
        let facets = compute_category_facets(&fixture(), &QuerySpec::default()).unwrap();
        let all = facets[ALL_CATEGORY];
        let sum: usize = facets
            .iter()
            .filter(|(slug, _)| slug.as_str() != ALL_CATEGORY)
            .map(|(_, count)| count)
            .sum();
        assert_eq!(sum, all);
        assert_eq!(all, 5);
    }

    #[test]
    fn category_filter_is_ignored() {
        let spec = QuerySpec {
            category: "coffee".to_string(),
            ..QuerySpec::default()
        };
        let facets = compute_category_facets(&fixture(), &spec).unwrap();
        // Other categories keep their counts so the sidebar can show them.
        assert_eq!(facets["tea"], 2);
        assert_eq!(facets["coffee"], 2);
        assert_eq!(facets[ALL_CATEGORY], 5);
    }

    #[test]
    fn price_filter_narrows_counts_and_keeps_zero_entries() {
        let spec = QuerySpec {
            price_range: PriceRange::new(Decimal::ZERO, Decimal::from(25)),
            ..QuerySpec::default()
        };
        let facets = compute_category_facets(&fixture(), &spec).unwrap();
        assert_eq!(facets["coffee"], 1);
        assert_eq!(facets["tea"], 1);
        // syrups has no products under 25, but still appears.
        assert_eq!(facets["syrups"], 0);
        assert_eq!(facets[ALL_CATEGORY], 2);
    }

    #[test]
    fn search_filter_applies() {
        let spec = QuerySpec {
            search_term: "tea".to_string(),
            sort_key: SortKey::Rating,
            ..QuerySpec::default()
        };
        let facets = compute_category_facets(&fixture(), &spec).unwrap();
        assert_eq!(facets["tea"], 2);
        assert_eq!(facets["coffee"], 0);
        assert_eq!(facets[ALL_CATEGORY], 2);
    }

    #[test]
    fn malformed_spec_is_rejected() {
        let spec = QuerySpec {
            page_size: 0,
            ..QuerySpec::default()
        };
        assert_eq!(
            compute_category_facets(&fixture(), &spec).unwrap_err(),
            QueryError::InvalidPageSize
        );
    }
}
