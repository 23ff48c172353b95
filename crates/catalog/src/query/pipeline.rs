//! Filter, sort, and paginate operations.
//!
//! All operations are conjunctive (AND) filters, so composition order does
//! not affect final membership; [`run_query`] fixes the order
//! category → search → price so facet counting can reuse the intermediate
//! stages. Sorting is stable throughout: products that tie on the active
//! sort key keep their relative input order.

use crate::types::{ALL_CATEGORY, Product};

use super::{PriceRange, QueryError, QuerySpec, ResultPage, SortKey};

/// Retain products in the given category.
///
/// [`ALL_CATEGORY`] is a no-op; an empty result is a valid result.
#[must_use]
pub fn filter_by_category(products: &[Product], category: &str) -> Vec<Product> {
    if category == ALL_CATEGORY {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect()
}

/// Retain products matching a free-text term.
///
/// Case-insensitive substring match, OR across title, description, and
/// category. A blank term (after trimming) is a no-op.
#[must_use]
pub fn filter_by_search(products: &[Product], term: &str) -> Vec<Product> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&term)
                || p.description.to_lowercase().contains(&term)
                || p.category.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Retain products whose effective price falls within the inclusive range.
#[must_use]
pub fn filter_by_price_range(products: &[Product], range: PriceRange) -> Vec<Product> {
    products
        .iter()
        .filter(|p| range.contains(p.effective_price()))
        .cloned()
        .collect()
}

/// Order products by the given sort key.
///
/// Every arm uses a stable sort, so ties keep their input order. The
/// featured/trending arms deliberately avoid any randomized tie-break;
/// randomized presentation belongs in [`crate::shuffle::seeded_shuffle`],
/// applied before sorting.
#[must_use]
pub fn sort_products(mut products: Vec<Product>, sort_key: SortKey) -> Vec<Product> {
    match sort_key {
        SortKey::PriceLow => products.sort_by_key(Product::effective_price),
        SortKey::PriceHigh => {
            products.sort_by(|a, b| b.effective_price().cmp(&a.effective_price()));
        }
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Trending => products.sort_by_key(|p| !p.trending),
        SortKey::Featured => products.sort_by_key(|p| !p.featured),
    }
    products
}

/// Slice out the 1-indexed page `[(page-1)*page_size, page*page_size)`.
///
/// The requested page is clamped to `[1, max(total_pages, 1)]`: a jump past
/// the end lands on the last page rather than silently returning an empty
/// one, and page 0 lands on page 1.
///
/// # Errors
///
/// Returns [`QueryError::InvalidPageSize`] when `page_size` is zero.
#[allow(clippy::cast_possible_truncation)]
pub fn paginate(
    products: Vec<Product>,
    page: u32,
    page_size: u32,
) -> Result<ResultPage, QueryError> {
    if page_size == 0 {
        return Err(QueryError::InvalidPageSize);
    }
    let total_matched = products.len();
    let size = page_size as usize;
    let total_pages = u32::try_from(total_matched.div_ceil(size)).unwrap_or(u32::MAX);
    let page = page.clamp(1, total_pages.max(1));
    let start = (page as usize - 1).saturating_mul(size);
    let items: Vec<Product> = products.into_iter().skip(start).take(size).collect();

    Ok(ResultPage {
        items,
        total_matched,
        total_pages,
        page,
    })
}

/// Evaluate a full query: filter (category → search → price), sort, paginate.
///
/// # Errors
///
/// Returns a [`QueryError`] when the spec is malformed (zero page size or an
/// inverted price range); all other inputs produce a well-defined, possibly
/// empty [`ResultPage`].
pub fn run_query(products: &[Product], spec: &QuerySpec) -> Result<ResultPage, QueryError> {
    spec.validate()?;
    let filtered = filter_by_category(products, &spec.category);
    let filtered = filter_by_search(&filtered, &spec.search_term);
    let filtered = filter_by_price_range(&filtered, spec.price_range);
    let sorted = sort_products(filtered, spec.sort_key);
    paginate(sorted, spec.page, spec.page_size)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: &str, category: &str, price: &str) -> Product {
        Product {
            id: id.to_string(),
            title: format!("{id} title"),
            description: format!("{id} description"),
            category: category.to_string(),
            price: price.parse().unwrap(),
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

    /// Five products across coffee/tea, priced 10..50.
    fn fixture() -> Vec<Product> {
        vec![
            product("p1", "coffee", "10"),
            product("p2", "tea", "20"),
            product("p3", "coffee", "30"),
            product("p4", "tea", "40"),
            product("p5", "coffee", "50"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn category_filter_matches_slug_exactly() {
        let filtered = filter_by_category(&fixture(), "coffee");
        assert_eq!(ids(&filtered), ["p1", "p3", "p5"]);
    }

    #[test]
    fn category_all_returns_input_unchanged() {
        let products = fixture();
        assert_eq!(filter_by_category(&products, ALL_CATEGORY), products);
    }

    #[test]
    fn category_filter_is_idempotent() {
        let once = filter_by_category(&fixture(), "tea");
        let twice = filter_by_category(&once, "tea");
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_category_yields_empty_not_error() {
        assert!(filter_by_category(&fixture(), "grinders").is_empty());
    }

    #[test]
    fn search_matches_any_of_the_three_fields() {
        let mut products = fixture();
        products[0].title = "Arabica Beans".to_string();
        products[1].description = "notes of arabica".to_string();

        let filtered = filter_by_search(&products, "ARABICA");
        assert_eq!(ids(&filtered), ["p1", "p2"]);

        // Category text is searchable too.
        let filtered = filter_by_search(&products, "tea");
        assert_eq!(ids(&filtered), ["p2", "p4"]);
    }

    #[test]
    fn blank_search_term_is_a_no_op() {
        let products = fixture();
        assert_eq!(filter_by_search(&products, ""), products);
        assert_eq!(filter_by_search(&products, "   "), products);
    }

    #[test]
    fn price_filter_uses_effective_price() {
        let mut products = fixture();
        // p5 lists at 50 but a 50% discount brings it to 25.
        products[4].discount = Some(Decimal::from(50));

        let range = PriceRange::new(Decimal::ZERO, Decimal::from(25));
        let filtered = filter_by_price_range(&products, range);
        assert_eq!(ids(&filtered), ["p1", "p2", "p5"]);
    }

    #[test]
    fn price_low_sorts_ascending_by_effective_price() {
        let mut products = fixture();
        products.reverse();
        let sorted = sort_products(products, SortKey::PriceLow);
        assert_eq!(ids(&sorted), ["p1", "p2", "p3", "p4", "p5"]);
    }

    #[test]
    fn price_high_sorts_descending() {
        let sorted = sort_products(fixture(), SortKey::PriceHigh);
        assert_eq!(ids(&sorted), ["p5", "p4", "p3", "p2", "p1"]);
    }

    #[test]
    fn rating_sorts_descending_with_stable_ties() {
        let mut products = fixture();
        products[1].rating = 4.5;
        products[3].rating = 4.5;
        products[4].rating = 3.0;

        let sorted = sort_products(products, SortKey::Rating);
        // p2 and p4 tie at 4.5 and keep input order.
        assert_eq!(ids(&sorted), ["p2", "p4", "p5", "p1", "p3"]);
    }

    #[test]
    fn featured_sort_keeps_input_order_among_ties() {
        let mut products = fixture();
        products[2].featured = true;
        products[4].featured = true;

        let sorted = sort_products(products, SortKey::Featured);
        assert_eq!(ids(&sorted), ["p3", "p5", "p1", "p2", "p4"]);
    }

    #[test]
    fn trending_sort_puts_flagged_first() {
        let mut products = fixture();
        products[3].trending = true;

        let sorted = sort_products(products, SortKey::Trending);
        assert_eq!(ids(&sorted), ["p4", "p1", "p2", "p3", "p5"]);
    }

    #[test]
    fn paginate_slices_one_indexed_pages() {
        let page = paginate(fixture(), 2, 2).unwrap();
        assert_eq!(ids(&page.items), ["p3", "p4"]);
        assert_eq!(page.total_matched, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 2);
    }

    #[test]
    fn paginate_clamps_past_the_end_to_the_last_page() {
        let page = paginate(fixture(), 999, 3).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(ids(&page.items), ["p4", "p5"]);
    }

    #[test]
    fn paginate_clamps_page_zero_to_first_page() {
        let page = paginate(fixture(), 0, 2).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(ids(&page.items), ["p1", "p2"]);
    }

    #[test]
    fn paginate_rejects_zero_page_size() {
        assert_eq!(
            paginate(fixture(), 1, 0).unwrap_err(),
            QueryError::InvalidPageSize
        );
    }

    #[test]
    fn paginate_empty_set_returns_valid_empty_page() {
        let page = paginate(Vec::new(), 1, 10).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_matched, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn pages_partition_the_filtered_set() {
        let spec = QuerySpec {
            sort_key: SortKey::PriceLow,
            page_size: 2,
            ..QuerySpec::default()
        };
        let full = sort_products(fixture(), SortKey::PriceLow);

        let mut collected = Vec::new();
        let first = run_query(&fixture(), &spec).unwrap();
        for page in 1..=first.total_pages {
            let result = run_query(&fixture(), &QuerySpec { page, ..spec.clone() }).unwrap();
            assert!(result.items.len() <= spec.page_size as usize);
            collected.extend(result.items);
        }
        assert_eq!(collected, full);
    }

    #[test]
    fn run_query_composes_filter_sort_and_page() {
        // category coffee, price [0, 35], price-low, page 1, size 2
        // → the two cheapest coffee products priced <= 35, ascending.
        let spec = QuerySpec {
            category: "coffee".to_string(),
            price_range: PriceRange::new(Decimal::ZERO, Decimal::from(35)),
            sort_key: SortKey::PriceLow,
            page: 1,
            page_size: 2,
            ..QuerySpec::default()
        };
        let page = run_query(&fixture(), &spec).unwrap();
        assert_eq!(ids(&page.items), ["p1", "p3"]);
        assert_eq!(page.total_matched, 2);
    }

    #[test]
    fn unmatched_search_is_empty_not_an_error() {
        let spec = QuerySpec {
            search_term: "latte".to_string(),
            ..QuerySpec::default()
        };
        let page = run_query(&fixture(), &spec).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_matched, 0);
    }

    #[test]
    fn run_query_rejects_inverted_price_range() {
        let spec = QuerySpec {
            price_range: PriceRange::new(Decimal::from(100), Decimal::from(1)),
            ..QuerySpec::default()
        };
        assert!(matches!(
            run_query(&fixture(), &spec),
            Err(QueryError::InvalidPriceRange { .. })
        ));
    }

    #[test]
    fn run_query_never_mutates_its_input() {
        let products = fixture();
        let before = products.clone();
        let _ = run_query(&products, &QuerySpec::default()).unwrap();
        assert_eq!(products, before);
    }
}
