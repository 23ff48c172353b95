//! The catalog query pipeline.
//!
//! A [`QuerySpec`] describes the user's current search/filter/sort/page
//! intent. Specs are immutable: every change produces a fresh spec and a
//! fresh [`run_query`] evaluation. The pipeline is a pure function of its
//! inputs - no I/O, no state between calls.

mod facets;
mod pipeline;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{ALL_CATEGORY, Product};

pub use facets::compute_category_facets;
pub use pipeline::{
    filter_by_category, filter_by_price_range, filter_by_search, paginate, run_query,
    sort_products,
};

/// Products per page when the caller doesn't ask for a specific size.
pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Sort orders supported by the catalog.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Featured products first; ties keep input order.
    #[default]
    Featured,
    /// Trending products first; ties keep input order.
    Trending,
    /// Ascending by effective price.
    PriceLow,
    /// Descending by effective price.
    PriceHigh,
    /// Descending by rating.
    Rating,
}

impl SortKey {
    /// Parse from URL parameter value. Unknown values fall back to featured.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "trending" => Self::Trending,
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "rating" | "top-rated" => Self::Rating,
            _ => Self::Featured,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Trending => "trending",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
        }
    }
}

/// Inclusive effective-price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    #[must_use]
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Whether `price` falls within `[min, max]`, both ends inclusive.
    #[must_use]
    pub fn contains(self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }

    /// Reject malformed ranges.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPriceRange`] when `min > max`.
    pub fn validate(self) -> Result<(), QueryError> {
        if self.min > self.max {
            return Err(QueryError::InvalidPriceRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(Decimal::ZERO, Decimal::MAX)
    }
}

/// The immutable description of a catalog query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Free-text term, matched against title/description/category.
    pub search_term: String,
    /// Category slug; [`ALL_CATEGORY`] means no category filter.
    pub category: String,
    pub price_range: PriceRange,
    pub sort_key: SortKey,
    /// 1-indexed page number.
    pub page: u32,
    pub page_size: u32,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: ALL_CATEGORY.to_string(),
            price_range: PriceRange::default(),
            sort_key: SortKey::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QuerySpec {
    /// Reject malformed specs before evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPageSize`] for a zero page size, or
    /// [`QueryError::InvalidPriceRange`] when the range minimum exceeds its
    /// maximum. A search term is never rejected.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.page_size == 0 {
            return Err(QueryError::InvalidPageSize);
        }
        self.price_range.validate()
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultPage {
    /// At most `page_size` products, in sort order.
    pub items: Vec<Product>,
    /// Matching products across all pages.
    pub total_matched: usize,
    pub total_pages: u32,
    /// The page actually returned, after clamping.
    pub page: u32,
}

impl ResultPage {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Malformed-query conditions.
///
/// Every other input - empty results, out-of-range pages, unknown categories -
/// is a normal, non-error outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("page size must be at least 1")]
    InvalidPageSize,
    #[error("price range minimum {min} exceeds maximum {max}")]
    InvalidPriceRange { min: Decimal, max: Decimal },
}
