//! Roastline Catalog - product data model and query pipeline.
//!
//! This crate provides the shared catalog core used by the Roastline
//! storefront:
//! - [`types`] - product and category records
//! - [`query`] - the deterministic search/filter/sort/paginate pipeline
//! - [`shuffle`] - the explicit seeded-shuffle stage for randomized picks
//!
//! # Architecture
//!
//! The crate contains only types and pure functions - no I/O, no async, no
//! global state. The raw product collection is owned by the caller (the
//! storefront loads it once at startup) and is borrowed read-only here; the
//! pipeline never mutates input records.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod query;
pub mod shuffle;
pub mod types;

pub use query::{
    PriceRange, QueryError, QuerySpec, ResultPage, SortKey, compute_category_facets,
    filter_by_category, filter_by_price_range, filter_by_search, paginate, run_query,
    sort_products,
};
pub use shuffle::seeded_shuffle;
pub use types::{ALL_CATEGORY, Category, Product, ProductError};
