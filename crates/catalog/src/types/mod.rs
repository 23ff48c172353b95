//! Catalog record types.
//!
//! [`Product`] is the stored record; [`Category`] is derived from the product
//! collection, never stored independently.

pub mod category;
pub mod product;

pub use category::{
    ALL_CATEGORY, Category, categories_with_counts, label_for_slug, slug_for_label, slugify,
};
pub use product::{Product, ProductError};
