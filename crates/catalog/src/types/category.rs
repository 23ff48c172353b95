//! Derived category data and slug/label mapping.

use serde::{Deserialize, Serialize};

use super::product::Product;

/// Synthetic category meaning "no category filter".
pub const ALL_CATEGORY: &str = "all";

/// Fixed label → slug table for category names carried in URLs.
///
/// Landing-page tiles link with display labels; anything not in this table
/// passes through as a literal slug.
const LABEL_SLUGS: &[(&str, &str)] = &[
    ("All Products", ALL_CATEGORY),
    ("Coffee Machines", "coffee-machines"),
    ("Coffee Powders", "coffee-powders"),
    ("Syrups", "syrups"),
    ("Accessories", "accessories"),
];

/// A category label grouping products.
///
/// Derived from the product collection; `count` is the number of products
/// whose category slug equals `slug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub slug: String,
    pub count: usize,
}

/// Map a URL-carried category label to its slug.
///
/// Unrecognized labels pass through unchanged, as literal slugs.
#[must_use]
pub fn slug_for_label(label: &str) -> String {
    LABEL_SLUGS
        .iter()
        .find(|(l, _)| l.eq_ignore_ascii_case(label))
        .map_or_else(|| label.to_string(), |(_, slug)| (*slug).to_string())
}

/// Display label for a slug (e.g., "coffee-machines" → "Coffee Machines").
#[must_use]
pub fn label_for_slug(slug: &str) -> String {
    slug.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Slug for a free-form label (e.g., "Gift Sets" → "gift-sets").
///
/// Used for catalog entries that carry a label but no explicit slug.
#[must_use]
pub fn slugify(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Derive the category list, with counts, from a product collection.
///
/// Categories appear in first-seen order; counts are over the full
/// (unfiltered) collection, matching the sidebar the storefront renders.
#[must_use]
pub fn categories_with_counts(products: &[Product]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    for product in products {
        if let Some(existing) = categories.iter_mut().find(|c| c.slug == product.category) {
            existing.count += 1;
        } else {
            categories.push(Category {
                label: label_for_slug(&product.category),
                slug: product.category.clone(),
                count: 1,
            });
        }
    }
    categories
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
