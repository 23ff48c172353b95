//! The product record and its pricing rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A catalog product.
///
/// Records are loaded from the static catalog file and treated as read-only
/// by the query pipeline. The `category` field holds the category slug and is
/// attached when the catalog is flattened; it is not present on the raw item
/// records inside a category entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable unique identifier.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Category slug (e.g., "coffee-machines").
    #[serde(default)]
    pub category: String,
    /// List price. Must be non-negative.
    pub price: Decimal,
    /// Pre-sale price, shown struck through when higher than `price`.
    #[serde(default, alias = "originalPrice")]
    pub original_price: Option<Decimal>,
    /// Percentage discount, 0-100.
    #[serde(default)]
    pub discount: Option<Decimal>,
    /// Average rating, 0.0-5.0.
    #[serde(default)]
    pub rating: f32,
    #[serde(default, alias = "reviewCount")]
    pub review_count: u32,
    /// Image URIs, primary first.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_in_stock", alias = "inStock", alias = "stock")]
    pub in_stock: bool,
    #[serde(default, alias = "isFeatured")]
    pub featured: bool,
    #[serde(default, alias = "isTrending")]
    pub trending: bool,
    /// Key feature bullet points for the detail view.
    #[serde(default)]
    pub features: Vec<String>,
    /// Available sizes/units for the detail view.
    #[serde(default, alias = "category_unit")]
    pub sizes: Vec<String>,
}

const fn default_in_stock() -> bool {
    true
}

impl Product {
    /// The price actually charged after any discount or sale-price override.
    ///
    /// Canonical rule, applied uniformly: take the lesser of `price` and
    /// `original_price` (when present), then apply `discount` to that base.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        let base = match self.original_price {
            Some(original) if original < self.price => original,
            _ => self.price,
        };
        match self.discount {
            Some(discount) if discount > Decimal::ZERO => {
                base * (Decimal::ONE - discount / Decimal::ONE_HUNDRED)
            }
            _ => base,
        }
    }

    /// Validate record invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductError`] when the price is negative, the discount
    /// falls outside 0-100, the rating falls outside 0.0-5.0, or the record
    /// carries no images.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.price < Decimal::ZERO {
            return Err(ProductError::NegativePrice {
                id: self.id.clone(),
                price: self.price,
            });
        }
        if let Some(discount) = self.discount
            && !(Decimal::ZERO..=Decimal::ONE_HUNDRED).contains(&discount)
        {
            return Err(ProductError::DiscountOutOfRange {
                id: self.id.clone(),
                discount,
            });
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(ProductError::RatingOutOfRange {
                id: self.id.clone(),
                rating: self.rating,
            });
        }
        if self.images.is_empty() {
            return Err(ProductError::MissingImages {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

/// Product record invariant violations.
#[derive(Debug, Error, PartialEq)]
pub enum ProductError {
    #[error("product {id}: price {price} is negative")]
    NegativePrice { id: String, price: Decimal },
    #[error("product {id}: discount {discount} is outside 0-100")]
    DiscountOutOfRange { id: String, discount: Decimal },
    #[error("product {id}: rating {rating} is outside 0.0-5.0")]
    RatingOutOfRange { id: String, rating: f32 },
    #[error("product {id}: at least one image is required")]
    MissingImages { id: String },
}
