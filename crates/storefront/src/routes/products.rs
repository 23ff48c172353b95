//! Product listing and detail handlers.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::instrument;

use roastline_catalog::query::DEFAULT_PAGE_SIZE;
use roastline_catalog::types::slug_for_label;
use roastline_catalog::{
    PriceRange, Product, QuerySpec, SortKey, compute_category_facets, run_query,
};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Deserialize empty strings as None for optional numeric fields.
fn empty_string_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Product listing query parameters.
///
/// `category` accepts either a slug ("coffee-machines") or a display label
/// carried over from a landing-page link ("Coffee Machines").
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub min_price: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub max_price: Option<Decimal>,
    #[serde(default)]
    pub sort: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub per_page: Option<u32>,
}

impl ProductListQuery {
    /// Build the catalog query spec from the raw parameters.
    fn to_spec(&self) -> QuerySpec {
        let defaults = PriceRange::default();
        QuerySpec {
            search_term: self.q.clone(),
            category: self
                .category
                .as_deref()
                .map_or_else(|| "all".to_string(), slug_for_label),
            price_range: PriceRange::new(
                self.min_price.unwrap_or(defaults.min),
                self.max_price.unwrap_or(defaults.max),
            ),
            sort_key: SortKey::parse(&self.sort),
            page: self.page.unwrap_or(1),
            page_size: self.per_page.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

/// Product summary for listing responses.
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub discount: Option<Decimal>,
    /// Price actually charged after discount/sale rules.
    pub effective_price: Decimal,
    pub rating: f32,
    pub review_count: u32,
    pub image: Option<String>,
    pub in_stock: bool,
    pub featured: bool,
    pub trending: bool,
}

impl From<&Product> for ProductView {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            category: p.category.clone(),
            price: p.price,
            original_price: p.original_price,
            discount: p.discount,
            effective_price: p.effective_price(),
            rating: p.rating,
            review_count: p.review_count,
            image: p.images.first().cloned(),
            in_stock: p.in_stock,
            featured: p.featured,
            trending: p.trending,
        }
    }
}

/// Product listing response.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub items: Vec<ProductView>,
    pub total_matched: usize,
    pub total_pages: u32,
    /// Page actually served, after clamping to the valid range.
    pub page: u32,
    pub page_size: u32,
    /// Per-category match counts under the current search and price filters.
    pub facets: BTreeMap<String, usize>,
}

/// `GET /api/products` - search, filter, sort, and paginate the catalog.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ProductListQuery>,
) -> Result<Json<ProductListResponse>> {
    let spec = params.to_spec();
    let products = state.catalog().products();

    let page = run_query(products, &spec)?;
    let facets = compute_category_facets(products, &spec)?;

    Ok(Json(ProductListResponse {
        items: page.items.iter().map(ProductView::from).collect(),
        total_matched: page.total_matched,
        total_pages: page.total_pages,
        page: page.page,
        page_size: spec.page_size,
        facets,
    }))
}

/// Product detail response.
#[derive(Debug, Serialize)]
pub struct ProductDetailResponse {
    #[serde(flatten)]
    pub summary: ProductView,
    pub description: String,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub sizes: Vec<String>,
}

/// `GET /api/products/{id}` - single product detail.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductDetailResponse>> {
    let product = state
        .catalog()
        .get_product(&id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(Json(ProductDetailResponse {
        summary: ProductView::from(product),
        description: product.description.clone(),
        images: product.images.clone(),
        features: product.features.clone(),
        sizes: product.sizes.clone(),
    }))
}
