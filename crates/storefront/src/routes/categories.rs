//! Category listing handler.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use roastline_catalog::ALL_CATEGORY;

use crate::state::AppState;

/// One category entry in the listing.
#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub label: String,
    pub slug: String,
    pub count: usize,
}

/// `GET /api/categories` - all categories with product counts.
///
/// The synthetic "All Products" entry comes first, counting the whole
/// catalog; the rest follow in catalog-file order.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<CategoryView>> {
    let catalog = state.catalog();

    let mut entries = vec![CategoryView {
        label: "All Products".to_string(),
        slug: ALL_CATEGORY.to_string(),
        count: catalog.len(),
    }];
    entries.extend(catalog.categories().iter().map(|c| CategoryView {
        label: c.label.clone(),
        slug: c.slug.clone(),
        count: c.count,
    }));

    Json(entries)
}
