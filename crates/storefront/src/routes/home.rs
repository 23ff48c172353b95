//! Home page sections handler.

use axum::{Json, extract::State};
use chrono::{Datelike, Utc};
use serde::Serialize;
use tracing::instrument;

use roastline_catalog::seeded_shuffle;

use crate::routes::categories::CategoryView;
use crate::routes::products::ProductView;
use crate::state::AppState;

const SECTION_SIZE: usize = 8;
const DAILY_PICKS: usize = 4;

/// Home page sections.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub featured: Vec<ProductView>,
    pub trending: Vec<ProductView>,
    /// A rotating in-stock selection, reshuffled once per day.
    pub daily_picks: Vec<ProductView>,
    pub top_categories: Vec<CategoryView>,
}

/// `GET /api/home` - featured, trending, and daily-pick selections.
///
/// Daily picks are seeded from the calendar date, so every request on a
/// given day sees the same selection and the selection rotates at midnight.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<HomeResponse> {
    let catalog = state.catalog();
    let products = catalog.products();

    let featured: Vec<ProductView> = products
        .iter()
        .filter(|p| p.featured)
        .take(SECTION_SIZE)
        .map(ProductView::from)
        .collect();

    let trending: Vec<ProductView> = products
        .iter()
        .filter(|p| p.trending)
        .take(SECTION_SIZE)
        .map(ProductView::from)
        .collect();

    let mut pool: Vec<_> = products.iter().filter(|p| p.in_stock).cloned().collect();
    seeded_shuffle(&mut pool, daily_seed());
    let daily_picks: Vec<ProductView> =
        pool.iter().take(DAILY_PICKS).map(ProductView::from).collect();

    let mut top_categories: Vec<CategoryView> = catalog
        .categories()
        .iter()
        .map(|c| CategoryView {
            label: c.label.clone(),
            slug: c.slug.clone(),
            count: c.count,
        })
        .collect();
    top_categories.sort_by(|a, b| b.count.cmp(&a.count));
    top_categories.truncate(4);

    Json(HomeResponse {
        featured,
        trending,
        daily_picks,
        top_categories,
    })
}

/// Shuffle seed derived from today's date.
fn daily_seed() -> u64 {
    let days = Utc::now().date_naive().num_days_from_ce();
    u64::try_from(days).unwrap_or_default()
}
