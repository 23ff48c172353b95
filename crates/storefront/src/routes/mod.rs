//! HTTP route handlers for the storefront JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (catalog loaded)
//!
//! # Products
//! GET  /api/products           - Product listing (search/filter/sort/paginate)
//! GET  /api/products/{id}      - Product detail
//! GET  /api/categories         - Category list with counts
//!
//! # Home
//! GET  /api/home               - Featured/trending/daily-picks sections
//!
//! # Booking
//! GET  /api/booking/plans      - Tasting-session plans
//! POST /api/booking            - Book a tasting session
//! ```

pub mod booking;
pub mod categories;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .route("/products/{id}", get(products::show))
        .route("/categories", get(categories::index))
        .route("/home", get(home::index))
        .route("/booking/plans", get(booking::plans))
        .route("/booking", post(booking::create))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}
