//! Storefront services.

pub mod debounce;
