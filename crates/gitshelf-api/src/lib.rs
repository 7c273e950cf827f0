//! # gitshelf-api
//!
//! HTTP layer for GitShelf built on Axum.
//!
//! Provides the public share route, the browse/editor pages, the admin
//! JSON API, the shared-secret auth gate, and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod views;

pub use router::build_router;
pub use state::AppState;
