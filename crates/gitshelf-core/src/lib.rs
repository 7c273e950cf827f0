//! # gitshelf-core
//!
//! Core crate for GitShelf. Contains the store and upstream trait seams,
//! configuration schemas, the virtual path type, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other GitShelf crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
