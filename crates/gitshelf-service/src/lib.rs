//! # gitshelf-service
//!
//! Business logic services for GitShelf. Orchestrates the share store and
//! the upstream content source; every service takes its collaborators by
//! constructor injection and exposes `AppResult` operations to the API
//! layer.

pub mod browse;
pub mod editor;
pub mod share;

#[cfg(test)]
pub(crate) mod test_support;

pub use browse::BrowseService;
pub use editor::EditorService;
pub use share::access::AccessService;
pub use share::service::ShareService;
