//! Integration tests for the GitShelf HTTP surface.
//!
//! The full router runs against a memory-backed share store and an
//! in-process fake upstream; requests go through `tower::ServiceExt`.


mod auth_test;
mod browse_test;
mod file_update_test;
mod share_test;
