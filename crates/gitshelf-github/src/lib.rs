//! # gitshelf-github
//!
//! GitHub Contents API client for GitShelf. Implements the
//! [`ContentSource`](gitshelf_core::traits::source::ContentSource) trait:
//! repository listing, directory/file metadata lookup, unbuffered blob
//! streaming, and the conditional (SHA compare-and-swap) file write.

pub mod client;
pub mod codec;
pub mod source;
pub mod types;

pub use client::GithubClient;
pub use source::GithubContentSource;
