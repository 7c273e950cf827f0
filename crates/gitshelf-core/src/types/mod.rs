//! Small domain value types shared across crates.

pub mod path;

pub use path::VirtualPath;
