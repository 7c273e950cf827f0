//! Request DTOs for the admin JSON API.

pub mod request;
