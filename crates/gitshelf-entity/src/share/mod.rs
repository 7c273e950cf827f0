//! Share record entity and expiry arithmetic.

pub mod expiry;
pub mod model;

pub use expiry::ExpiryUnit;
pub use model::{ShareRecord, ShareState};
