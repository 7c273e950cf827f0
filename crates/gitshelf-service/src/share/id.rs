//! Share id generation.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Generates short random share ids.
///
/// Possession of the id is the only access control on the public share
/// path, so ids come from a CSPRNG. The alphabet is alphanumeric
/// (62 symbols); the default length of 8 gives ~47 bits, and the length is
/// configurable for deployments with long-lived links.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    /// Number of characters per id.
    length: usize,
}

impl IdGenerator {
    /// Creates a new generator producing ids of the given length.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Generate a fresh random id.
    pub fn generate(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}
