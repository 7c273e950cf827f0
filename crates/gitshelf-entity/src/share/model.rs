//! Share record entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gitshelf_core::types::VirtualPath;
use gitshelf_core::{AppError, AppResult};

/// A durable record describing one public, revocable, optionally
/// time-limited pointer to a single file.
///
/// Records are stored as JSON in the share store, one per share, and carry
/// no other access control: possession of the id is the authorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareRecord {
    /// Short random id; the store key and the public URL segment.
    pub id: String,
    /// `<repository>/<relative file path>` of the shared file.
    pub full_path: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Absolute expiry; `None` means the share never expires.
    pub expire_at: Option<DateTime<Utc>>,
    /// Administrator kill switch, independent of expiry.
    pub active: bool,
    /// Count of successful public resolutions. Only ever increases, but
    /// increments are read-modify-write and may be lost under concurrent
    /// access.
    pub visits: u64,
}

/// Resolvability of a record at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareState {
    /// Active and not expired.
    Resolvable,
    /// Deliberately disabled by an administrator.
    Inactive,
    /// The expiry timestamp has passed.
    Expired,
}

impl ShareRecord {
    /// Classify this record at time `now`.
    ///
    /// The inactive check runs first: a record that is both deactivated and
    /// expired reports as inactive, matching the administrator's explicit
    /// action taking precedence.
    pub fn state_at(&self, now: DateTime<Utc>) -> ShareState {
        if !self.active {
            return ShareState::Inactive;
        }
        match self.expire_at {
            Some(expire) if now >= expire => ShareState::Expired,
            _ => ShareState::Resolvable,
        }
    }

    /// Whether the record is resolvable at time `now`.
    pub fn is_resolvable_at(&self, now: DateTime<Utc>) -> bool {
        self.state_at(now) == ShareState::Resolvable
    }

    /// Parse the stored full path into a virtual path.
    pub fn virtual_path(&self) -> AppResult<VirtualPath> {
        VirtualPath::parse(&self.full_path)
            .map_err(|_| AppError::internal(format!("Malformed share path: {}", self.full_path)))
    }

    /// The shared file's display name.
    pub fn file_name(&self) -> &str {
        self.full_path
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.full_path)
    }
}
