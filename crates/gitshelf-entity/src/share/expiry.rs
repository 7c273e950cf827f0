//! Share expiry units and arithmetic.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Duration unit for a share's lifetime.
///
/// Month and year are fixed 30/365-day spans, not calendar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryUnit {
    Hour,
    Day,
    Week,
    Month,
    Year,
    /// The share never expires.
    Forever,
}

impl ExpiryUnit {
    /// The unit duration in milliseconds; `None` for [`ExpiryUnit::Forever`].
    pub fn millis(self) -> Option<i64> {
        match self {
            Self::Hour => Some(3_600_000),
            Self::Day => Some(86_400_000),
            Self::Week => Some(604_800_000),
            Self::Month => Some(2_592_000_000),
            Self::Year => Some(31_536_000_000),
            Self::Forever => None,
        }
    }

    /// Compute the absolute expiry for `value` units after `created_at`.
    ///
    /// Returns `None` for `Forever`: such shares carry no expiry at all.
    pub fn expire_at(self, created_at: DateTime<Utc>, value: u32) -> Option<DateTime<Utc>> {
        let unit_ms = self.millis()?;
        Some(created_at + Duration::milliseconds(unit_ms * i64::from(value)))
    }
}
