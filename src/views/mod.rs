//! Server-rendered HTML.
//!
//! Pages are built with `maud`, which escapes every interpolated value, so
//! message content and raw database errors are safe to embed.

pub mod board;
pub mod error;
pub mod layout;

use std::fmt::Write;

use chrono::{FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

use crate::config::DisplayConfig;

/// Presentation settings resolved once at startup.
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub title: String,
    timestamp_format: String,
    offset: FixedOffset,
}

impl ViewSettings {
    pub fn from_config(config: &DisplayConfig) -> Self {
        let offset = FixedOffset::east_opt(config.utc_offset_minutes * 60).unwrap_or_else(|| {
            tracing::warn!(
                utc_offset_minutes = config.utc_offset_minutes,
                "Invalid UTC offset, falling back to UTC"
            );
            Utc.fix()
        });

        Self {
            title: config.title.clone(),
            timestamp_format: config.timestamp_format.clone(),
            offset,
        }
    }

    /// Render a stored UTC timestamp in the configured offset and pattern.
    pub fn format_timestamp(&self, created_at: NaiveDateTime) -> String {
        let local = Utc.from_utc_datetime(&created_at).with_timezone(&self.offset);

        let mut out = String::new();
        if write!(out, "{}", local.format(&self.timestamp_format)).is_err() {
            return local.to_rfc3339();
        }
        out
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}
