use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const FRESH_MIN_DAYS: i64 = 5;
pub const WARNING_MIN_DAYS: i64 = 2;
pub const CRITICAL_MIN_DAYS: i64 = 0;

/// Urgency bucket used to colour-code an item.
///
/// Ordered from most to least urgent, so sorting by tier puts expired items
/// first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Expired,
    Critical,
    Warning,
    Fresh,
}

impl SeverityTier {
    pub const ALL: [SeverityTier; 4] = [
        SeverityTier::Fresh,
        SeverityTier::Warning,
        SeverityTier::Critical,
        SeverityTier::Expired,
    ];

    /// Inclusive lower bounds, evaluated high to low.
    pub fn from_days(days: i64) -> Self {
        if days >= FRESH_MIN_DAYS {
            SeverityTier::Fresh
        } else if days >= WARNING_MIN_DAYS {
            SeverityTier::Warning
        } else if days >= CRITICAL_MIN_DAYS {
            SeverityTier::Critical
        } else {
            SeverityTier::Expired
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Fresh => "fresh",
            SeverityTier::Warning => "warning",
            SeverityTier::Critical => "critical",
            SeverityTier::Expired => "expired",
        }
    }

    /// Badge text shown next to an item: the countdown, or "Expired".
    pub fn badge_label(days: Option<i64>) -> String {
        match days {
            Some(days) if days >= 0 => format!("{days} days left"),
            _ => "Expired".to_string(),
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fresh" => Ok(SeverityTier::Fresh),
            "warning" => Ok(SeverityTier::Warning),
            "critical" => Ok(SeverityTier::Critical),
            "expired" => Ok(SeverityTier::Expired),
            other => Err(CoreError::Invalid(format!("unknown severity tier '{other}'"))),
        }
    }
}
