//! Selection parameters for a single sweep.

use chrono::{DateTime, TimeDelta, Utc};
use regex::Regex;

use crate::domain::AppError;

/// Default retention window in days.
pub const DEFAULT_MIN_AGE_DAYS: u32 = 90;

/// Immutable selection criteria.
///
/// The age cutoff is fixed when the criteria are built, so every gist in a run
/// is compared against the same instant regardless of how long the run takes.
#[derive(Debug, Clone)]
pub struct Criteria {
    cutoff: DateTime<Utc>,
    include_public: bool,
    pattern: Option<Regex>,
}

impl Criteria {
    /// Build criteria from the run's `now`, a minimum age in days, the public
    /// inclusion flag, and an optional description pattern.
    ///
    /// An invalid pattern is rejected here, before any gist is evaluated.
    pub fn new(
        now: DateTime<Utc>,
        min_age_days: u32,
        include_public: bool,
        pattern: Option<&str>,
    ) -> Result<Self, AppError> {
        let pattern = pattern
            .map(|raw| {
                Regex::new(raw).map_err(|e| AppError::InvalidPattern {
                    pattern: raw.to_string(),
                    details: e.to_string(),
                })
            })
            .transpose()?;

        let cutoff = TimeDelta::try_days(i64::from(min_age_days))
            .and_then(|age| now.checked_sub_signed(age))
            .ok_or_else(|| {
                AppError::config_error(format!(
                    "Minimum age of {} days is out of range",
                    min_age_days
                ))
            })?;

        Ok(Self { cutoff, include_public, pattern })
    }

    /// Gists updated strictly before this instant are old enough to sweep.
    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    pub fn include_public(&self) -> bool {
        self.include_public
    }

    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }
}
