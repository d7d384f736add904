//! Date-range filtering for list queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An optional half-open-or-closed time window.
///
/// Either bound may be absent; an empty range matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateRange {
    /// Inclusive lower bound.
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound.
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    /// True when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether the given instant falls inside the range.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        if let Some(from) = self.from
            && instant < from
        {
            return false;
        }
        if let Some(to) = self.to
            && instant > to
        {
            return false;
        }
        true
    }

    /// Whether an optional instant falls inside the range.
    ///
    /// A missing timestamp only matches an unbounded range: a role that
    /// was never authorized does not satisfy an authorized-date filter.
    pub fn contains_opt(&self, instant: Option<DateTime<Utc>>) -> bool {
        match instant {
            Some(instant) => self.contains(instant),
            None => self.is_unbounded(),
        }
    }
}
