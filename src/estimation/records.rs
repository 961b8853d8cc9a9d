//! Failure record input batch.
//!
//! Records originate in an external store (queried by asset, equipment
//! class, or failure mode) and arrive here as an already-validated,
//! immutable batch. The estimation engine only reads them.

use serde::{Deserialize, Serialize};

/// What the record is attached to.
///
/// Asset-level and system-level records share every other field; the scope
/// tag is the only difference between the two shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RecordScope {
    /// A single maintainable asset.
    Asset { asset_id: u64 },
    /// A system aggregating several assets.
    System { system_id: u64 },
}

/// One reliability-relevant failure observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Asset or system the failure belongs to.
    pub scope: RecordScope,
    /// Time to failure (first failure) or time between failures, in days.
    pub tbf_days: f64,
    /// Operating hours accumulated at the failure, when metered.
    pub operating_hours: Option<f64>,
    /// Categorical failure mechanism label, when recorded.
    pub mechanism: Option<String>,
}

impl FailureRecord {
    /// Creates an asset-scoped record with the given time between failures.
    pub fn for_asset(asset_id: u64, tbf_days: f64) -> Self {
        Self {
            scope: RecordScope::Asset { asset_id },
            tbf_days,
            operating_hours: None,
            mechanism: None,
        }
    }

    /// Creates a system-scoped record with the given time between failures.
    pub fn for_system(system_id: u64, tbf_days: f64) -> Self {
        Self {
            scope: RecordScope::System { system_id },
            tbf_days,
            operating_hours: None,
            mechanism: None,
        }
    }

    /// Sets the metered operating hours at failure.
    pub fn with_operating_hours(mut self, hours: f64) -> Self {
        self.operating_hours = Some(hours);
        self
    }

    /// Sets the failure mechanism label.
    pub fn with_mechanism(mut self, mechanism: impl Into<String>) -> Self {
        self.mechanism = Some(mechanism.into());
        self
    }

    /// Selects the usable time value for estimation.
    ///
    /// Operating hours win when requested, present, and positive; otherwise
    /// the TBF-day value is used if positive. Returns the time together with
    /// an `adjusted` flag marking that operating hours were substituted for
    /// the day value. `None` means the record contributes nothing.
    pub fn usable_time(&self, prefer_operating_hours: bool) -> Option<(f64, bool)> {
        if prefer_operating_hours {
            if let Some(h) = self.operating_hours {
                if h.is_finite() && h > 0.0 {
                    return Some((h, true));
                }
            }
        }
        if self.tbf_days.is_finite() && self.tbf_days > 0.0 {
            return Some((self.tbf_days, false));
        }
        None
    }
}
