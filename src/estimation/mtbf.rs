//! Plain-mean MTBF fallback for batches too small to fit a distribution.

use serde::{Deserialize, Serialize};

use super::records::FailureRecord;

/// Time basis a plain MTBF estimate was computed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MtbfMethod {
    /// Arithmetic mean of metered operating hours.
    OperatingHours,
    /// Arithmetic mean of TBF day values.
    TbfDays,
}

/// A plain MTBF estimate.
///
/// `mtbf: None` signals that the batch held no usable time values at all;
/// callers must treat the analysis as impossible rather than defaulting to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MtbfEstimate {
    /// Mean time between failures, absent when no usable data exists.
    pub mtbf: Option<f64>,
    /// Which time basis was averaged, absent when `mtbf` is absent.
    pub method: Option<MtbfMethod>,
    /// The values that entered the mean, in input order.
    pub points_used: Vec<f64>,
}

/// Estimates MTBF as the arithmetic mean of usable time values.
///
/// The operating-hours basis is preferred but requires at least 2 metered
/// values; a single point carries too little statistical weight for the
/// hour meter to override day data. TBF days require only 1. When neither
/// basis has enough data the estimate is empty.
///
/// This is the fallback tier when
/// [`fit_weibull`](super::fit_weibull) returns `None`.
///
/// # Examples
///
/// ```
/// use rcm_analytics::estimation::{estimate_mtbf, FailureRecord, MtbfMethod};
///
/// let records = vec![
///     FailureRecord::for_asset(1, 20.0),
///     FailureRecord::for_asset(1, 40.0),
/// ];
/// let est = estimate_mtbf(&records);
/// assert_eq!(est.mtbf, Some(30.0));
/// assert_eq!(est.method, Some(MtbfMethod::TbfDays));
/// ```
pub fn estimate_mtbf(records: &[FailureRecord]) -> MtbfEstimate {
    let hours: Vec<f64> = records
        .iter()
        .filter_map(|r| r.operating_hours)
        .filter(|h| h.is_finite() && *h > 0.0)
        .collect();

    if hours.len() >= 2 {
        let mean = hours.iter().sum::<f64>() / hours.len() as f64;
        return MtbfEstimate {
            mtbf: Some(mean),
            method: Some(MtbfMethod::OperatingHours),
            points_used: hours,
        };
    }

    let days: Vec<f64> = records
        .iter()
        .map(|r| r.tbf_days)
        .filter(|d| d.is_finite() && *d > 0.0)
        .collect();

    if !days.is_empty() {
        let mean = days.iter().sum::<f64>() / days.len() as f64;
        return MtbfEstimate {
            mtbf: Some(mean),
            method: Some(MtbfMethod::TbfDays),
            points_used: days,
        };
    }

    MtbfEstimate {
        mtbf: None,
        method: None,
        points_used: Vec::new(),
    }
}
