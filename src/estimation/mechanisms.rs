//! Failure mechanism frequency analysis.

use std::collections::BTreeMap;

use super::records::FailureRecord;

/// Label under which records without a mechanism are grouped.
const UNKNOWN_MECHANISM: &str = "Unknown";

/// Counts how often each failure mechanism appears in the batch.
///
/// Records with no mechanism (or a blank label) are grouped under
/// `"Unknown"`. The map's key ordering is lexicographic, giving downstream
/// serialization a stable order.
///
/// # Examples
///
/// ```
/// use rcm_analytics::estimation::{mechanism_frequencies, FailureRecord};
///
/// let records = vec![
///     FailureRecord::for_asset(1, 10.0).with_mechanism("bearing wear"),
///     FailureRecord::for_asset(1, 20.0).with_mechanism("bearing wear"),
///     FailureRecord::for_asset(1, 30.0),
/// ];
/// let freq = mechanism_frequencies(&records);
/// assert_eq!(freq["bearing wear"], 2);
/// assert_eq!(freq["Unknown"], 1);
/// ```
pub fn mechanism_frequencies(records: &[FailureRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        let label = match record.mechanism.as_deref() {
            Some(m) if !m.trim().is_empty() => m,
            _ => UNKNOWN_MECHANISM,
        };
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    counts
}
