//! Sampled reliability analysis curves over a time horizon.

use serde::{Deserialize, Serialize};

use super::distribution::WeibullDistribution;

/// Number of evenly spaced sample points per curve (inclusive of both ends).
const CURVE_POINTS: usize = 101;

/// Time unit the horizon and curves are expressed in.
///
/// The computation core is unit-agnostic; the unit is carried through so the
/// presentation layer can label axes without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnits {
    Hours,
    Days,
    Months,
    Years,
}

/// Input parameters for a sampled Weibull analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeibullParameters {
    /// Shape parameter (beta), must be > 0.
    pub shape: f64,
    /// Scale parameter (eta), must be > 0.
    pub scale: f64,
    /// Unit of the time axis.
    pub time_units: TimeUnits,
    /// Upper end of the sampled time axis, must be > 0.
    pub time_horizon: f64,
}

/// Three parallel curves sampled over `[0, time_horizon]` plus scalar MTBF.
///
/// `time[i]`, `reliability[i]`, `failure_rate[i]` and `failure_probability[i]`
/// describe the same sample point; all four vectors have equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeibullAnalysis {
    /// Sampled time points, `0, h/100, ..., h`.
    pub time: Vec<f64>,
    /// R(t) at each sample point.
    pub reliability: Vec<f64>,
    /// lambda(t) at each sample point. With shape < 1 the first entry is
    /// `+∞` (hazard formula evaluated at t = 0).
    pub failure_rate: Vec<f64>,
    /// F(t) = 1 - R(t) at each sample point.
    pub failure_probability: Vec<f64>,
    /// Mean time between failures, `eta * Gamma(1 + 1/beta)`.
    pub mtbf: f64,
    /// Unit of the time axis, echoed from the input.
    pub time_units: TimeUnits,
}

/// Samples reliability, hazard-rate, and cumulative-failure curves.
///
/// Emits 101 evenly spaced points over `[0, time_horizon]`. Returns `None`
/// when shape, scale, or horizon are non-positive or non-finite.
///
/// # Examples
///
/// ```
/// use rcm_analytics::weibull::{generate_analysis, TimeUnits, WeibullParameters};
///
/// let analysis = generate_analysis(&WeibullParameters {
///     shape: 2.0,
///     scale: 1000.0,
///     time_units: TimeUnits::Days,
///     time_horizon: 2000.0,
/// })
/// .unwrap();
///
/// assert_eq!(analysis.time.len(), 101);
/// assert!((analysis.reliability[0] - 1.0).abs() < 1e-12);
/// assert!((analysis.failure_probability[100] + analysis.reliability[100] - 1.0).abs() < 1e-12);
/// ```
pub fn generate_analysis(params: &WeibullParameters) -> Option<WeibullAnalysis> {
    let dist = WeibullDistribution::new(params.shape, params.scale)?;
    if !params.time_horizon.is_finite() || params.time_horizon <= 0.0 {
        return None;
    }

    let step = params.time_horizon / (CURVE_POINTS - 1) as f64;
    let mut time = Vec::with_capacity(CURVE_POINTS);
    let mut reliability = Vec::with_capacity(CURVE_POINTS);
    let mut failure_rate = Vec::with_capacity(CURVE_POINTS);
    let mut failure_probability = Vec::with_capacity(CURVE_POINTS);

    for i in 0..CURVE_POINTS {
        let t = i as f64 * step;
        time.push(t);
        reliability.push(dist.reliability(t));
        failure_rate.push(dist.failure_rate(t));
        failure_probability.push(dist.failure_probability(t));
    }

    Some(WeibullAnalysis {
        time,
        reliability,
        failure_rate,
        failure_probability,
        mtbf: dist.mtbf(),
        time_units: params.time_units,
    })
}
