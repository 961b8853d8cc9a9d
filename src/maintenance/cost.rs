//! Maintenance cost model over a planning horizon.

use serde::{Deserialize, Serialize};

use crate::weibull::WeibullDistribution;

/// One sample of the cost function; a sequence of these forms the plotted
/// cost curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostCurvePoint {
    /// Candidate PM interval.
    pub interval: f64,
    /// Total expected cost over the horizon at that interval.
    pub cost: f64,
}

/// Number of candidate intervals sampled for the cost curve.
const COST_CURVE_POINTS: usize = 50;

/// Total expected maintenance cost over a horizon at a given PM interval.
///
/// ```text
/// n_pm  = floor(horizon / interval)
/// total = n_pm * pm_cost + n_pm * F(interval) * failure_cost
/// ```
///
/// Each PM interval is treated as an independent Bernoulli trial with the
/// same per-interval failure probability: failures are assumed detected and
/// repaired promptly without extending the interval. This is an
/// approximation, not a renewal-process integral of the hazard, and is kept
/// exactly for parity with established fixture outputs.
///
/// Special cases:
/// - `interval ≤ 0` (or NaN) is invalid and costs `+∞`
/// - `interval = +∞` is pure run-to-failure:
///   `failure_cost * horizon / MTBF`
pub fn interval_cost(
    interval: f64,
    dist: &WeibullDistribution,
    pm_cost: f64,
    failure_cost: f64,
    horizon: f64,
) -> f64 {
    if interval.is_nan() || interval <= 0.0 {
        return f64::INFINITY;
    }
    if interval.is_infinite() {
        return failure_cost * (horizon / dist.mtbf());
    }

    let n_pm = (horizon / interval).floor();
    let failure_probability = dist.failure_probability(interval);
    n_pm * pm_cost + n_pm * failure_probability * failure_cost
}

/// Samples the cost function at 50 intervals linearly spaced over `(0, 2η]`.
///
/// The grid is coarse by design; the optimizer compares it against the
/// closed-form candidate so the true minimum is not missed between samples.
pub fn cost_curve(
    dist: &WeibullDistribution,
    pm_cost: f64,
    failure_cost: f64,
    horizon: f64,
) -> Vec<CostCurvePoint> {
    let step = 2.0 * dist.scale() / COST_CURVE_POINTS as f64;
    (1..=COST_CURVE_POINTS)
        .map(|i| {
            let interval = i as f64 * step;
            CostCurvePoint {
                interval,
                cost: interval_cost(interval, dist, pm_cost, failure_cost, horizon),
            }
        })
        .collect()
}

/// Closed-form near-optimal PM interval for a wear-out pattern.
///
/// ```text
/// t* = eta * (1 - 1/beta)^(1/beta)        for beta > 1
/// ```
///
/// This is the mode of the Weibull density, the point of fastest failure
/// accumulation, which the coarse cost grid can miss. For beta ≤ 1 there is
/// no interior optimum (the hazard never increases) and the function returns
/// `+∞`: run-to-failure.
///
/// # Examples
///
/// ```
/// use rcm_analytics::maintenance::analytic_optimal_interval;
///
/// let t = analytic_optimal_interval(2.0, 1000.0);
/// assert!((t - 707.1).abs() < 0.5);
///
/// assert!(analytic_optimal_interval(1.0, 1000.0).is_infinite());
/// ```
pub fn analytic_optimal_interval(shape: f64, scale: f64) -> f64 {
    if shape <= 1.0 {
        return f64::INFINITY;
    }
    scale * (1.0 - 1.0 / shape).powf(1.0 / shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(shape: f64, scale: f64) -> WeibullDistribution {
        WeibullDistribution::new(shape, scale).expect("valid parameters")
    }

    #[test]
    fn test_interval_cost_invalid_interval() {
        let d = dist(2.0, 1000.0);
        assert!(interval_cost(0.0, &d, 100.0, 1000.0, 10000.0).is_infinite());
        assert!(interval_cost(-5.0, &d, 100.0, 1000.0, 10000.0).is_infinite());
        assert!(interval_cost(f64::NAN, &d, 100.0, 1000.0, 10000.0).is_infinite());
    }

    #[test]
    fn test_interval_cost_run_to_failure() {
        let d = dist(2.0, 1000.0);
        let rtf = interval_cost(f64::INFINITY, &d, 100.0, 1000.0, 10000.0);
        let expected = 1000.0 * 10000.0 / d.mtbf();
        assert!(
            (rtf - expected).abs() < 1e-9,
            "RTF cost = {}, expected {}",
            rtf,
            expected
        );
    }

    #[test]
    fn test_interval_cost_formula() {
        let d = dist(2.0, 1000.0);
        // interval 500 over horizon 10000: 20 PM cycles
        let cost = interval_cost(500.0, &d, 100.0, 1000.0, 10000.0);
        let f = d.failure_probability(500.0);
        let expected = 20.0 * 100.0 + 20.0 * f * 1000.0;
        assert!((cost - expected).abs() < 1e-9);
    }

    #[test]
    fn test_interval_cost_zero_costs() {
        let d = dist(2.0, 1000.0);
        assert!(interval_cost(500.0, &d, 0.0, 0.0, 10000.0).abs() < 1e-12);
    }

    #[test]
    fn test_cost_curve_shape() {
        let d = dist(2.0, 1000.0);
        let curve = cost_curve(&d, 100.0, 1000.0, 10000.0);
        assert_eq!(curve.len(), 50);

        // Linear spacing over (0, 2*eta]
        assert!((curve[0].interval - 40.0).abs() < 1e-9);
        assert!((curve[49].interval - 2000.0).abs() < 1e-9);
        for w in curve.windows(2) {
            assert!(w[1].interval > w[0].interval);
            assert!((w[1].interval - w[0].interval - 40.0).abs() < 1e-9);
        }

        for p in &curve {
            assert!(p.cost.is_finite() && p.cost >= 0.0);
        }
    }

    #[test]
    fn test_analytic_optimum_fixture() {
        // beta = 2, eta = 1000: mode = 1000/sqrt(2) ≈ 707.1
        let t = analytic_optimal_interval(2.0, 1000.0);
        assert!((t - 707.10678).abs() < 0.5, "t* = {}", t);
    }

    #[test]
    fn test_analytic_optimum_no_wear_out() {
        assert!(analytic_optimal_interval(1.0, 1000.0).is_infinite());
        assert!(analytic_optimal_interval(0.7, 1000.0).is_infinite());
    }
}
