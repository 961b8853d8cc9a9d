//! Two-parameter Weibull distribution model.
//!
//! Reliability function, hazard rate, cumulative failure probability,
//! inverse CDF, MTBF, B-life, and failure-pattern classification from
//! shape (beta) and scale (eta) parameters.

use serde::{Deserialize, Serialize};

use crate::special::gamma;

/// Failure pattern implied by the Weibull shape parameter.
///
/// The boundaries form a ±5% tolerance band around the theoretical β = 1
/// (exponential) case, so noisy fits close to 1 classify as random rather
/// than flipping between early-life and wear-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePattern {
    /// β < 0.95 — decreasing hazard rate (infant mortality).
    EarlyLife,
    /// 0.95 ≤ β ≤ 1.05 — approximately constant hazard rate.
    Random,
    /// β > 1.05 — increasing hazard rate (wear-out).
    WearOut,
}

impl FailurePattern {
    /// Classifies a shape parameter into a failure pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use rcm_analytics::weibull::FailurePattern;
    ///
    /// assert_eq!(FailurePattern::classify(0.7), FailurePattern::EarlyLife);
    /// assert_eq!(FailurePattern::classify(1.0), FailurePattern::Random);
    /// assert_eq!(FailurePattern::classify(2.4), FailurePattern::WearOut);
    /// ```
    pub fn classify(shape: f64) -> Self {
        if shape < 0.95 {
            FailurePattern::EarlyLife
        } else if shape <= 1.05 {
            FailurePattern::Random
        } else {
            FailurePattern::WearOut
        }
    }
}

/// A two-parameter Weibull distribution.
///
/// Given shape beta > 0 and scale eta > 0:
/// - Reliability: R(t) = exp(-(t/eta)^beta)
/// - Hazard rate: lambda(t) = (beta/eta) * (t/eta)^(beta-1)
/// - MTBF: eta * Gamma(1 + 1/beta)
///
/// All methods are total over t ≥ 0 with one documented IEEE edge: the hazard
/// rate at t = 0 with beta < 1 evaluates to `+∞` (the formula is applied
/// directly, matching the mathematical limit; callers sampling curves from
/// t = 0 should expect it).
///
/// # Examples
///
/// ```
/// use rcm_analytics::weibull::WeibullDistribution;
///
/// let dist = WeibullDistribution::new(2.0, 1000.0).unwrap();
/// assert!((dist.reliability(0.0) - 1.0).abs() < 1e-12);
/// assert!((dist.reliability(1000.0) - (-1.0f64).exp()).abs() < 1e-12);
/// assert!(dist.mtbf() > 0.0);
/// ```
///
/// # Reference
/// Meeker & Escobar (1998), *Statistical Methods for Reliability Data*, Wiley.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeibullDistribution {
    shape: f64,
    scale: f64,
}

impl WeibullDistribution {
    /// Creates a distribution from shape (beta) and scale (eta) parameters.
    ///
    /// Returns `None` if either parameter is non-positive or non-finite.
    pub fn new(shape: f64, scale: f64) -> Option<Self> {
        if !shape.is_finite() || !scale.is_finite() || shape <= 0.0 || scale <= 0.0 {
            return None;
        }
        Some(Self { shape, scale })
    }

    /// Returns the shape parameter (beta).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Returns the scale parameter (eta).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Reliability (survival) function at time t ≥ 0.
    ///
    /// ```text
    /// R(t) = exp(-(t/eta)^beta)
    /// ```
    ///
    /// R(0) = 1 and R is monotonically non-increasing.
    pub fn reliability(&self, t: f64) -> f64 {
        (-(t / self.scale).powf(self.shape)).exp()
    }

    /// Cumulative failure probability at time t ≥ 0.
    ///
    /// ```text
    /// F(t) = 1 - R(t)
    /// ```
    ///
    /// `reliability(t) + failure_probability(t) == 1` for all valid t.
    pub fn failure_probability(&self, t: f64) -> f64 {
        1.0 - self.reliability(t)
    }

    /// Failure rate (hazard function) at time t ≥ 0.
    ///
    /// ```text
    /// lambda(t) = (beta/eta) * (t/eta)^(beta-1)
    /// ```
    ///
    /// - beta < 1: decreasing hazard; `failure_rate(0.0)` is `+∞`
    /// - beta = 1: constant hazard `1/eta`
    /// - beta > 1: increasing hazard, 0 at t = 0
    pub fn failure_rate(&self, t: f64) -> f64 {
        (self.shape / self.scale) * (t / self.scale).powf(self.shape - 1.0)
    }

    /// Mean Time Between Failures.
    ///
    /// ```text
    /// MTBF = eta * Gamma(1 + 1/beta)
    /// ```
    ///
    /// For beta = 1 this equals eta, since Γ(2) = 1.
    pub fn mtbf(&self) -> f64 {
        self.scale * gamma(1.0 + 1.0 / self.shape)
    }

    /// Inverse CDF (quantile function) for p in [0, 1).
    ///
    /// ```text
    /// t(p) = eta * (-ln(1 - p))^(1/beta)
    /// ```
    ///
    /// Returns 0 at p = 0 and grows monotonically, diverging as p → 1. Used
    /// by the Monte Carlo simulator to draw failure times from a uniform
    /// variate.
    pub fn inverse_cdf(&self, p: f64) -> f64 {
        self.scale * (-(1.0 - p).ln()).powf(1.0 / self.shape)
    }

    /// Time at which reliability drops to level r.
    ///
    /// Solves R(t) = r:
    ///
    /// ```text
    /// t = eta * (-ln(r))^(1/beta)
    /// ```
    ///
    /// Returns `None` if r is outside (0, 1).
    pub fn time_to_reliability(&self, r: f64) -> Option<f64> {
        if r <= 0.0 || r >= 1.0 {
            return None;
        }
        Some(self.scale * (-r.ln()).powf(1.0 / self.shape))
    }

    /// B-life: time at which the given fraction of the population has failed.
    ///
    /// B10 life (10% failed) is `b_life(0.10)`, equivalent to
    /// `time_to_reliability(0.90)`.
    ///
    /// Returns `None` if `fraction_failed` is outside (0, 1).
    ///
    /// # Reference
    /// Abernethy (2006), *The New Weibull Handbook*, 5th ed., Chapter 2.
    pub fn b_life(&self, fraction_failed: f64) -> Option<f64> {
        if fraction_failed <= 0.0 || fraction_failed >= 1.0 {
            return None;
        }
        self.time_to_reliability(1.0 - fraction_failed)
    }

    /// Failure pattern implied by the shape parameter.
    pub fn failure_pattern(&self) -> FailurePattern {
        FailurePattern::classify(self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        assert!(WeibullDistribution::new(2.0, 1000.0).is_some());
    }

    #[test]
    fn test_new_invalid() {
        assert!(WeibullDistribution::new(0.0, 1000.0).is_none());
        assert!(WeibullDistribution::new(-1.0, 1000.0).is_none());
        assert!(WeibullDistribution::new(2.0, 0.0).is_none());
        assert!(WeibullDistribution::new(2.0, -5.0).is_none());
        assert!(WeibullDistribution::new(f64::NAN, 1000.0).is_none());
        assert!(WeibullDistribution::new(2.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_reliability_at_zero() {
        let dist = WeibullDistribution::new(2.0, 500.0).expect("valid parameters");
        assert!((dist.reliability(0.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_reliability_at_scale() {
        // R(eta) = exp(-1) for any shape
        for shape in [0.5, 1.0, 2.0, 3.5] {
            let dist = WeibullDistribution::new(shape, 200.0).expect("valid parameters");
            assert!(
                (dist.reliability(200.0) - (-1.0f64).exp()).abs() < 1e-12,
                "R(eta) should be exp(-1) for shape = {}",
                shape
            );
        }
    }

    #[test]
    fn test_reliability_non_increasing() {
        let dist = WeibullDistribution::new(1.8, 300.0).expect("valid parameters");
        let mut prev = 1.0;
        for i in 1..=200 {
            let r = dist.reliability(i as f64 * 5.0);
            assert!(r <= prev + 1e-15, "reliability increased at t = {}", i * 5);
            prev = r;
        }
    }

    #[test]
    fn test_complement_identity() {
        let dist = WeibullDistribution::new(2.5, 800.0).expect("valid parameters");
        for t in [0.0, 10.0, 400.0, 800.0, 5000.0] {
            let sum = dist.reliability(t) + dist.failure_probability(t);
            assert!(
                (sum - 1.0).abs() < 1e-12,
                "R + F = {} at t = {}, expected 1",
                sum,
                t
            );
        }
    }

    #[test]
    fn test_failure_rate_constant_for_exponential() {
        let dist = WeibullDistribution::new(1.0, 40.0).expect("valid parameters");
        for t in [1.0, 10.0, 40.0, 200.0] {
            assert!(
                (dist.failure_rate(t) - 1.0 / 40.0).abs() < 1e-12,
                "hazard at t = {} should be 1/eta",
                t
            );
        }
    }

    #[test]
    fn test_failure_rate_increasing_for_wear_out() {
        let dist = WeibullDistribution::new(3.0, 100.0).expect("valid parameters");
        assert!(dist.failure_rate(10.0) < dist.failure_rate(50.0));
        assert!(dist.failure_rate(50.0) < dist.failure_rate(90.0));
    }

    #[test]
    fn test_failure_rate_at_zero_edges() {
        // beta < 1: formula diverges at t = 0 (documented IEEE edge)
        let early = WeibullDistribution::new(0.5, 100.0).expect("valid parameters");
        assert!(early.failure_rate(0.0).is_infinite());

        // beta = 1: 0^0 = 1, hazard is 1/eta everywhere including t = 0
        let exp = WeibullDistribution::new(1.0, 100.0).expect("valid parameters");
        assert!((exp.failure_rate(0.0) - 0.01).abs() < 1e-15);

        // beta > 1: hazard starts at 0
        let wear = WeibullDistribution::new(2.0, 100.0).expect("valid parameters");
        assert!(wear.failure_rate(0.0).abs() < 1e-15);
    }

    #[test]
    fn test_mtbf_exponential_equals_scale() {
        let dist = WeibullDistribution::new(1.0, 750.0).expect("valid parameters");
        assert!(
            (dist.mtbf() - 750.0).abs() < 1e-8,
            "MTBF = {}, expected eta = 750 for beta = 1",
            dist.mtbf()
        );
    }

    #[test]
    fn test_mtbf_rayleigh() {
        // beta = 2, eta = 1: MTBF = Gamma(1.5) = sqrt(pi)/2
        let dist = WeibullDistribution::new(2.0, 1.0).expect("valid parameters");
        let expected = std::f64::consts::PI.sqrt() / 2.0;
        assert!((dist.mtbf() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_inverse_cdf_at_zero() {
        let dist = WeibullDistribution::new(2.0, 1000.0).expect("valid parameters");
        assert!(dist.inverse_cdf(0.0).abs() < 1e-15);
    }

    #[test]
    fn test_inverse_cdf_monotone() {
        let dist = WeibullDistribution::new(1.5, 500.0).expect("valid parameters");
        let mut prev = 0.0;
        for i in 1..100 {
            let p = i as f64 / 100.0;
            let t = dist.inverse_cdf(p);
            assert!(t > prev, "inverse CDF not increasing at p = {}", p);
            prev = t;
        }
    }

    #[test]
    fn test_inverse_cdf_roundtrip() {
        let dist = WeibullDistribution::new(2.2, 300.0).expect("valid parameters");
        for p in [0.05, 0.25, 0.5, 0.75, 0.95] {
            let t = dist.inverse_cdf(p);
            assert!(
                (dist.failure_probability(t) - p).abs() < 1e-10,
                "F(inverse_cdf({})) = {}",
                p,
                dist.failure_probability(t)
            );
        }
    }

    #[test]
    fn test_b_life_matches_reliability_target() {
        let dist = WeibullDistribution::new(2.0, 400.0).expect("valid parameters");
        let b10 = dist.b_life(0.10).expect("valid fraction");
        let t90 = dist.time_to_reliability(0.90).expect("valid level");
        assert!((b10 - t90).abs() < 1e-10);
        assert!(dist.b_life(0.0).is_none());
        assert!(dist.b_life(1.0).is_none());
    }

    #[test]
    fn test_failure_pattern_boundaries() {
        assert_eq!(FailurePattern::classify(0.94), FailurePattern::EarlyLife);
        assert_eq!(FailurePattern::classify(0.95), FailurePattern::Random);
        assert_eq!(FailurePattern::classify(1.05), FailurePattern::Random);
        assert_eq!(FailurePattern::classify(1.0500001), FailurePattern::WearOut);
    }

    #[test]
    fn test_failure_pattern_from_distribution() {
        let dist = WeibullDistribution::new(2.0, 100.0).expect("valid parameters");
        assert_eq!(dist.failure_pattern(), FailurePattern::WearOut);
    }
}
