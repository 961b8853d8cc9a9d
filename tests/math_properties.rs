//! Property-based checks of the mathematical invariants.

use proptest::prelude::*;

use rcm_analytics::estimation::{fit_weibull, FailureRecord};
use rcm_analytics::special::gamma;
use rcm_analytics::weibull::WeibullDistribution;

proptest! {
    #[test]
    fn reliability_and_failure_probability_are_complements(
        shape in 0.2f64..5.0,
        scale in 1.0f64..1e4,
        t in 0.0f64..1e5,
    ) {
        let dist = WeibullDistribution::new(shape, scale).unwrap();
        let sum = dist.reliability(t) + dist.failure_probability(t);
        prop_assert!((sum - 1.0).abs() < 1e-9, "R + F = {}", sum);
    }

    #[test]
    fn reliability_starts_at_one_and_never_increases(
        shape in 0.2f64..5.0,
        scale in 1.0f64..1e4,
    ) {
        let dist = WeibullDistribution::new(shape, scale).unwrap();
        prop_assert!((dist.reliability(0.0) - 1.0).abs() < 1e-12);

        let mut prev = 1.0;
        for i in 1..=50 {
            let t = i as f64 * scale / 10.0;
            let r = dist.reliability(t);
            prop_assert!(r <= prev + 1e-12, "R increased at t = {}", t);
            prev = r;
        }
    }

    #[test]
    fn inverse_cdf_is_monotone_and_inverts_the_cdf(
        shape in 0.2f64..5.0,
        scale in 1.0f64..1e4,
        p1 in 0.001f64..0.9,
        dp in 0.001f64..0.09,
    ) {
        let dist = WeibullDistribution::new(shape, scale).unwrap();
        let p2 = p1 + dp;
        let (t1, t2) = (dist.inverse_cdf(p1), dist.inverse_cdf(p2));
        prop_assert!(t1 < t2, "inverse CDF not increasing: {} >= {}", t1, t2);
        prop_assert!((dist.failure_probability(t1) - p1).abs() < 1e-9);
    }

    #[test]
    fn mtbf_of_exponential_is_the_scale(scale in 1.0f64..1e6) {
        let dist = WeibullDistribution::new(1.0, scale).unwrap();
        prop_assert!((dist.mtbf() - scale).abs() / scale < 1e-8);
    }

    #[test]
    fn gamma_satisfies_the_recurrence(z in 0.1f64..20.0) {
        let lhs = gamma(z + 1.0);
        let rhs = z * gamma(z);
        prop_assert!(
            (lhs - rhs).abs() / rhs.abs() < 1e-8,
            "Γ(z+1) = {}, z·Γ(z) = {}", lhs, rhs
        );
    }

    #[test]
    fn fit_recovers_generating_parameters(
        shape in 0.6f64..4.0,
        scale in 10.0f64..5e3,
    ) {
        // Exact quantiles of the generating distribution: the cleanest
        // possible sample, so the fit must land close.
        let records: Vec<FailureRecord> = (1..=15)
            .map(|i| {
                let f = (i as f64 - 0.5) / 15.0;
                let t = scale * (-(1.0 - f).ln()).powf(1.0 / shape);
                FailureRecord::for_asset(1, t)
            })
            .collect();

        let fit = fit_weibull(&records, false).unwrap();
        prop_assert!(
            (fit.shape - shape).abs() / shape < 0.3,
            "fitted shape {} vs true {}", fit.shape, shape
        );
        prop_assert!(
            (fit.scale - scale).abs() / scale < 0.2,
            "fitted scale {} vs true {}", fit.scale, scale
        );
        prop_assert!(fit.r_squared > 0.9, "R² = {}", fit.r_squared);
    }
}
