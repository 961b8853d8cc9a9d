//! Maximum likelihood estimation over a failure record batch.
//!
//! Secondary estimator: callers that want to cross-check a median-rank fit
//! can run MLE on the same batch and compare parameters.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::records::FailureRecord;

/// Result of a maximum-likelihood fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeibullMleFit {
    /// Shape parameter (beta).
    pub shape: f64,
    /// Scale parameter (eta).
    pub scale: f64,
    /// Log-likelihood at the fitted parameters.
    pub log_likelihood: f64,
    /// Newton-Raphson iterations used.
    pub iterations: usize,
}

/// Maximum Newton-Raphson iterations.
const MAX_ITER: usize = 100;

/// Convergence tolerance for Newton-Raphson.
const TOL: f64 = 1e-10;

/// Minimum usable observations, matching the regression fit tier.
const MIN_FIT_POINTS: usize = 3;

/// Fits a Weibull distribution to a failure record batch by MLE.
///
/// Uses the same usable-time selection as [`fit_weibull`](super::fit_weibull):
/// operating hours when preferred and metered, else TBF days. The shape
/// parameter solves the profile likelihood equation
///
/// ```text
/// f(beta) = n/beta + sum(ln t_i) - n * sum(t_i^beta * ln t_i) / sum(t_i^beta) = 0
/// ```
///
/// by Newton-Raphson from beta_0 = 1.2, and the scale follows analytically as
/// `eta = (sum(t_i^beta) / n)^(1/beta)`.
///
/// Returns `None` when fewer than 3 usable observations remain or the
/// iteration fails to converge.
///
/// # Reference
/// Lawless (2003), *Statistical Models and Methods for Lifetime Data*, 2nd ed.
pub fn fit_weibull_mle(
    records: &[FailureRecord],
    prefer_operating_hours: bool,
) -> Option<WeibullMleFit> {
    let times: Vec<f64> = records
        .iter()
        .filter_map(|r| r.usable_time(prefer_operating_hours))
        .map(|(t, _)| t)
        .collect();

    if times.len() < MIN_FIT_POINTS {
        debug!(
            usable = times.len(),
            required = MIN_FIT_POINTS,
            "too few usable records for MLE fit"
        );
        return None;
    }

    let n = times.len();
    let n_f = n as f64;
    let ln_t: Vec<f64> = times.iter().map(|t| t.ln()).collect();
    let sum_ln_t: f64 = ln_t.iter().sum();

    let mut beta = 1.2_f64; // initial guess slightly above exponential
    let mut iterations = 0;

    for iter in 0..MAX_ITER {
        iterations = iter + 1;

        let mut s0 = 0.0_f64;
        let mut s1 = 0.0_f64;
        let mut s2 = 0.0_f64;
        for (i, &t) in times.iter().enumerate() {
            let t_beta = t.powf(beta);
            let lt = ln_t[i];
            s0 += t_beta;
            s1 += t_beta * lt;
            s2 += t_beta * lt * lt;
        }

        if s0 == 0.0 {
            return None;
        }

        let f_val = n_f / beta + sum_ln_t - n_f * s1 / s0;
        let f_prime = -n_f / (beta * beta) - n_f * (s2 * s0 - s1 * s1) / (s0 * s0);
        if f_prime.abs() < 1e-30 {
            return None;
        }

        let delta = f_val / f_prime;
        beta -= delta;
        if beta <= 0.0 {
            beta = 0.01;
        }

        if delta.abs() < TOL {
            break;
        }
        if iter == MAX_ITER - 1 {
            debug!("MLE did not converge within {} iterations", MAX_ITER);
            return None;
        }
    }

    let s0: f64 = times.iter().map(|t| t.powf(beta)).sum();
    let eta = (s0 / n_f).powf(1.0 / beta);
    if !eta.is_finite() || eta <= 0.0 {
        return None;
    }

    let log_likelihood = n_f * beta.ln() - n_f * beta * eta.ln() + (beta - 1.0) * sum_ln_t
        - times.iter().map(|&t| (t / eta).powf(beta)).sum::<f64>();

    Some(WeibullMleFit {
        shape: beta,
        scale: eta,
        log_likelihood,
        iterations,
    })
}
