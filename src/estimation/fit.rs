//! Median Rank Regression (MRR) over a failure record batch.
//!
//! Fits Weibull parameters by least-squares regression on the linearized
//! Weibull probability plot, without assuming a known distribution a priori.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::records::FailureRecord;

/// One plotted point of a median-rank fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitPoint {
    /// Time value that entered the regression (days or operating hours).
    pub time: f64,
    /// Bernard median rank assigned to this point.
    pub median_rank: f64,
    /// True when the time came from operating hours rather than TBF days.
    pub adjusted: bool,
}

/// Result of a median-rank regression fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeibullFit {
    /// Shape parameter (beta).
    pub shape: f64,
    /// Scale parameter (eta).
    pub scale: f64,
    /// Coefficient of determination of the probability-plot regression.
    pub r_squared: f64,
    /// The plotted points, sorted ascending by time.
    pub points: Vec<FitPoint>,
}

/// Minimum usable observations for a regression fit.
const MIN_FIT_POINTS: usize = 3;

/// Fits a Weibull distribution to a failure record batch via MRR.
///
/// The linearized Weibull CDF is:
///
/// ```text
/// ln(-ln(1 - F(t))) = beta * ln(t) - beta * ln(eta)
/// ```
///
/// so plotting y = ln(-ln(1 - F_i)) against x = ln(t_i) gives a line with
/// slope beta and intercept -beta * ln(eta). Median ranks use Bernard's
/// approximation `F_i = (i - 0.3) / (n + 0.4)`.
///
/// # Algorithm
/// 1. Select each record's usable time (operating hours when
///    `prefer_operating_hours` and metered, else TBF days); drop unusable
///    records
/// 2. Sort ascending, assign median ranks
/// 3. Ordinary least squares on the transformed coordinates
/// 4. beta = slope, eta = exp(-intercept/beta), R² from the residuals
///
/// # Returns
///
/// `None` when fewer than 3 usable observations remain, or when the data is
/// degenerate (zero regression denominator, non-positive fitted beta, or
/// zero variance in the ranks, e.g. all identical times). A `None` here is
/// the signal to fall back to [`estimate_mtbf`](super::estimate_mtbf).
///
/// # Examples
///
/// ```
/// use rcm_analytics::estimation::{fit_weibull, FailureRecord};
///
/// let records: Vec<FailureRecord> = [32.0, 67.0, 104.0, 149.0, 210.0]
///     .iter()
///     .map(|&d| FailureRecord::for_asset(1, d))
///     .collect();
///
/// let fit = fit_weibull(&records, false).unwrap();
/// assert!(fit.shape > 0.0 && fit.scale > 0.0);
/// assert!(fit.r_squared > 0.9);
/// assert_eq!(fit.points.len(), 5);
/// ```
///
/// # Reference
/// Abernethy (2006), *The New Weibull Handbook*, 5th ed.
pub fn fit_weibull(records: &[FailureRecord], prefer_operating_hours: bool) -> Option<WeibullFit> {
    let mut usable: Vec<(f64, bool)> = records
        .iter()
        .filter_map(|r| r.usable_time(prefer_operating_hours))
        .collect();

    if usable.len() < MIN_FIT_POINTS {
        debug!(
            usable = usable.len(),
            required = MIN_FIT_POINTS,
            "too few usable records for regression fit"
        );
        return None;
    }

    usable.sort_unstable_by(|a, b| a.0.partial_cmp(&b.0).expect("non-finite times filtered"));

    let n = usable.len();
    let n_f = n as f64;

    let mut points = Vec::with_capacity(n);
    let mut x_vals = Vec::with_capacity(n);
    let mut y_vals = Vec::with_capacity(n);

    for (i, &(t, adjusted)) in usable.iter().enumerate() {
        let rank = (i + 1) as f64;
        // Bernard's approximation for median ranks
        let f_i = (rank - 0.3) / (n_f + 0.4);

        let x = t.ln();
        let y = (-(1.0 - f_i).ln()).ln();
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        points.push(FitPoint {
            time: t,
            median_rank: f_i,
            adjusted,
        });
        x_vals.push(x);
        y_vals.push(y);
    }

    // Ordinary least squares: y = a + b*x
    let sum_x: f64 = x_vals.iter().sum();
    let sum_y: f64 = y_vals.iter().sum();
    let sum_xy: f64 = x_vals.iter().zip(&y_vals).map(|(x, y)| x * y).sum();
    let sum_x2: f64 = x_vals.iter().map(|x| x * x).sum();

    let denom = n_f * sum_x2 - sum_x * sum_x;
    if denom.abs() < 1e-30 {
        debug!("degenerate fit: zero regression denominator (identical times)");
        return None;
    }

    let b = (n_f * sum_xy - sum_x * sum_y) / denom;
    let a = (sum_y - b * sum_x) / n_f;

    let beta = b;
    if !beta.is_finite() || beta <= 0.0 {
        debug!(beta, "degenerate fit: non-positive slope");
        return None;
    }

    let eta = (-a / b).exp();
    if !eta.is_finite() || eta <= 0.0 {
        return None;
    }

    // R² from residuals against the fitted line
    let mean_y = sum_y / n_f;
    let ss_tot: f64 = y_vals.iter().map(|y| (y - mean_y) * (y - mean_y)).sum();
    if ss_tot.abs() < 1e-30 {
        debug!("degenerate fit: zero variance in transformed ranks");
        return None;
    }
    let ss_res: f64 = x_vals
        .iter()
        .zip(&y_vals)
        .map(|(x, y)| {
            let resid = y - (a + b * x);
            resid * resid
        })
        .sum();
    let r_squared = 1.0 - ss_res / ss_tot;

    Some(WeibullFit {
        shape: beta,
        scale: eta,
        r_squared,
        points,
    })
}
