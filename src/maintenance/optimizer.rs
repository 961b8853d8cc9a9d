//! Maintenance interval optimization.
//!
//! Chooses a preventive maintenance interval (possibly "never", i.e.
//! run-to-failure) from the Weibull failure pattern, the cost structure,
//! and the operational downtime tolerance.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cost::{analytic_optimal_interval, cost_curve, interval_cost, CostCurvePoint};
use crate::weibull::WeibullDistribution;

/// Default reliability target for the reliability-threshold alternative.
const DEFAULT_TARGET_RELIABILITY: f64 = 0.9;

/// Inputs to the interval optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceOptimizationParams {
    /// Weibull shape parameter (beta), must be > 0.
    pub shape: f64,
    /// Weibull scale parameter (eta), must be > 0.
    pub scale: f64,
    /// Cost of one preventive maintenance action, ≥ 0.
    pub pm_cost: f64,
    /// Cost of one corrective (failure) repair, ≥ 0.
    pub failure_cost: f64,
    /// Reliability target for the threshold-based alternative, in (0, 1).
    pub target_reliability: f64,
    /// Maximum downtime the operation tolerates per failure, in hours.
    /// Zero means no unplanned downtime is acceptable at all.
    pub max_acceptable_downtime: f64,
    /// Planning horizon the costs are accumulated over.
    pub time_horizon: f64,
}

impl MaintenanceOptimizationParams {
    /// Creates parameters with an unconstrained downtime tolerance and the
    /// default 0.9 reliability target.
    pub fn new(shape: f64, scale: f64, pm_cost: f64, failure_cost: f64, time_horizon: f64) -> Self {
        Self {
            shape,
            scale,
            pm_cost,
            failure_cost,
            target_reliability: DEFAULT_TARGET_RELIABILITY,
            max_acceptable_downtime: f64::INFINITY,
            time_horizon,
        }
    }

    /// Sets the downtime tolerance in hours.
    pub fn with_max_downtime(mut self, hours: f64) -> Self {
        self.max_acceptable_downtime = hours;
        self
    }

    /// Sets the reliability target for the threshold alternative.
    pub fn with_target_reliability(mut self, target: f64) -> Self {
        self.target_reliability = target;
        self
    }
}

/// Maintenance strategy selected by the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStrategy {
    /// Scheduled preventive maintenance at the reported interval.
    PreventiveMaintenance,
    /// No scheduled intervention; repair on failure.
    RunToFailure,
}

/// Method behind an alternative interval estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlternativeMethod {
    /// Minimum of the sampled cost grid.
    CostBased,
    /// Cost grid minimum with failure cost inflated by the downtime penalty.
    ModifiedCostBased,
    /// Interval at which reliability falls to the target level.
    ReliabilityThreshold,
    /// MTBF derated by the downtime fraction of a month of operation.
    AvailabilityBased,
    /// Half of the MTBF, the conservative mandatory-PM heuristic.
    HalfMtbf,
}

/// An interval estimate produced by a method other than the selected one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlternativeEstimate {
    pub method: AlternativeMethod,
    pub interval: f64,
}

/// Supporting numbers behind an optimization result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationDetails {
    /// MTBF of the fitted distribution.
    pub mtbf: f64,
    /// Reliability at the selected interval.
    pub reliability_at_interval: f64,
    /// Failure probability at the selected interval.
    pub failure_probability_at_interval: f64,
    /// Interval estimates from the methods not selected, in method order.
    pub alternatives: Vec<AlternativeEstimate>,
}

/// Result of a maintenance interval optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceOptimization {
    /// Selected PM interval; `+∞` means run-to-failure.
    pub optimal_interval: f64,
    /// Expected total cost over the horizon at the selected interval.
    pub optimal_cost: f64,
    /// Sampled cost curve over `(0, 2η]` for plotting.
    pub cost_curve: Vec<CostCurvePoint>,
    /// Selected strategy.
    pub strategy: MaintenanceStrategy,
    /// Human-readable justification of the selected branch.
    pub reason: String,
    /// Supporting numbers.
    pub details: CalculationDetails,
}

/// Optimizes the preventive maintenance interval.
///
/// Decision branches, first match wins:
///
/// 1. **Zero downtime tolerance** — PM is mandatory regardless of the
///    failure pattern; a conservative `0.5 × MTBF` interval is used (this is
///    a heuristic, not a cost minimum).
/// 2. **Bounded downtime (≤ 24 h) with β ≤ 1** — the failure pattern alone
///    would favor run-to-failure, but the downtime bound forces PM at
///    `MTBF × max(0.6, 1 − downtime/24)`.
/// 3. **β ≤ 1, downtime unconstrained** — run-to-failure is cost-optimal:
///    interval `+∞`, cost = expected failures over the horizon × failure
///    cost.
/// 4. **β > 1** — numeric minimization over the 50-point cost grid, checked
///    against the closed-form candidate
///    [`analytic_optimal_interval`]; whichever costs less is reported.
///
/// Returns `None` when shape, scale, or horizon are not positive finite
/// numbers (upstream validation owns full range checking).
///
/// # Examples
///
/// ```
/// use rcm_analytics::maintenance::{optimize_interval, MaintenanceOptimizationParams};
///
/// let params = MaintenanceOptimizationParams::new(2.0, 1000.0, 100.0, 1000.0, 10000.0);
/// let opt = optimize_interval(&params).unwrap();
/// assert!(opt.optimal_interval.is_finite());
/// assert!(opt.optimal_cost > 0.0);
/// ```
pub fn optimize_interval(params: &MaintenanceOptimizationParams) -> Option<MaintenanceOptimization> {
    let dist = WeibullDistribution::new(params.shape, params.scale)?;
    if !params.time_horizon.is_finite() || params.time_horizon <= 0.0 {
        return None;
    }

    let mtbf = dist.mtbf();
    let downtime = params.max_acceptable_downtime;
    let curve = cost_curve(&dist, params.pm_cost, params.failure_cost, params.time_horizon);

    // Branch 1: no unplanned downtime is acceptable; PM is mandatory.
    if downtime == 0.0 {
        debug!(branch = "mandatory_pm", "zero downtime tolerance");
        let interval = 0.5 * mtbf;
        let cost = interval_cost(
            interval,
            &dist,
            params.pm_cost,
            params.failure_cost,
            params.time_horizon,
        );

        let mut alternatives = Vec::new();
        if let Some(t) = dist.time_to_reliability(0.95) {
            alternatives.push(AlternativeEstimate {
                method: AlternativeMethod::ReliabilityThreshold,
                interval: t,
            });
        }
        alternatives.push(AlternativeEstimate {
            method: AlternativeMethod::HalfMtbf,
            interval,
        });

        return Some(MaintenanceOptimization {
            optimal_interval: interval,
            optimal_cost: cost,
            cost_curve: curve,
            strategy: MaintenanceStrategy::PreventiveMaintenance,
            reason: "Zero downtime tolerance makes preventive maintenance mandatory \
                     regardless of the failure pattern; half-MTBF is used as a \
                     conservative interval."
                .to_string(),
            details: CalculationDetails {
                mtbf,
                reliability_at_interval: dist.reliability(interval),
                failure_probability_at_interval: dist.failure_probability(interval),
                alternatives,
            },
        });
    }

    // Branch 2: bounded downtime forces PM even though beta <= 1 would
    // normally favor run-to-failure.
    if downtime > 0.0 && downtime <= 24.0 && params.shape <= 1.0 {
        debug!(branch = "downtime_bounded_pm", downtime, "bounded downtime overrides run-to-failure");
        let interval = mtbf * (1.0 - downtime / 24.0).max(0.6);
        let cost = interval_cost(
            interval,
            &dist,
            params.pm_cost,
            params.failure_cost,
            params.time_horizon,
        );

        let mut alternatives = Vec::new();
        // Modified cost-based: failure cost inflated by the downtime penalty
        let inflated = params.failure_cost * (1.0 + downtime / 24.0);
        let modified_curve = cost_curve(&dist, params.pm_cost, inflated, params.time_horizon);
        if let Some(min_point) = min_cost_point(&modified_curve) {
            alternatives.push(AlternativeEstimate {
                method: AlternativeMethod::ModifiedCostBased,
                interval: min_point.interval,
            });
        }
        let target = (1.0 - downtime / 48.0).max(0.8);
        if let Some(t) = dist.time_to_reliability(target) {
            alternatives.push(AlternativeEstimate {
                method: AlternativeMethod::ReliabilityThreshold,
                interval: t,
            });
        }
        alternatives.push(AlternativeEstimate {
            method: AlternativeMethod::AvailabilityBased,
            interval: mtbf * (1.0 - downtime / 720.0),
        });

        return Some(MaintenanceOptimization {
            optimal_interval: interval,
            optimal_cost: cost,
            cost_curve: curve,
            strategy: MaintenanceStrategy::PreventiveMaintenance,
            reason: format!(
                "The failure pattern (beta = {:.2}) would favor run-to-failure, but a \
                 downtime tolerance of {:.0} h forces scheduled maintenance.",
                params.shape, downtime
            ),
            details: CalculationDetails {
                mtbf,
                reliability_at_interval: dist.reliability(interval),
                failure_probability_at_interval: dist.failure_probability(interval),
                alternatives,
            },
        });
    }

    // Branch 3: no wear-out and downtime is tolerable; run-to-failure wins.
    if params.shape <= 1.0 {
        debug!(branch = "run_to_failure", "no wear-out pattern, unconstrained downtime");
        let cost = interval_cost(
            f64::INFINITY,
            &dist,
            params.pm_cost,
            params.failure_cost,
            params.time_horizon,
        );

        return Some(MaintenanceOptimization {
            optimal_interval: f64::INFINITY,
            optimal_cost: cost,
            cost_curve: curve,
            strategy: MaintenanceStrategy::RunToFailure,
            reason: format!(
                "With beta = {:.2} the hazard rate never increases, so scheduled \
                 replacement cannot reduce failures; run-to-failure is cost-optimal.",
                params.shape
            ),
            details: CalculationDetails {
                mtbf,
                reliability_at_interval: 0.0,
                failure_probability_at_interval: 1.0,
                alternatives: Vec::new(),
            },
        });
    }

    // Branch 4: wear-out pattern; minimize cost numerically and check the
    // closed-form candidate, which the coarse grid can miss.
    debug!(branch = "cost_minimization", "wear-out pattern");
    let grid_min = min_cost_point(&curve)?;

    let analytic = analytic_optimal_interval(params.shape, params.scale);
    let analytic_cost = interval_cost(
        analytic,
        &dist,
        params.pm_cost,
        params.failure_cost,
        params.time_horizon,
    );

    let (interval, cost) = if analytic_cost < grid_min.cost {
        (analytic, analytic_cost)
    } else {
        (grid_min.interval, grid_min.cost)
    };

    let mut alternatives = vec![AlternativeEstimate {
        method: AlternativeMethod::CostBased,
        interval: grid_min.interval,
    }];
    if let Some(t) = dist.time_to_reliability(params.target_reliability) {
        alternatives.push(AlternativeEstimate {
            method: AlternativeMethod::ReliabilityThreshold,
            interval: t,
        });
    }

    Some(MaintenanceOptimization {
        optimal_interval: interval,
        optimal_cost: cost,
        cost_curve: curve,
        strategy: MaintenanceStrategy::PreventiveMaintenance,
        reason: format!(
            "Wear-out pattern (beta = {:.2}): preventive replacement at the \
             cost-minimizing interval is cheaper than running to failure.",
            params.shape
        ),
        details: CalculationDetails {
            mtbf,
            reliability_at_interval: dist.reliability(interval),
            failure_probability_at_interval: dist.failure_probability(interval),
            alternatives,
        },
    })
}

/// Lowest-cost point of a sampled curve.
fn min_cost_point(curve: &[CostCurvePoint]) -> Option<CostCurvePoint> {
    curve
        .iter()
        .copied()
        .min_by(|a, b| a.cost.partial_cmp(&b.cost).expect("finite curve costs"))
}
