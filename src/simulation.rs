//! Monte Carlo failure-cost simulation.
//!
//! Simulates many independent operating histories of an asset under a given
//! Weibull failure law, with or without scheduled preventive maintenance,
//! and aggregates cost and failure statistics.
//!
//! Runs are **not** seeded: results are reproducible in distribution, not
//! bit-for-bit. This is an accepted property of the public entry point;
//! deterministic callers (tests, regression fixtures) can drive
//! [`run_simulation_with`] with a seeded generator instead.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::weibull::WeibullDistribution;

/// Number of simulation runs when the caller does not specify one.
pub const DEFAULT_RUNS: usize = 1000;

/// Number of histogram bins over the time horizon.
const HISTOGRAM_BINS: usize = 20;

/// Inputs to the Monte Carlo simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Weibull shape parameter (beta), must be > 0.
    pub shape: f64,
    /// Weibull scale parameter (eta), must be > 0.
    pub scale: f64,
    /// Number of independent runs, must be > 0.
    pub runs: usize,
    /// Simulated operating horizon per run, must be > 0.
    pub time_horizon: f64,
    /// Scheduled PM interval; `None` simulates pure run-to-failure.
    pub pm_interval: Option<f64>,
    /// Cost charged per preventive maintenance action, ≥ 0.
    pub pm_cost: f64,
    /// Cost charged per failure, ≥ 0.
    pub failure_cost: f64,
}

impl SimulationParameters {
    /// Creates run-to-failure parameters with the default run count and
    /// zero costs.
    pub fn new(shape: f64, scale: f64, time_horizon: f64) -> Self {
        Self {
            shape,
            scale,
            runs: DEFAULT_RUNS,
            time_horizon,
            pm_interval: None,
            pm_cost: 0.0,
            failure_cost: 0.0,
        }
    }

    /// Sets the number of runs.
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Schedules preventive maintenance at the given interval.
    pub fn with_pm_interval(mut self, interval: f64) -> Self {
        self.pm_interval = Some(interval);
        self
    }

    /// Sets the per-event costs.
    pub fn with_costs(mut self, pm_cost: f64, failure_cost: f64) -> Self {
        self.pm_cost = pm_cost;
        self.failure_cost = failure_cost;
        self
    }
}

/// One bin of the failure-time histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Inclusive lower edge of the bin.
    pub bin_start: f64,
    /// Exclusive upper edge (the last bin also absorbs t = horizon).
    pub bin_end: f64,
    /// Failure events observed in this bin across all runs.
    pub count: usize,
}

/// Aggregated simulation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Mean total cost per run.
    pub mean_cost: f64,
    /// Mean failure count per run.
    pub mean_failures: f64,
    /// Failure times across all runs, binned over `[0, horizon]` in 20
    /// equal-width bins. Counts sum to the total failures observed.
    pub histogram: Vec<HistogramBin>,
}

/// Runs the simulation with a fresh thread-local generator.
///
/// Each run plays out one operating history: failure times are drawn
/// through the Weibull inverse CDF from uniform variates. With a PM
/// interval, the clock alternates between failure draws and PM boundaries:
/// a failure inside the window is charged and the component is restored at
/// the next boundary (PM cost charged); an uneventful window just advances
/// to the boundary. Without a PM interval, failures accumulate until the
/// horizon is exceeded.
///
/// Returns `None` when shape, scale, horizon, run count, or a provided PM
/// interval are not positive.
///
/// # Examples
///
/// ```
/// use rcm_analytics::simulation::{run_simulation, SimulationParameters};
///
/// let params = SimulationParameters::new(2.0, 1000.0, 5000.0)
///     .with_costs(0.0, 1000.0);
/// let result = run_simulation(&params).unwrap();
///
/// assert!(result.mean_failures > 0.0);
/// assert_eq!(result.histogram.len(), 20);
/// ```
pub fn run_simulation(params: &SimulationParameters) -> Option<SimulationResult> {
    run_simulation_with(params, &mut rand::rng())
}

/// Runs the simulation with a caller-supplied random generator.
///
/// Behavior is identical to [`run_simulation`]; supplying a seeded
/// generator makes the output deterministic.
pub fn run_simulation_with<R: Rng>(
    params: &SimulationParameters,
    rng: &mut R,
) -> Option<SimulationResult> {
    let dist = WeibullDistribution::new(params.shape, params.scale)?;
    if !params.time_horizon.is_finite() || params.time_horizon <= 0.0 || params.runs == 0 {
        return None;
    }
    if let Some(pm) = params.pm_interval {
        if !pm.is_finite() || pm <= 0.0 {
            return None;
        }
    }

    let horizon = params.time_horizon;
    let bin_width = horizon / HISTOGRAM_BINS as f64;
    let mut bin_counts = [0usize; HISTOGRAM_BINS];
    let mut total_cost = 0.0;
    let mut total_failures = 0usize;

    fn bin_index(t: f64, bin_width: f64) -> usize {
        ((t / bin_width) as usize).min(HISTOGRAM_BINS - 1)
    }

    for _ in 0..params.runs {
        let mut run_cost = 0.0;

        match params.pm_interval {
            Some(pm) => {
                let mut clock = 0.0;
                loop {
                    let boundary = clock + pm;
                    // The PM at the previous boundary restored the
                    // component, so the draw is relative to the clock.
                    let failure_at = clock + dist.inverse_cdf(rng.random::<f64>());
                    if failure_at < boundary && failure_at <= horizon {
                        total_failures += 1;
                        run_cost += params.failure_cost;
                        bin_counts[bin_index(failure_at, bin_width)] += 1;
                    }
                    if boundary >= horizon {
                        // Final partial window: no further PM is performed.
                        break;
                    }
                    clock = boundary;
                    run_cost += params.pm_cost;
                }
            }
            None => {
                let mut clock = 0.0;
                loop {
                    clock += dist.inverse_cdf(rng.random::<f64>());
                    if clock > horizon {
                        break;
                    }
                    total_failures += 1;
                    run_cost += params.failure_cost;
                    bin_counts[bin_index(clock, bin_width)] += 1;
                }
            }
        }

        total_cost += run_cost;
    }

    let histogram = bin_counts
        .iter()
        .enumerate()
        .map(|(i, &count)| HistogramBin {
            bin_start: i as f64 * bin_width,
            bin_end: (i + 1) as f64 * bin_width,
            count,
        })
        .collect();

    let runs_f = params.runs as f64;
    Some(SimulationResult {
        mean_cost: total_cost / runs_f,
        mean_failures: total_failures as f64 / runs_f,
        histogram,
    })
}
