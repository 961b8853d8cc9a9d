//! Weibull distribution model and reliability analysis.
//!
//! The two-parameter Weibull distribution is the workhorse of reliability
//! engineering: its shape parameter beta distinguishes early-life, random,
//! and wear-out failure patterns, and its scale parameter eta is the
//! characteristic life (the time by which ~63.2% of units have failed).
//!
//! # Modules
//!
//! - [`WeibullDistribution`] — R(t), hazard rate, F(t), inverse CDF, MTBF, B-life
//! - [`FailurePattern`] — early-life / random / wear-out classification of beta
//! - [`generate_analysis`] — sampled curves over a time horizon
//!
//! # References
//!
//! - Abernethy, R.B. (2006). *The New Weibull Handbook*, 5th ed.
//! - Meeker & Escobar (1998). *Statistical Methods for Reliability Data*.

mod analysis;
mod distribution;

pub use analysis::{generate_analysis, TimeUnits, WeibullAnalysis, WeibullParameters};
pub use distribution::{FailurePattern, WeibullDistribution};
