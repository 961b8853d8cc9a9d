//! # rcm-analytics
//!
//! Weibull reliability analysis, failure-data parameter estimation,
//! maintenance interval optimization, RCM strategy selection, and Monte
//! Carlo failure-cost simulation.
//!
//! This crate is the computation core of a reliability-centered maintenance
//! (RCM) system. It is a pure function library over numeric inputs: no
//! persistence, no I/O, no shared state. Failure records are supplied by the
//! caller as an immutable batch; every public function returns a fresh result
//! structure.
//!
//! ## Modules
//!
//! - [`weibull`] — Distribution model: reliability, hazard rate, MTBF, B-life,
//!   inverse CDF, failure-pattern classification, sampled analysis curves
//! - [`estimation`] — Parameter estimation from failure records (median rank
//!   regression, MLE, plain MTBF fallback, failure-mechanism frequencies)
//! - [`maintenance`] — Maintenance interval cost model and optimizer
//! - [`rcm`] — RCM strategy decision table
//! - [`simulation`] — Monte Carlo failure-cost simulator
//! - [`special`] — Special mathematical functions (gamma)
//!
//! ## Design Philosophy
//!
//! - **Pure transformations**: No caching or cross-call state; each call
//!   recomputes from scratch
//! - **Graceful degradation**: Insufficient or degenerate data yields `None`,
//!   never a panic or a NaN-poisoned result, so callers can fall back through
//!   estimation tiers
//! - **Research-backed**: Algorithms reference the reliability engineering
//!   literature

pub mod estimation;
pub mod maintenance;
pub mod rcm;
pub mod simulation;
pub mod special;
pub mod weibull;
