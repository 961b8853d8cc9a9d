//! Parameter estimation from raw failure records.
//!
//! The estimation engine turns an unordered batch of [`FailureRecord`]s into
//! Weibull parameters, degrading gracefully as data thins out:
//!
//! 1. [`fit_weibull`] — median rank regression, needs ≥ 3 usable records
//! 2. [`estimate_mtbf`] — plain arithmetic mean when regression is infeasible
//!    (≥ 2 metered operating-hours values, or ≥ 1 TBF-day value)
//! 3. No usable records — [`MtbfEstimate::mtbf`] is `None`; analysis is
//!    impossible and callers must say so rather than defaulting to 0
//!
//! [`fit_weibull_mle`] offers a maximum-likelihood cross-check of the
//! regression fit over the same batch. [`mechanism_frequencies`] summarizes
//! the categorical mechanism field.
//!
//! # References
//!
//! - Abernethy, R.B. (2006). *The New Weibull Handbook*, 5th ed.
//! - Lawless (2003). *Statistical Models and Methods for Lifetime Data*, 2nd ed.

mod fit;
mod mechanisms;
mod mle;
mod mtbf;
mod records;

pub use fit::{fit_weibull, FitPoint, WeibullFit};
pub use mechanisms::mechanism_frequencies;
pub use mle::{fit_weibull_mle, WeibullMleFit};
pub use mtbf::{estimate_mtbf, MtbfEstimate, MtbfMethod};
pub use records::{FailureRecord, RecordScope};
