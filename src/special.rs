//! Special mathematical functions.
//!
//! Provides the gamma function needed for Weibull MTBF computation.
//! Implemented in pure Rust; no external math dependency.

use std::f64::consts::PI;

/// Lanczos parameter g for the 9-term coefficient table below.
const LANCZOS_G: f64 = 7.0;

/// Lanczos coefficients (g = 7, n = 9): one leading constant plus eight
/// series terms.
const LANCZOS_COEFFS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Gamma function Γ(z) via the Lanczos approximation.
///
/// For z < 0.5 the reflection formula is applied:
///
/// ```text
/// Γ(z) = π / (sin(πz) · Γ(1 − z))
/// ```
///
/// Valid for all real z except non-positive integers (poles of Γ). Relative
/// error is on the order of 1e-7, which is more than adequate for the MTBF
/// use case where the argument is `1 + 1/β` with β > 0 (always > 1).
///
/// # Examples
///
/// ```
/// use rcm_analytics::special::gamma;
///
/// // Γ(n) = (n-1)! for positive integers
/// assert!((gamma(5.0) - 24.0).abs() < 1e-9);
///
/// // Γ(1/2) = sqrt(pi)
/// assert!((gamma(0.5) - std::f64::consts::PI.sqrt()).abs() < 1e-9);
/// ```
///
/// # Reference
/// Lanczos (1964), *SIAM Journal on Numerical Analysis* 1, pp. 86-96;
/// Press et al. (2007), *Numerical Recipes*, 3rd ed., §6.1.
pub fn gamma(z: f64) -> f64 {
    if z < 0.5 {
        return PI / ((PI * z).sin() * gamma(1.0 - z));
    }

    let z = z - 1.0;
    let mut acc = LANCZOS_COEFFS[0];
    for (i, &c) in LANCZOS_COEFFS.iter().enumerate().skip(1) {
        acc += c / (z + i as f64);
    }

    let t = z + LANCZOS_G + 0.5;
    (2.0 * PI).sqrt() * t.powf(z + 0.5) * (-t).exp() * acc
}
