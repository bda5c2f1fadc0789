//! # Cantilever Formulas
//!
//! Euler-Bernoulli relations for a cantilever clamped at `x = 0` with a single
//! concentrated load at the free end `x = L`.
//!
//! ```text
//!    ▓
//!    ▓══════════════════════╗
//!    ▓                      ↓ P
//!    ▓ ←──────── L ───────→
//! ```

/// Bending moment at `x` from a tip load
///
/// # Formula
/// M(x) = P·(L − x)
///
/// # Arguments
/// * `p` - Tip load (N)
/// * `l` - Free length (mm)
/// * `x` - Position from the clamped end (mm)
///
/// # Returns
/// Moment in N·mm
#[inline]
pub fn cantilever_point_moment(p: f64, l: f64, x: f64) -> f64 {
    p * (l - x)
}

/// Local curvature from moment and flexural rigidity
///
/// # Formula
/// κ = M / (E·I)
///
/// A section without stiffness (non-positive or non-finite `E·I`) is given
/// zero curvature, as is any moment that does not produce a finite result.
///
/// # Arguments
/// * `moment` - Bending moment (N·mm)
/// * `modulus` - Young's modulus (N/mm²)
/// * `inertia` - Second moment of area (mm⁴)
///
/// # Returns
/// Curvature in 1/mm
#[inline]
pub fn curvature_from_moment(moment: f64, modulus: f64, inertia: f64) -> f64 {
    let rigidity = modulus * inertia;
    if !rigidity.is_finite() || rigidity <= 0.0 {
        return 0.0;
    }
    let kappa = moment / rigidity;
    if kappa.is_finite() {
        kappa
    } else {
        0.0
    }
}
