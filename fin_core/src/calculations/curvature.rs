//! # Curvature Model
//!
//! Local curvature of the blade under a tip load, using the position-dependent
//! laminate thickness for the section stiffness.

use crate::calculations::thickness::effective_thickness_at;
use crate::equations::{cantilever_point_moment, curvature_from_moment, rectangular_moment_of_inertia};
use crate::params::BeamParams;

/// Curvature at position `x_mm` under tip load `load_n` (1/mm).
///
/// κ(x) = P·(L − x) / (E·I(x)), with `E` converted from GPa to N/mm² and
/// `I(x) = b·h(x)³/12`. A section without stiffness gives zero curvature.
pub fn compute_curvature(load_n: f64, x_mm: f64, params: &BeamParams) -> f64 {
    let thickness = effective_thickness_at(x_mm, params);
    let inertia = rectangular_moment_of_inertia(params.width_mm, thickness);
    let moment = cantilever_point_moment(load_n, params.length_mm, x_mm);
    curvature_from_moment(moment, params.modulus_mpa(), inertia)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_curvature_at_foot() {
        let params = BeamParams::default();
        // P = 10 N, M = 2500 N·mm, I = 180 * 1.4³ / 12 = 41.16 mm⁴, E = 32 000 N/mm²
        let kappa = compute_curvature(10.0, 0.0, &params);
        assert_relative_eq!(kappa, 2500.0 / (32_000.0 * 41.16), max_relative = 1e-9);
    }

    #[test]
    fn test_curvature_linear_in_load() {
        let params = BeamParams::default();
        let single = compute_curvature(10.0, 120.0, &params);
        let double = compute_curvature(20.0, 120.0, &params);
        assert_relative_eq!(double, 2.0 * single, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_at_tip() {
        let params = BeamParams::default();
        assert_eq!(compute_curvature(40.0, params.length_mm, &params), 0.0);
    }

    #[test]
    fn test_zero_without_layers() {
        let params = BeamParams {
            layers_foot: 0,
            layers_tip: 0,
            ..BeamParams::default()
        };
        assert_eq!(compute_curvature(40.0, 10.0, &params), 0.0);
    }
}
