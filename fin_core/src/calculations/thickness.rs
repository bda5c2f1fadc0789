//! # Thickness Profile
//!
//! Local laminate thickness along the blade. The `layers_tip` base layers run
//! the full length; each extra foot layer is present up to its end position
//! (see [`BeamParams::extra_layer_end_mm`]). The result is a step function that
//! never increases from foot to tip and is always a whole number of layers.

use crate::params::BeamParams;

/// Number of layers present at position `x_mm`
pub fn layer_count_at(x_mm: f64, params: &BeamParams) -> u32 {
    let extra_here = (1..=params.extra_layer_count())
        .filter(|&index| params.extra_layer_covers(index, x_mm))
        .count() as u32;
    params.layers_tip + extra_here
}

/// Laminate thickness at position `x_mm` (mm).
///
/// A non-positive or non-finite layer thickness yields zero.
///
/// # Example
///
/// ```rust
/// use fin_core::calculations::thickness::effective_thickness_at;
/// use fin_core::params::BeamParams;
///
/// let params = BeamParams::default();
/// // 4 layers of 0.35 mm at the foot, 2 at the tip
/// assert!((effective_thickness_at(0.0, &params) - 1.4).abs() < 1e-12);
/// assert!((effective_thickness_at(250.0, &params) - 0.7).abs() < 1e-12);
/// ```
pub fn effective_thickness_at(x_mm: f64, params: &BeamParams) -> f64 {
    let layer_thickness = params.layer_thickness_mm;
    if !layer_thickness.is_finite() || layer_thickness <= 0.0 {
        return 0.0;
    }
    f64::from(layer_count_at(x_mm, params)) * layer_thickness
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::LayerTaper;
    use approx::assert_relative_eq;

    fn stepped_params() -> BeamParams {
        BeamParams {
            length_mm: 300.0,
            layer_thickness_mm: 1.0,
            min_extra_layer_length_mm: 100.0,
            ..BeamParams::default()
        }
    }

    #[test]
    fn test_evenly_spaced_steps() {
        let params = stepped_params();
        assert_relative_eq!(effective_thickness_at(100.0, &params), 4.0, epsilon = 1e-5);
        assert_relative_eq!(effective_thickness_at(200.0, &params), 3.0, epsilon = 1e-5);
        assert_relative_eq!(effective_thickness_at(300.0, &params), 2.0, epsilon = 1e-5);
        // Past the tip only the base layers remain
        assert_relative_eq!(effective_thickness_at(350.0, &params), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_non_increasing_toward_tip() {
        for taper in [LayerTaper::Even, LayerTaper::Linear] {
            let params = BeamParams {
                layers_foot: 7,
                layers_tip: 2,
                taper,
                ..BeamParams::default()
            };
            let mut previous = effective_thickness_at(0.0, &params);
            for step in 1..=500 {
                let x = params.length_mm * f64::from(step) / 500.0;
                let current = effective_thickness_at(x, &params);
                assert!(current <= previous, "thickness grew at x = {x} ({taper:?})");
                previous = current;
            }
        }
    }

    #[test]
    fn test_whole_number_of_layers() {
        let params = BeamParams::default();
        for step in 0..=50 {
            let x = 5.0 * f64::from(step);
            let layers = effective_thickness_at(x, &params) / params.layer_thickness_mm;
            assert_relative_eq!(layers, layers.round(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_linear_taper_keeps_foot_full() {
        let params = BeamParams {
            taper: LayerTaper::Linear,
            ..stepped_params()
        };
        // Cutoffs at 180 mm and max(100, 60) = 100 mm, inclusive
        assert_eq!(layer_count_at(100.0, &params), 4);
        assert_eq!(layer_count_at(179.0, &params), 3);
        assert_eq!(layer_count_at(181.0, &params), 2);
    }

    #[test]
    fn test_tip_heavier_than_foot_has_no_extra_layers() {
        let params = BeamParams {
            layers_foot: 1,
            layers_tip: 3,
            ..stepped_params()
        };
        assert_eq!(effective_thickness_at(0.0, &params), 3.0);
    }

    #[test]
    fn test_degenerate_layer_thickness() {
        let params = BeamParams {
            layer_thickness_mm: f64::NAN,
            ..BeamParams::default()
        };
        assert_eq!(effective_thickness_at(10.0, &params), 0.0);

        let params = BeamParams {
            layer_thickness_mm: -0.35,
            ..BeamParams::default()
        };
        assert_eq!(effective_thickness_at(10.0, &params), 0.0);
    }
}
