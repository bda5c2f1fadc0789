//! # Section Inertia
//!
//! Second moment of area at the two ends of the blade, a quick stiffness
//! diagnostic derived from the thickness profile.

use serde::{Deserialize, Serialize};

use crate::calculations::thickness::effective_thickness_at;
use crate::equations::rectangular_moment_of_inertia;
use crate::params::BeamParams;

/// Second moment of area at the foot and at the tip (mm⁴)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionInertia {
    pub foot_mm4: f64,
    pub tip_mm4: f64,
}

impl SectionInertia {
    /// Foot-to-tip stiffness ratio, or 0 when the tip has no stiffness
    pub fn taper_ratio(&self) -> f64 {
        if self.tip_mm4 > 0.0 {
            self.foot_mm4 / self.tip_mm4
        } else {
            0.0
        }
    }
}

fn inertia_at(x_mm: f64, params: &BeamParams) -> f64 {
    let width = params.width_mm;
    let length = params.length_mm;
    let thickness = effective_thickness_at(x_mm, params);

    let usable = |value: f64| value.is_finite() && value > 0.0;
    if !usable(width) || !usable(length) || !usable(thickness) {
        return 0.0;
    }
    let inertia = rectangular_moment_of_inertia(width, thickness);
    if inertia.is_finite() {
        inertia
    } else {
        0.0
    }
}

/// Second moment of area at `x = 0` and `x = L`.
///
/// Accepts `&BeamParams` or `None`; without parameters both values are zero,
/// as is either value whose width, length or thickness is unusable.
///
/// # Example
///
/// ```rust
/// use fin_core::calculations::inertia::compute_section_inertia;
/// use fin_core::params::BeamParams;
///
/// let params = BeamParams::default();
/// let inertia = compute_section_inertia(&params);
/// assert!(inertia.foot_mm4 > inertia.tip_mm4);
///
/// assert_eq!(compute_section_inertia(None).foot_mm4, 0.0);
/// ```
pub fn compute_section_inertia<'a>(params: impl Into<Option<&'a BeamParams>>) -> SectionInertia {
    let Some(params) = params.into() else {
        return SectionInertia::default();
    };

    SectionInertia {
        foot_mm4: inertia_at(0.0, params),
        tip_mm4: inertia_at(params.length_mm, params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_blade() {
        let inertia = compute_section_inertia(&BeamParams::default());
        // 180 * 1.4³ / 12 and 180 * 0.7³ / 12
        assert_relative_eq!(inertia.foot_mm4, 41.16, max_relative = 1e-9);
        assert_relative_eq!(inertia.tip_mm4, 5.145, max_relative = 1e-9);
        assert_relative_eq!(inertia.taper_ratio(), 8.0, max_relative = 1e-9);
    }

    #[test]
    fn test_foot_at_least_tip() {
        for (foot, tip) in [(1, 1), (3, 1), (6, 2), (10, 9)] {
            let params = BeamParams {
                layers_foot: foot,
                layers_tip: tip,
                ..BeamParams::default()
            };
            let inertia = compute_section_inertia(&params);
            assert!(inertia.foot_mm4 >= inertia.tip_mm4);
            assert!(inertia.tip_mm4 > 0.0);
        }
    }

    #[test]
    fn test_missing_params() {
        assert_eq!(compute_section_inertia(None), SectionInertia::default());
    }

    #[test]
    fn test_degenerate_geometry_is_zero() {
        let params = BeamParams {
            width_mm: f64::NAN,
            ..BeamParams::default()
        };
        assert_eq!(compute_section_inertia(&params), SectionInertia::default());

        let params = BeamParams {
            length_mm: 0.0,
            ..BeamParams::default()
        };
        assert_eq!(compute_section_inertia(&params), SectionInertia::default());

        let params = BeamParams {
            layers_tip: 0,
            ..BeamParams::default()
        };
        let inertia = compute_section_inertia(&params);
        assert!(inertia.foot_mm4 > 0.0);
        assert_eq!(inertia.tip_mm4, 0.0);
        assert_eq!(inertia.taper_ratio(), 0.0);
    }
}
