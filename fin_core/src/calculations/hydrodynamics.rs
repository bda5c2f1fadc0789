//! # Hydrodynamic Resistance
//!
//! Dimensionless drag proxy for a bent blade moving through water, relative to
//! a rigid reference blade.
//!
//! Each segment of the deflected shape is treated as an inclined flat plate of
//! area `width × segment length`. With `α` the segment's tangent angle
//! (clamped to [0°, 90°]) and `90° − α` its angle to the flow, a segment
//! contributes
//!
//! ```text
//! Cd(α) · sin(90° − α) · A,     Cd(α) = 1.28 · (1 − α/90°)
//! ```
//!
//! Segments bent to 90° or beyond lie along the flow and contribute nothing.
//! The sum is divided by the normal-plate force of a 0.015 m² reference blade
//! (`1.28 × 0.015 m²`), so an unloaded blade scores its own area over 0.015 m².
//!
//! ## Example
//!
//! ```rust
//! use fin_core::calculations::hydrodynamics::{compute_hydrodynamic_resistance, ResistanceOptions};
//! use fin_core::params::BeamParams;
//!
//! let params = BeamParams::default();
//! let relaxed = compute_hydrodynamic_resistance(0.0, &params, &ResistanceOptions::default());
//! let loaded = compute_hydrodynamic_resistance(80.0, &params, &ResistanceOptions::default());
//!
//! // 0.18 m × 0.25 m = 0.045 m², three times the reference area
//! assert!((relaxed - 3.0).abs() < 1e-6);
//! assert!(loaded < relaxed);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::profile::{compute_bending_profile, BendingProfile, ProfileOptions};
use crate::equations::{flat_plate_drag_coefficient, rectangular_area, FLAT_PLATE_CD_MAX};
use crate::params::BeamParams;
use crate::units::{Degrees, Radians, SqM, SqMm};

/// Plan area of the reference blade (m²)
pub const REFERENCE_BLADE_AREA_M2: f64 = 0.015;

/// Options for [`compute_hydrodynamic_resistance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResistanceOptions {
    /// Sampling used when the shape has to be computed
    pub profile: ProfileOptions,
}

/// Sampled blade shape for the drag estimate.
///
/// Only arc positions and tangent angles are needed. When `position_mm` does
/// not line up with `angle_rad` the segments are taken as equal slices of the
/// free length.
#[derive(Debug, Clone, Copy)]
pub struct BladeShape<'a> {
    pub position_mm: &'a [f64],
    pub angle_rad: &'a [f64],
}

impl<'a> From<&'a BendingProfile> for BladeShape<'a> {
    fn from(profile: &'a BendingProfile) -> Self {
        BladeShape {
            position_mm: &profile.position_mm,
            angle_rad: &profile.angle_rad,
        }
    }
}

/// Resistance ratio of the blade under tip load `load_n`.
///
/// Computes the bending profile first; use [`resistance_of_shape`] to reuse
/// a profile that is already available.
pub fn compute_hydrodynamic_resistance(load_n: f64, params: &BeamParams, options: &ResistanceOptions) -> f64 {
    let profile = compute_bending_profile(load_n, params, &options.profile);
    resistance_of_shape(BladeShape::from(&profile), params)
}

/// Resistance ratio of a precomputed shape.
///
/// Degenerate geometry (unusable width or length, fewer than two samples) and
/// non-finite totals give 0.
pub fn resistance_of_shape(shape: BladeShape<'_>, params: &BeamParams) -> f64 {
    let width_mm = params.width_mm;
    let length_mm = params.length_mm;
    let samples = shape.angle_rad.len();

    let usable = |value: f64| value.is_finite() && value > 0.0;
    if !usable(width_mm) || !usable(length_mm) || samples < 2 {
        return 0.0;
    }

    let has_positions = shape.position_mm.len() == samples;
    let uniform_step_mm = length_mm / (samples - 1) as f64;

    let mut projected = SqM::default();
    for i in 1..samples {
        let segment_mm = if has_positions {
            (shape.position_mm[i] - shape.position_mm[i - 1]).abs()
        } else {
            uniform_step_mm
        };
        let segment_mm = if segment_mm.is_finite() { segment_mm } else { uniform_step_mm };
        let area = SqM::from(SqMm(rectangular_area(width_mm, segment_mm)));

        let tangent_deg = Degrees::from(Radians(shape.angle_rad[i].abs())).value();
        if !tangent_deg.is_finite() || tangent_deg >= 90.0 {
            continue;
        }
        let angle_to_flow_deg = 90.0 - tangent_deg;
        if angle_to_flow_deg <= 0.0 {
            continue;
        }

        let sin_to_flow = Radians::from(Degrees(angle_to_flow_deg)).value().sin();
        projected = projected + area * (flat_plate_drag_coefficient(tangent_deg) * sin_to_flow);
    }

    let ratio = projected.value() / (FLAT_PLATE_CD_MAX * REFERENCE_BLADE_AREA_M2);
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}
