//! # Bending Profile Integration
//!
//! Integrates curvature along the blade to obtain its deflected shape.
//!
//! The blade is sampled at `segments` equally spaced arc-length positions. The
//! tangent angle is accumulated with forward Euler steps
//! (`θ[i] = θ[i-1] + κ[i]·dx`) and each arc step of length `dx` is laid along
//! the current tangent (`X[i] = X[i-1] + dx·cos θ[i]`,
//! `Y[i] = Y[i-1] + dx·sin θ[i]`). Tracking the direction rather than a
//! linear deflection keeps the shape meaningful past small rotations.
//!
//! ## Example
//!
//! ```rust
//! use fin_core::calculations::profile::{compute_bending_profile, ProfileOptions};
//! use fin_core::params::BeamParams;
//!
//! let params = BeamParams::default();
//! let profile = compute_bending_profile(40.0, &params, &ProfileOptions::default());
//!
//! assert_eq!(profile.len(), 200);
//! assert!(profile.tip_angle_deg > 0.0);
//! assert!(profile.tip_deflection_mm > 0.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::curvature::compute_curvature;
use crate::errors::{FinError, FinResult};
use crate::params::BeamParams;
use crate::units::{Degrees, Radians};

/// Default number of samples along the blade
pub const DEFAULT_SEGMENTS: usize = 200;

/// Smallest sample count the integrator accepts
pub const MIN_SEGMENTS: usize = 3;

/// Sampling options for the integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileOptions {
    /// Number of samples along the blade, including both ends.
    ///
    /// Values below [`MIN_SEGMENTS`] fall back to [`DEFAULT_SEGMENTS`].
    pub segments: usize,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        ProfileOptions {
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl ProfileOptions {
    /// Options with the given sample count; too-small counts fall back to the default.
    pub fn with_segments(segments: usize) -> Self {
        ProfileOptions { segments }
    }

    /// Options with the given sample count, rejecting counts below [`MIN_SEGMENTS`].
    pub fn try_with_segments(segments: usize) -> FinResult<Self> {
        if segments < MIN_SEGMENTS {
            return Err(FinError::invalid_input(
                "segments",
                segments.to_string(),
                format!("At least {MIN_SEGMENTS} samples are required"),
            ));
        }
        Ok(ProfileOptions { segments })
    }

    /// Sample count the integrator will actually use
    pub fn segment_count(&self) -> usize {
        if self.segments >= MIN_SEGMENTS {
            self.segments
        } else {
            debug!(
                requested = self.segments,
                used = DEFAULT_SEGMENTS,
                "Segment count too small, using default"
            );
            DEFAULT_SEGMENTS
        }
    }
}

/// Deflected shape of the blade under a tip load.
///
/// All five sequences have one entry per sample and start at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingProfile {
    /// Arc-length position of each sample from the foot (mm)
    pub position_mm: Vec<f64>,

    /// Local curvature at each sample (1/mm)
    pub curvature_per_mm: Vec<f64>,

    /// Cumulative tangent angle at each sample (rad)
    pub angle_rad: Vec<f64>,

    /// Horizontal coordinate of the deflected centerline (mm)
    pub x_mm: Vec<f64>,

    /// Transverse coordinate of the deflected centerline (mm)
    pub y_mm: Vec<f64>,

    /// Tangent angle at the tip (rad)
    pub tip_angle_rad: f64,

    /// Tangent angle at the tip (degrees)
    pub tip_angle_deg: f64,

    /// Transverse tip deflection, the final `y_mm` (mm)
    pub tip_deflection_mm: f64,

    /// Index of the largest curvature; the first one wins on ties
    pub max_curvature_index: usize,
}

impl BendingProfile {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.position_mm.len()
    }

    /// Whether the profile holds no samples
    pub fn is_empty(&self) -> bool {
        self.position_mm.is_empty()
    }

    /// Arc-length position of the most strongly curved sample (mm)
    pub fn max_curvature_position_mm(&self) -> f64 {
        self.position_mm
            .get(self.max_curvature_index)
            .copied()
            .unwrap_or(0.0)
    }

    /// Deflected centerline as `(x, y)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_mm.iter().copied().zip(self.y_mm.iter().copied())
    }
}

/// Step between samples; non-finite or negative lengths integrate as zero length.
fn step_size(params: &BeamParams, segments: usize) -> f64 {
    params.effective_length_mm() / (segments - 1) as f64
}

/// Compute the full deflected shape for tip load `load_n`.
pub fn compute_bending_profile(load_n: f64, params: &BeamParams, options: &ProfileOptions) -> BendingProfile {
    let segments = options.segment_count();
    let dx = step_size(params, segments);

    let position_mm: Vec<f64> = (0..segments).map(|i| i as f64 * dx).collect();
    let curvature_per_mm: Vec<f64> = position_mm
        .iter()
        .map(|&x| compute_curvature(load_n, x, params))
        .collect();

    let mut angle_rad = vec![0.0; segments];
    let mut x_mm = vec![0.0; segments];
    let mut y_mm = vec![0.0; segments];

    for i in 1..segments {
        angle_rad[i] = angle_rad[i - 1] + curvature_per_mm[i] * dx;
        x_mm[i] = x_mm[i - 1] + dx * angle_rad[i].cos();
        y_mm[i] = y_mm[i - 1] + dx * angle_rad[i].sin();
    }

    let mut max_curvature_index = 0;
    for (i, &kappa) in curvature_per_mm.iter().enumerate().skip(1) {
        if kappa > curvature_per_mm[max_curvature_index] {
            max_curvature_index = i;
        }
    }

    let tip_angle_rad = angle_rad.last().copied().unwrap_or(0.0);
    let tip_deflection_mm = y_mm.last().copied().unwrap_or(0.0);

    BendingProfile {
        position_mm,
        curvature_per_mm,
        angle_rad,
        x_mm,
        y_mm,
        tip_angle_rad,
        tip_angle_deg: Degrees::from(Radians(tip_angle_rad)).value(),
        tip_deflection_mm,
        max_curvature_index,
    }
}

/// Tip angle (degrees) for tip load `load_n`.
///
/// Same integration as [`compute_bending_profile`] without building the shape;
/// the load solver calls this on every iteration.
pub fn compute_tip_angle(load_n: f64, params: &BeamParams, options: &ProfileOptions) -> f64 {
    let segments = options.segment_count();
    let dx = step_size(params, segments);

    let tip_angle_rad: f64 = (1..segments)
        .map(|i| compute_curvature(load_n, i as f64 * dx, params) * dx)
        .sum();

    Degrees::from(Radians(tip_angle_rad)).value()
}
