//! # Drag Coefficient Ramp
//!
//! A bent blade segment is treated as an inclined flat plate. Its drag
//! coefficient falls linearly from the normal-plate value when the segment
//! faces the flow squarely to zero when it lies parallel to the flow.

/// Drag coefficient of a flat plate normal to the flow
pub const FLAT_PLATE_CD_MAX: f64 = 1.28;

/// Drag coefficient of a segment inclined by `tangent_angle_deg`
///
/// # Formula
/// Cd(α) = Cd_max · (1 − α/90°), with α clamped to [0°, 90°]
///
/// # Example
/// ```rust
/// use fin_core::equations::drag::{flat_plate_drag_coefficient, FLAT_PLATE_CD_MAX};
///
/// assert_eq!(flat_plate_drag_coefficient(0.0), FLAT_PLATE_CD_MAX);
/// assert_eq!(flat_plate_drag_coefficient(90.0), 0.0);
/// ```
#[inline]
pub fn flat_plate_drag_coefficient(tangent_angle_deg: f64) -> f64 {
    let angle = tangent_angle_deg.clamp(0.0, 90.0);
    FLAT_PLATE_CD_MAX * (1.0 - angle / 90.0)
}
