//! # Cross-Section Property Formulas
//!
//! The blade has a solid rectangular section: width `b` across the blade and
//! laminate thickness `h` in the bending direction.

/// Cross-sectional area of a rectangle
///
/// # Formula
/// A = b × h
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Second moment of area of a rectangle about its centroidal axis
///
/// ```text
///     ┌──────────────────┐
///   h │ ════════════════ │ ← neutral axis at h/2
///     └──────────────────┘
///              b
/// ```
///
/// # Formula
/// I = b·h³/12
///
/// # Example
/// ```rust
/// use fin_core::equations::section::rectangular_moment_of_inertia;
///
/// // 180 mm wide blade, 4 layers of 0.35 mm
/// let i = rectangular_moment_of_inertia(180.0, 1.4);
/// assert!((i - 41.16).abs() < 1e-9);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangular_area() {
        assert_relative_eq!(rectangular_area(180.0, 0.7), 126.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inertia_scales_with_cube_of_thickness() {
        let thin = rectangular_moment_of_inertia(180.0, 0.7);
        let thick = rectangular_moment_of_inertia(180.0, 1.4);
        assert_relative_eq!(thick / thin, 8.0, epsilon = 1e-9);
    }
}
