//! # Unit Types
//!
//! Newtype wrappers for the units that cross the fin_core API. They only exist
//! at conversion points; the calculations themselves work on plain `f64` values
//! in a consistent millimeter / newton / megapascal system.
//!
//! ## Unit System
//!
//! - Force: newtons (N); mass equivalent in kilograms (kg) at standard gravity
//! - Stress / modulus: gigapascals (GPa) as entered, megapascals (MPa = N/mm²) internally
//! - Angle: degrees for reporting, radians for integration
//! - Area: square millimeters (mm²) from the geometry, square meters (m²) for drag
//!
//! ## Example
//!
//! ```rust
//! use fin_core::units::{Gigapascals, Megapascals, SqM, SqMm};
//!
//! let area: SqM = SqMm(180.0 * 250.0).into();
//! assert!((area.value() - 0.045).abs() < 1e-12);
//!
//! let modulus: Megapascals = Gigapascals(32.0).into();
//! assert_eq!(modulus.0, 32_000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Standard gravity used to express a tip load as an equivalent mass (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

impl From<SqMm> for SqM {
    fn from(sqmm: SqMm) -> Self {
        SqM(sqmm.0 / 1_000_000.0)
    }
}

// ============================================================================
// Force / Mass Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Newtons> for Kilograms {
    /// Mass that weighs this much under standard gravity
    fn from(n: Newtons) -> Self {
        Kilograms(n.0 / STANDARD_GRAVITY)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Modulus / stress in gigapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gigapascals(pub f64);

/// Modulus / stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

impl From<Gigapascals> for Megapascals {
    fn from(gpa: Gigapascals) -> Self {
        Megapascals(gpa.0 * 1000.0)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

// ============================================================================
// Raw Values
// ============================================================================

macro_rules! impl_value {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_value!(SqM);
impl_value!(Kilograms);
impl_value!(Megapascals);
impl_value!(Degrees);
impl_value!(Radians);

// Drag areas are summed segment by segment and weighted by a coefficient
impl Add for SqM {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        SqM(self.0 + rhs.0)
    }
}

impl Mul<f64> for SqM {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        SqM(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_area_conversion() {
        let area: SqM = SqMm(180.0 * 250.0).into();
        assert_relative_eq!(area.0, 0.045, epsilon = 1e-12);
    }

    #[test]
    fn test_weighted_area_sum() {
        let total = SqM(0.02) * 0.5 + SqM(0.01);
        assert_relative_eq!(total.value(), 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_newtons_to_kilograms() {
        let kg: Kilograms = Newtons(98.1).into();
        assert_relative_eq!(kg.0, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_gigapascals_to_megapascals() {
        let mpa: Megapascals = Gigapascals(32.0).into();
        assert_relative_eq!(mpa.value(), 32_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degrees_radians() {
        let rad: Radians = Degrees(90.0).into();
        assert_relative_eq!(rad.0, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        let deg: Degrees = Radians(std::f64::consts::PI).into();
        assert_relative_eq!(deg.0, 180.0, epsilon = 1e-12);
    }

    #[test]
    fn test_serialization() {
        let e = Gigapascals(32.5);
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, "32.5");

        let roundtrip: Gigapascals = serde_json::from_str(&json).unwrap();
        assert_eq!(e, roundtrip);
    }
}
