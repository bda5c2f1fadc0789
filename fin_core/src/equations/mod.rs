//! # Fin Bending Equations
//!
//! Closed-form relations shared by the calculations. Keeping them here keeps
//! the integrator and the drag estimate free of inline formulas and makes each
//! one easy to check against a reference.
//!
//! ## Modules
//!
//! - [`section`] - Rectangular cross-section properties (A, I)
//! - [`beam`] - Cantilever tip-load moment and curvature
//! - [`drag`] - Flat-plate drag coefficient ramp
//!
//! ## Sign Conventions
//!
//! - **Position**: `x` measured from the clamped foot toward the free tip
//! - **Load**: positive tip load bends the blade toward positive `Y`
//! - **Angle**: tangent angle measured from the undeflected blade axis

pub mod beam;
pub mod drag;
pub mod section;

pub use beam::{cantilever_point_moment, curvature_from_moment};
pub use drag::{flat_plate_drag_coefficient, FLAT_PLATE_CD_MAX};
pub use section::{rectangular_area, rectangular_moment_of_inertia};
