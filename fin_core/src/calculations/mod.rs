//! # Fin Calculations
//!
//! The numeric engine, leaves first:
//!
//! - [`thickness`] - Laminate thickness along the blade
//! - [`curvature`] - Local curvature under a tip load
//! - [`profile`] - Shape integration, tip angle and tip deflection
//! - [`solver`] - Tip load for a target tip angle
//! - [`laminate`] - Physical layer layout (reporting only)
//! - [`inertia`] - Second moment of area at foot and tip
//! - [`hydrodynamics`] - Drag proxy of a bent blade
//! - [`analysis`] - All of the above for one parameter set
//!
//! Every function is a pure function of its arguments: parameters are taken by
//! shared reference and results are freshly allocated. Degenerate geometry
//! yields zero-valued results instead of errors.

pub mod analysis;
pub mod curvature;
pub mod hydrodynamics;
pub mod inertia;
pub mod laminate;
pub mod profile;
pub mod solver;
pub mod thickness;

// Re-export commonly used items
pub use analysis::{analyze, AnalysisOptions, FinAnalysis};
pub use curvature::compute_curvature;
pub use hydrodynamics::{compute_hydrodynamic_resistance, resistance_of_shape, BladeShape, ResistanceOptions};
pub use inertia::{compute_section_inertia, SectionInertia};
pub use laminate::{compute_laminate_stack, LaminateLayer, LaminateStack, LayerKind};
pub use profile::{compute_bending_profile, compute_tip_angle, BendingProfile, ProfileOptions};
pub use solver::{solve, solve_for_load, LoadSolution, SolveStatus, SolverOptions};
pub use thickness::effective_thickness_at;
