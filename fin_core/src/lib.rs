//! # fin_core - Fin Blade Bending Engine
//!
//! `fin_core` models the elastic bending of a tapered, laminated cantilever
//! blade (a swim fin clamped at the foot and loaded at the tip). It answers two
//! questions: which tip load bends the blade to a given tip angle, and how much
//! hydrodynamic resistance the bent shape still offers.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take parameters by reference and return fresh results
//! - **Total**: Degenerate geometry produces zero-valued results, never panics or errors
//! - **JSON-First**: Inputs and results implement Serialize/Deserialize
//! - **Strict on request**: `validate()` methods layer explicit errors on top
//!
//! ## Quick Start
//!
//! ```rust
//! use fin_core::calculations::{analyze, AnalysisOptions};
//! use fin_core::params::BeamParams;
//!
//! let params = BeamParams::default();
//! let analysis = analyze(&params, &AnalysisOptions::default());
//!
//! println!("{}", analysis.summary());
//! let json = serde_json::to_string_pretty(&analysis).unwrap();
//! assert!(json.contains("tip_angle_deg"));
//! ```
//!
//! ## Modules
//!
//! - [`params`] - Blade geometry and material
//! - [`calculations`] - Thickness, curvature, shape, load solver, laminate, inertia, drag
//! - [`equations`] - Closed-form section, beam and drag formulas
//! - [`report`] - Text reports and snapshot payloads
//! - [`scenario`] - Named, saveable parameter sets
//! - [`file_io`] - Atomic scenario file saves and loads
//! - [`units`] - Unit wrappers used at conversion points
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod params;
pub mod report;
pub mod scenario;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    analyze, compute_bending_profile, compute_curvature, compute_hydrodynamic_resistance,
    compute_laminate_stack, compute_section_inertia, compute_tip_angle, effective_thickness_at,
    solve, solve_for_load, AnalysisOptions, BendingProfile, FinAnalysis, LaminateStack, LoadSolution,
    ProfileOptions, ResistanceOptions, SectionInertia, SolverOptions,
};
pub use errors::{FinError, FinResult};
pub use file_io::{load_params, load_scenario, save_scenario};
pub use params::{compute_default_params, BeamParams, LayerTaper};
pub use scenario::Scenario;
