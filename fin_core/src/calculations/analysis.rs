//! # Fin Analysis
//!
//! Runs the whole calculation chain for one parameter set: solve the tip load
//! for the target angle, integrate the shape at that load, and derive the
//! laminate stack, end inertias and hydrodynamic resistance for reporting.
//!
//! ## Example
//!
//! ```rust
//! use fin_core::calculations::analysis::{analyze, AnalysisOptions};
//! use fin_core::params::BeamParams;
//!
//! let analysis = analyze(&BeamParams::default(), &AnalysisOptions::default());
//! println!("{}", analysis.summary());
//! assert!(analysis.solution.converged());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::hydrodynamics::{resistance_of_shape, BladeShape};
use crate::calculations::inertia::{compute_section_inertia, SectionInertia};
use crate::calculations::laminate::{compute_laminate_stack, LaminateStack};
use crate::calculations::profile::{compute_bending_profile, BendingProfile};
use crate::calculations::solver::{solve, LoadSolution, SolverOptions};
use crate::params::BeamParams;
use crate::units::{Kilograms, Newtons};

/// Options for [`analyze`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Solver settings; the profile sampling is shared by every step
    pub solver: SolverOptions,
}

/// Everything computed for one parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinAnalysis {
    pub params: BeamParams,
    pub solution: LoadSolution,

    /// Tip load expressed as a mass under standard gravity (kg)
    pub load_kg: f64,

    /// Shape at the solved load
    pub profile: BendingProfile,

    /// Arc position of maximum curvature, where the blade bends hardest (mm)
    pub max_curvature_position_mm: f64,

    pub laminate: LaminateStack,
    pub inertia: SectionInertia,

    /// Resistance ratio of the blade at the solved load
    pub resistance_ratio: f64,
}

impl FinAnalysis {
    /// One-line result, e.g. `Angle at tip = 90.0°, Load at tip = 54.1 N (5.51 kg)`
    pub fn summary(&self) -> String {
        format!(
            "Angle at tip = {:.1}°, Load at tip = {:.1} N ({:.2} kg)",
            self.profile.tip_angle_deg, self.solution.load_n, self.load_kg
        )
    }
}

/// Analyze a blade. Never fails; see [`solve`] for the non-converged case.
pub fn analyze(params: &BeamParams, options: &AnalysisOptions) -> FinAnalysis {
    let solution = solve(params, &options.solver);
    let profile = compute_bending_profile(solution.load_n, params, &options.solver.profile);
    let resistance_ratio = resistance_of_shape(BladeShape::from(&profile), params);

    FinAnalysis {
        params: params.clone(),
        solution,
        load_kg: Kilograms::from(Newtons(solution.load_n)).value(),
        max_curvature_position_mm: profile.max_curvature_position_mm(),
        profile,
        laminate: compute_laminate_stack(params),
        inertia: compute_section_inertia(params),
        resistance_ratio,
    }
}
