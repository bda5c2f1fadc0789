//! # Load Solver
//!
//! Finds the tip load that bends the blade to a target tip angle.
//!
//! The search runs in two phases:
//!
//! 1. **Bracket expansion** - starting from `[0, initial_upper_bound]`, the upper
//!    bound is doubled (and the lower bound moved up to the old upper bound)
//!    while the tip angle at the upper bound is still short of the target.
//! 2. **Bisection** - the bracket is halved until the midpoint angle is within
//!    tolerance of the target.
//!
//! Both phases are bounded by `max_iterations`. Running out of iterations is not
//! an error: the solver returns its best estimate and reports the outcome in
//! [`LoadSolution::status`]. Bisection relies on the tip angle being
//! non-decreasing in load, which holds for a fixed blade geometry.
//!
//! ## Example
//!
//! ```rust
//! use fin_core::calculations::solver::{solve, SolverOptions};
//! use fin_core::params::BeamParams;
//!
//! let solution = solve(&BeamParams::default(), &SolverOptions::default());
//! assert!(solution.converged());
//! assert!((solution.tip_angle_deg - 90.0).abs() <= 0.1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::calculations::profile::{compute_tip_angle, ProfileOptions};
use crate::errors::{FinError, FinResult};
use crate::params::BeamParams;

/// Options for [`solve`] and [`solve_for_load`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverOptions {
    /// Tip angle to reach (degrees)
    pub target_angle_deg: f64,

    /// Accepted distance from the target angle (degrees)
    pub tolerance_deg: f64,

    /// Limit on bracket doublings and, separately, on bisection steps
    pub max_iterations: u32,

    /// First upper bound tried for the load (N)
    pub initial_upper_bound_n: f64,

    /// Sampling used for every tip angle evaluation
    pub profile: ProfileOptions,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            target_angle_deg: 90.0,
            tolerance_deg: 0.1,
            max_iterations: 40,
            initial_upper_bound_n: 100.0,
            profile: ProfileOptions::default(),
        }
    }
}

impl SolverOptions {
    /// Options that aim for `target_angle_deg` with all other values at their defaults
    pub fn targeting(target_angle_deg: f64) -> Self {
        SolverOptions {
            target_angle_deg,
            ..SolverOptions::default()
        }
    }

    /// Strictly validate the options.
    ///
    /// [`solve`] runs with any options; this is for callers that want to
    /// reject nonsensical ones before solving.
    pub fn validate(&self) -> FinResult<()> {
        if !self.target_angle_deg.is_finite() {
            return Err(FinError::invalid_input(
                "target_angle_deg",
                self.target_angle_deg.to_string(),
                "Target angle must be finite",
            ));
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg < 0.0 {
            return Err(FinError::invalid_input(
                "tolerance_deg",
                self.tolerance_deg.to_string(),
                "Tolerance must be zero or positive",
            ));
        }
        if !self.initial_upper_bound_n.is_finite() || self.initial_upper_bound_n <= 0.0 {
            return Err(FinError::invalid_input(
                "initial_upper_bound_n",
                self.initial_upper_bound_n.to_string(),
                "Initial upper bound must be positive",
            ));
        }
        ProfileOptions::try_with_segments(self.profile.segments)?;
        Ok(())
    }
}

/// How the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// A bisection midpoint landed within tolerance of the target
    Converged,

    /// The upper bound never reached the target; the load is the last upper bound tried
    BracketExhausted,

    /// Bisection ran out of steps; the load is the last midpoint evaluated
    IterationsExhausted,
}

/// Result of a load solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSolution {
    /// Tip load found (N)
    pub load_n: f64,

    /// Tip angle at `load_n` (degrees)
    pub tip_angle_deg: f64,

    /// Number of times the upper bound was doubled
    pub expansions: u32,

    /// Number of bisection steps evaluated
    pub iterations: u32,

    /// How the search ended
    pub status: SolveStatus,
}

impl LoadSolution {
    /// Whether the tip angle at `load_n` is within tolerance of the target
    pub fn converged(&self) -> bool {
        self.status == SolveStatus::Converged
    }
}

/// Solve for the tip load that produces the target tip angle.
pub fn solve(params: &BeamParams, options: &SolverOptions) -> LoadSolution {
    let target = options.target_angle_deg;
    let profile = &options.profile;

    let mut lower = 0.0;
    let mut upper = options.initial_upper_bound_n;
    let mut angle_at_upper = compute_tip_angle(upper, params, profile);
    let mut expansions = 0;

    while angle_at_upper < target && expansions < options.max_iterations {
        lower = upper;
        upper *= 2.0;
        angle_at_upper = compute_tip_angle(upper, params, profile);
        expansions += 1;
        debug!(expansions, upper_n = upper, angle_deg = angle_at_upper, "Expanded load bracket");
    }

    if angle_at_upper < target {
        warn!(
            target_deg = target,
            upper_n = upper,
            angle_deg = angle_at_upper,
            expansions,
            "Load bracket never reached the target angle; returning last upper bound"
        );
        return LoadSolution {
            load_n: upper,
            tip_angle_deg: angle_at_upper,
            expansions,
            iterations: 0,
            status: SolveStatus::BracketExhausted,
        };
    }

    debug!(lower_n = lower, upper_n = upper, "Bracketed target angle");

    let mut solution = LoadSolution {
        load_n: upper,
        tip_angle_deg: angle_at_upper,
        expansions,
        iterations: 0,
        status: SolveStatus::IterationsExhausted,
    };

    for iteration in 1..=options.max_iterations {
        let mid = (lower + upper) / 2.0;
        let angle = compute_tip_angle(mid, params, profile);
        solution.load_n = mid;
        solution.tip_angle_deg = angle;
        solution.iterations = iteration;

        if (angle - target).abs() <= options.tolerance_deg {
            solution.status = SolveStatus::Converged;
            break;
        }

        if angle < target {
            lower = mid;
        } else {
            upper = mid;
        }
    }

    match solution.status {
        SolveStatus::Converged => info!(
            load_n = solution.load_n,
            angle_deg = solution.tip_angle_deg,
            iterations = solution.iterations,
            "Solved tip load"
        ),
        _ => warn!(
            load_n = solution.load_n,
            angle_deg = solution.tip_angle_deg,
            target_deg = target,
            "Bisection did not reach tolerance; returning last midpoint"
        ),
    }

    solution
}

/// Tip load (N) that produces the target tip angle.
///
/// Numerically identical to `solve(params, options).load_n`.
pub fn solve_for_load(params: &BeamParams, options: &SolverOptions) -> f64 {
    solve(params, options).load_n
}
