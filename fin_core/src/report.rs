//! # Reports
//!
//! Presentation-ready views of a [`FinAnalysis`]:
//!
//! - [`render_summary`] - plain-text report for terminals and logs
//! - [`ApprovalPayload`] - rounded, stable JSON snapshot of a solved scenario,
//!   suitable for diffing against a stored reference
//!
//! Rounding happens only here; the calculations keep full precision.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::calculations::analysis::{analyze, AnalysisOptions, FinAnalysis};
use crate::params::BeamParams;

/// Round `value` to `digits` decimal places (half away from zero).
///
/// ```rust
/// use fin_core::report::round_to;
///
/// assert_eq!(round_to(54.123456, 2), 54.12);
/// assert_eq!(round_to(-0.00005, 4), -0.0001);
/// ```
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Scenario identification carried in an approval payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRef {
    pub id: String,
    pub description: Option<String>,
}

/// One sample of the deflected centerline, rounded for snapshots
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapePoint {
    /// Arc position from the foot, 2 decimals (mm)
    pub arc_position: f64,
    /// Horizontal coordinate, 4 decimals (mm)
    pub x: f64,
    /// Transverse coordinate, 4 decimals (mm)
    pub y: f64,
}

/// Stable snapshot of a solved scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalPayload {
    pub scenario: ScenarioRef,
    pub params: BeamParams,
    /// Solved tip load, 9 decimals (N)
    pub load: f64,
    /// Tip angle at the solved load, 9 decimals (degrees)
    pub tip_angle_deg: f64,
    /// Tip deflection at the solved load, 9 decimals (mm)
    pub tip_deflection: f64,
    pub points: Vec<ShapePoint>,
}

impl ApprovalPayload {
    /// Solve `params` with default options and build the payload.
    pub fn from_scenario(id: impl Into<String>, description: Option<String>, params: &BeamParams) -> Self {
        let analysis = analyze(params, &AnalysisOptions::default());
        Self::from_analysis(id, description, &analysis)
    }

    /// Build the payload from an existing analysis.
    pub fn from_analysis(id: impl Into<String>, description: Option<String>, analysis: &FinAnalysis) -> Self {
        let profile = &analysis.profile;
        let points = profile
            .position_mm
            .iter()
            .zip(profile.points())
            .map(|(&arc, (x, y))| ShapePoint {
                arc_position: round_to(arc, 2),
                x: round_to(x, 4),
                y: round_to(y, 4),
            })
            .collect();

        ApprovalPayload {
            scenario: ScenarioRef {
                id: id.into(),
                description,
            },
            params: analysis.params.clone(),
            load: round_to(analysis.solution.load_n, 9),
            tip_angle_deg: round_to(profile.tip_angle_deg, 9),
            tip_deflection: round_to(profile.tip_deflection_mm, 9),
            points,
        }
    }
}

/// Render a plain-text report of an analysis.
pub fn render_summary(analysis: &FinAnalysis) -> String {
    let params = &analysis.params;
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Fin blade: {} layers at foot, {} at tip, {:.0} x {:.0} mm, E = {:.1} GPa, {:.2} mm layers",
        params.layers_foot,
        params.layers_tip,
        params.length_mm,
        params.width_mm,
        params.modulus_gpa,
        params.layer_thickness_mm
    );
    let _ = writeln!(output, "{}", analysis.summary());

    if !analysis.solution.converged() {
        let _ = writeln!(
            output,
            "Warning: load search stopped without reaching tolerance ({:?})",
            analysis.solution.status
        );
    }

    let _ = writeln!(
        output,
        "Tip deflection: {:.1} mm, hardest bend at {:.1} mm from the foot",
        analysis.profile.tip_deflection_mm, analysis.max_curvature_position_mm
    );
    let _ = writeln!(
        output,
        "Section inertia: foot {:.2} mm⁴, tip {:.2} mm⁴",
        analysis.inertia.foot_mm4, analysis.inertia.tip_mm4
    );

    let lengths: Vec<String> = analysis
        .laminate
        .extra_layers
        .iter()
        .map(|layer| format!("{:.0}", layer.length_mm))
        .collect();
    if lengths.is_empty() {
        output.push_str("Extra foot layers: none\n");
    } else {
        let _ = writeln!(output, "Extra foot layers (mm): {}", lengths.join(", "));
    }

    let _ = writeln!(
        output,
        "Hydrodynamic resistance ratio: {:.3}",
        analysis.resistance_ratio
    );

    output
}
