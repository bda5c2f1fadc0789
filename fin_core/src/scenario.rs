//! # Scenarios
//!
//! A [`Scenario`] is a named, saveable parameter set: a metadata header plus
//! the [`BeamParams`] and solver settings to analyze. Scenarios serialize to
//! `.fin` files as human-readable JSON (see [`file_io`](crate::file_io)).
//!
//! ## Structure
//!
//! ```text
//! Scenario
//! ├── meta: ScenarioMetadata (version, id, description, timestamps)
//! ├── params: BeamParams
//! └── solver: SolverOptions
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fin_core::params::BeamParams;
//! use fin_core::scenario::Scenario;
//!
//! let scenario = Scenario::new("stiff-blade", BeamParams { layers_foot: 6, ..BeamParams::default() })
//!     .with_description("Two extra foot layers");
//!
//! let json = serde_json::to_string_pretty(&scenario).unwrap();
//! assert!(json.contains("stiff-blade"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::analysis::{analyze, AnalysisOptions, FinAnalysis};
use crate::calculations::solver::SolverOptions;
use crate::params::BeamParams;
use crate::report::ApprovalPayload;

/// Current schema version for .fin files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Scenario metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Short identifier, e.g. "default-params"
    pub id: String,

    /// What the scenario represents
    #[serde(default)]
    pub description: Option<String>,

    /// When the scenario was created
    pub created: DateTime<Utc>,

    /// When the scenario was last modified
    pub modified: DateTime<Utc>,
}

/// A named parameter set with its solver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub meta: ScenarioMetadata,
    pub params: BeamParams,

    #[serde(default)]
    pub solver: SolverOptions,
}

impl Scenario {
    /// Create a scenario with default solver settings.
    pub fn new(id: impl Into<String>, params: BeamParams) -> Self {
        let now = Utc::now();
        Scenario {
            meta: ScenarioMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: id.into(),
                description: None,
                created: now,
                modified: now,
            },
            params,
            solver: SolverOptions::default(),
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.meta.description = Some(description.into());
        self
    }

    /// Replace the parameters and mark the scenario as modified.
    pub fn set_params(&mut self, params: BeamParams) {
        self.params = params;
        self.touch();
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Run the full analysis for this scenario.
    pub fn analyze(&self) -> FinAnalysis {
        analyze(
            &self.params,
            &AnalysisOptions {
                solver: self.solver,
            },
        )
    }

    /// Snapshot payload for this scenario.
    pub fn approval_payload(&self) -> ApprovalPayload {
        ApprovalPayload::from_analysis(
            self.meta.id.clone(),
            self.meta.description.clone(),
            &self.analyze(),
        )
    }
}

/// Built-in reference scenarios.
pub fn default_scenarios() -> Vec<Scenario> {
    vec![Scenario::new("default-params", BeamParams::default())
        .with_description("Baseline parameters used by the calculator when it loads.")]
}
