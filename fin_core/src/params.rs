//! # Beam Parameters
//!
//! [`BeamParams`] is the single input value every calculation takes. It is
//! passed by shared reference and never mutated by fin_core; callers that keep
//! a long-lived, editable parameter set should clone it or edit their own copy.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "layers_foot": 4,
//!   "layers_tip": 2,
//!   "length_mm": 250.0,
//!   "width_mm": 180.0,
//!   "modulus_gpa": 32.0,
//!   "layer_thickness_mm": 0.35,
//!   "min_extra_layer_length_mm": 50.0,
//!   "taper": "Even"
//! }
//! ```
//!
//! Missing numeric fields deserialize to zero, which the calculations treat as
//! degenerate geometry (zero thickness, zero inertia, zero resistance) rather
//! than as an error. Use [`BeamParams::validate`] for strict checking.

use serde::{Deserialize, Serialize};

use crate::errors::{FinError, FinResult};
use crate::units::{Gigapascals, Megapascals};

/// Default floor for how short a tapering extra layer may be (mm)
pub const DEFAULT_MIN_EXTRA_LAYER_LENGTH_MM: f64 = 50.0;

/// Fraction of the free length over which the [`LayerTaper::Linear`] rule tapers
pub const LINEAR_TAPER_FRACTION: f64 = 0.8;

fn default_min_extra_layer_length() -> f64 {
    DEFAULT_MIN_EXTRA_LAYER_LENGTH_MM
}

/// How the extra foot layers are cut back toward the tip.
///
/// Thickness and laminate stack always use the same rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayerTaper {
    /// Extra layer `i` of `n` ends at `min + (L - min) * i / n`, so the
    /// layers are spaced evenly between the minimum length and the tip.
    /// A layer covers positions strictly before its end.
    #[default]
    Even,

    /// Extra layer `i` of `n` ends at `L * (1 - 0.8 * i / n)`: the first 20 %
    /// of the blade always keeps full thickness. A layer covers positions up
    /// to and including its end.
    Linear,
}

/// Geometry and material of a tapered laminated cantilever blade.
///
/// The blade is clamped at the foot (`x = 0`) and loaded at the tip
/// (`x = length_mm`). `layers_tip` layers run the full length; the
/// `layers_foot - layers_tip` extra layers taper out toward the tip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamParams {
    /// Number of layers at the fixed end
    #[serde(default)]
    pub layers_foot: u32,

    /// Number of layers at the free end
    #[serde(default)]
    pub layers_tip: u32,

    /// Free length of the blade (mm)
    #[serde(default)]
    pub length_mm: f64,

    /// Blade width (mm)
    #[serde(default)]
    pub width_mm: f64,

    /// Young's modulus of the laminate (GPa)
    #[serde(default)]
    pub modulus_gpa: f64,

    /// Thickness of a single layer (mm)
    #[serde(default)]
    pub layer_thickness_mm: f64,

    /// Shortest length any extra layer may be cut to (mm)
    #[serde(default = "default_min_extra_layer_length")]
    pub min_extra_layer_length_mm: f64,

    /// Taper rule for the extra layers
    #[serde(default)]
    pub taper: LayerTaper,
}

impl Default for BeamParams {
    /// The baseline blade: 4 layers at the foot, 2 at the tip, 250 x 180 mm,
    /// E = 32 GPa, 0.35 mm layers.
    fn default() -> Self {
        BeamParams {
            layers_foot: 4,
            layers_tip: 2,
            length_mm: 250.0,
            width_mm: 180.0,
            modulus_gpa: 32.0,
            layer_thickness_mm: 0.35,
            min_extra_layer_length_mm: DEFAULT_MIN_EXTRA_LAYER_LENGTH_MM,
            taper: LayerTaper::Even,
        }
    }
}

/// Baseline parameters, as used when a calculator first loads.
pub fn compute_default_params() -> BeamParams {
    BeamParams::default()
}

impl BeamParams {
    /// Number of layers that taper out between foot and tip (never negative)
    pub fn extra_layer_count(&self) -> u32 {
        self.layers_foot.saturating_sub(self.layers_tip)
    }

    /// Young's modulus in N/mm²
    pub fn modulus_mpa(&self) -> f64 {
        Megapascals::from(Gigapascals(self.modulus_gpa)).value()
    }

    /// Free length, with non-finite and negative values read as zero
    pub(crate) fn effective_length_mm(&self) -> f64 {
        non_negative(self.length_mm)
    }

    /// Minimum extra layer length, with non-finite and negative values read as zero
    pub(crate) fn effective_min_extra_layer_length_mm(&self) -> f64 {
        non_negative(self.min_extra_layer_length_mm)
    }

    /// End position of extra layer `index` (1-based, `1..=extra_layer_count()`).
    ///
    /// Every rule clamps the result to the minimum extra layer length.
    pub fn extra_layer_end_mm(&self, index: u32) -> f64 {
        let count = self.extra_layer_count();
        if count == 0 {
            return 0.0;
        }
        let length = self.effective_length_mm();
        let min_length = self.effective_min_extra_layer_length_mm();
        let fraction = f64::from(index) / f64::from(count);

        let end = match self.taper {
            LayerTaper::Even => min_length + (length - min_length) * fraction,
            LayerTaper::Linear => length * (1.0 - fraction * LINEAR_TAPER_FRACTION),
        };
        end.max(min_length)
    }

    /// Whether extra layer `index` is present at position `x_mm`
    pub fn extra_layer_covers(&self, index: u32, x_mm: f64) -> bool {
        let end = self.extra_layer_end_mm(index);
        match self.taper {
            LayerTaper::Even => x_mm < end,
            LayerTaper::Linear => x_mm <= end,
        }
    }

    /// Strictly validate the parameters.
    ///
    /// The calculations accept any input and degrade to zero-valued results;
    /// this check is for callers that would rather reject degenerate blades
    /// up front.
    pub fn validate(&self) -> FinResult<()> {
        require_positive("length_mm", self.length_mm, "Length must be positive")?;
        require_positive("width_mm", self.width_mm, "Width must be positive")?;
        require_positive("modulus_gpa", self.modulus_gpa, "Modulus must be positive")?;
        require_positive(
            "layer_thickness_mm",
            self.layer_thickness_mm,
            "Layer thickness must be positive",
        )?;

        if !self.min_extra_layer_length_mm.is_finite() || self.min_extra_layer_length_mm < 0.0 {
            return Err(FinError::invalid_input(
                "min_extra_layer_length_mm",
                self.min_extra_layer_length_mm.to_string(),
                "Minimum extra layer length must be zero or positive",
            ));
        }
        if self.layers_tip == 0 {
            return Err(FinError::invalid_input(
                "layers_tip",
                self.layers_tip.to_string(),
                "At least one layer must run to the tip",
            ));
        }
        if self.layers_foot < self.layers_tip {
            return Err(FinError::invalid_input(
                "layers_foot",
                self.layers_foot.to_string(),
                format!(
                    "Foot must carry at least as many layers as the tip ({})",
                    self.layers_tip
                ),
            ));
        }
        Ok(())
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn require_positive(field: &str, value: f64, reason: &str) -> FinResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FinError::invalid_input(field, value.to_string(), reason))
    }
}
