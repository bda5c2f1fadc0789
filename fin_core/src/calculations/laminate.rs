//! # Laminate Stack
//!
//! Physical layer layout that realizes the tapered thickness profile: which
//! layers run the full length and how far each extra foot layer reaches. The
//! stack does not depend on the load and is only used for reporting; the
//! bending calculations go through [`thickness`](crate::calculations::thickness)
//! using the same layer end positions.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "layers_tip": 2,
//!   "layers_foot": 4,
//!   "length_mm": 300.0,
//!   "width_mm": 180.0,
//!   "layer_thickness_mm": 1.0,
//!   "base_layers": [
//!     { "index": 1, "length_mm": 300.0, "coverage_ratio": 1.0, "kind": "tip" },
//!     { "index": 2, "length_mm": 300.0, "coverage_ratio": 1.0, "kind": "tip" }
//!   ],
//!   "extra_layers": [
//!     { "index": 1, "length_mm": 200.0, "coverage_ratio": 0.6667, "kind": "foot-extra" },
//!     { "index": 2, "length_mm": 300.0, "coverage_ratio": 1.0, "kind": "foot-extra" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::params::{BeamParams, LayerTaper};

/// Role of a layer in the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    /// Runs the full blade length
    #[serde(rename = "tip")]
    Tip,
    /// Tapers out between foot and tip
    #[serde(rename = "foot-extra")]
    FootExtra,
}

/// A single layer of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaminateLayer {
    /// 1-based position within its group
    pub index: u32,

    /// Length measured from the foot (mm)
    pub length_mm: f64,

    /// `length_mm` as a fraction of the free length (0 for a zero-length blade)
    pub coverage_ratio: f64,

    /// Whether this is a base layer or an extra foot layer
    pub kind: LayerKind,
}

/// Layer layout of a blade.
///
/// The geometry fields echo the parameters they were built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaminateStack {
    pub layers_tip: u32,
    pub layers_foot: u32,
    pub length_mm: f64,
    pub width_mm: f64,
    pub layer_thickness_mm: f64,

    /// One full-length layer per tip layer
    pub base_layers: Vec<LaminateLayer>,

    /// Extra foot layers, shortest first
    pub extra_layers: Vec<LaminateLayer>,
}

impl LaminateStack {
    /// Total number of layers in the stack
    pub fn total_layers(&self) -> usize {
        self.base_layers.len() + self.extra_layers.len()
    }

    /// Extra layer lengths in stack order (mm)
    pub fn extra_layer_lengths(&self) -> Vec<f64> {
        self.extra_layers.iter().map(|layer| layer.length_mm).collect()
    }
}

fn coverage(length_mm: f64, layer_length_mm: f64) -> f64 {
    if length_mm > 0.0 {
        layer_length_mm / length_mm
    } else {
        0.0
    }
}

/// Build the laminate stack for `params`.
///
/// Extra layers are listed in ascending length. For [`LayerTaper::Linear`],
/// where the layer rule produces descending ends, the rule's layers are
/// listed in reverse so the ordering holds for either taper.
pub fn compute_laminate_stack(params: &BeamParams) -> LaminateStack {
    let length = params.length_mm;
    let extra_count = params.extra_layer_count();

    let base_layers = (1..=params.layers_tip)
        .map(|index| LaminateLayer {
            index,
            length_mm: length,
            coverage_ratio: if length > 0.0 { 1.0 } else { 0.0 },
            kind: LayerKind::Tip,
        })
        .collect();

    let extra_layers = (1..=extra_count)
        .map(|index| {
            let rule_index = match params.taper {
                LayerTaper::Even => index,
                LayerTaper::Linear => extra_count + 1 - index,
            };
            let layer_length = params.extra_layer_end_mm(rule_index);
            LaminateLayer {
                index,
                length_mm: layer_length,
                coverage_ratio: coverage(length, layer_length),
                kind: LayerKind::FootExtra,
            }
        })
        .collect();

    LaminateStack {
        layers_tip: params.layers_tip,
        layers_foot: params.layers_foot,
        length_mm: length,
        width_mm: params.width_mm,
        layer_thickness_mm: params.layer_thickness_mm,
        base_layers,
        extra_layers,
    }
}
