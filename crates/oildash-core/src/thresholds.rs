use crate::dataset::OilRecord;
use serde::{Deserialize, Serialize};

/// Declarative description of one range-slider control. The served page
/// builds its inputs from these, and the server clamps incoming values
/// against the same bounds, so there is a single source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderSpec {
    /// Query-parameter name for this control.
    pub id: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    /// Spacing between axis mark labels.
    pub mark_every: f64,
}

/// The four threshold controls, in display order.
pub const SLIDERS: [SliderSpec; 4] = [
    SliderSpec {
        id: "water",
        label: "Max Water Footprint (m3/tonne)",
        min: 0.0,
        max: 8000.0,
        step: 100.0,
        default: 8000.0,
        mark_every: 1000.0,
    },
    SliderSpec {
        id: "fertilizer",
        label: "Max Fertilizer Input (kg/ha/year)",
        min: 0.0,
        max: 400.0,
        step: 10.0,
        default: 400.0,
        mark_every: 50.0,
    },
    SliderSpec {
        id: "labour",
        label: "Max Labour (hrs/ha/year)",
        min: 0.0,
        max: 300.0,
        step: 10.0,
        default: 300.0,
        mark_every: 50.0,
    },
    SliderSpec {
        id: "land_use",
        label: "Max Land Use (Mha/Mt)",
        min: 0.0,
        max: 4.0,
        step: 0.1,
        default: 4.0,
        mark_every: 1.0,
    },
];

/// Upper-bound cutoffs for the four filtered metrics. Every comparison is
/// inclusive, so bounds at their maxima admit the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub water: f64,
    pub fertilizer: f64,
    pub labour: f64,
    pub land_use: f64,
}

impl Default for Thresholds {
    /// Every bound at its slider maximum: the "no filter applied" state.
    fn default() -> Self {
        Self {
            water: SLIDERS[0].default,
            fertilizer: SLIDERS[1].default,
            labour: SLIDERS[2].default,
            land_use: SLIDERS[3].default,
        }
    }
}

impl Thresholds {
    /// Clamp each bound into its slider's [min, max] range. The page's
    /// controls already enforce this; the server applies it again for
    /// values arriving straight through the query string.
    pub fn clamped(self) -> Self {
        Self {
            water: self.water.clamp(SLIDERS[0].min, SLIDERS[0].max),
            fertilizer: self.fertilizer.clamp(SLIDERS[1].min, SLIDERS[1].max),
            labour: self.labour.clamp(SLIDERS[2].min, SLIDERS[2].max),
            land_use: self.land_use.clamp(SLIDERS[3].min, SLIDERS[3].max),
        }
    }

    /// Conjunction of the four inclusive upper-bound checks.
    pub fn admits(&self, record: &OilRecord) -> bool {
        record.water_footprint_m3_per_tonne <= self.water
            && record.fertilizer_input_kg_per_ha_year <= self.fertilizer
            && record.labour_demand_hrs_per_ha_year <= self.labour
            && record.land_use_mha_per_mt <= self.land_use
    }
}
