use serde::Serialize;

/// One vegetable-oil variety's row of sustainability metrics.
///
/// `name` doubles as the chart category key and the color key, so it must
/// stay unique and stable across renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OilRecord {
    pub name: &'static str,
    pub global_production_mt: f64,
    pub oilseed_yield_mt_per_ha: f64,
    pub area_harvested_million_ha: f64,
    pub land_use_mha_per_mt: f64,
    pub water_footprint_m3_per_tonne: f64,
    pub fertilizer_input_kg_per_ha_year: f64,
    pub labour_demand_hrs_per_ha_year: f64,
    pub labour_cost_usd_per_tonne: f64,
}

/// Fixed reference dataset, loaded once and never mutated. Row order here
/// is the canonical order for filtering and charting.
pub const REFERENCE_OILS: &[OilRecord] = &[
    OilRecord {
        name: "Palm Oil",
        global_production_mt: 78.229,
        oilseed_yield_mt_per_ha: 0.75,
        area_harvested_million_ha: 27.381,
        land_use_mha_per_mt: 0.7424,
        water_footprint_m3_per_tonne: 5000.0,
        fertilizer_input_kg_per_ha_year: 337.83,
        labour_demand_hrs_per_ha_year: 200.0,
        labour_cost_usd_per_tonne: 150.0,
    },
    OilRecord {
        name: "Soybean Oil",
        global_production_mt: 68.69,
        oilseed_yield_mt_per_ha: 2.87,
        area_harvested_million_ha: 146.54,
        land_use_mha_per_mt: 2.8701,
        water_footprint_m3_per_tonne: 4200.0,
        fertilizer_input_kg_per_ha_year: 81.94,
        labour_demand_hrs_per_ha_year: 10.0,
        labour_cost_usd_per_tonne: 50.0,
    },
    OilRecord {
        name: "Rapeseed Oil",
        global_production_mt: 33.776,
        oilseed_yield_mt_per_ha: 2.01,
        area_harvested_million_ha: 42.428,
        land_use_mha_per_mt: 2.0091,
        water_footprint_m3_per_tonne: 4300.0,
        fertilizer_input_kg_per_ha_year: 126.41,
        labour_demand_hrs_per_ha_year: 10.0,
        labour_cost_usd_per_tonne: 100.0,
    },
    OilRecord {
        name: "Sunflower Oil",
        global_production_mt: 20.384,
        oilseed_yield_mt_per_ha: 1.85,
        area_harvested_million_ha: 28.127,
        land_use_mha_per_mt: 1.8484,
        water_footprint_m3_per_tonne: 6800.0,
        fertilizer_input_kg_per_ha_year: 82.21,
        labour_demand_hrs_per_ha_year: 10.0,
        labour_cost_usd_per_tonne: 200.0,
    },
    OilRecord {
        name: "Groundnut Oil",
        global_production_mt: 6.286,
        oilseed_yield_mt_per_ha: 1.75,
        area_harvested_million_ha: 29.028,
        land_use_mha_per_mt: 1.7465,
        water_footprint_m3_per_tonne: 7500.0,
        fertilizer_input_kg_per_ha_year: 8.67,
        labour_demand_hrs_per_ha_year: 100.0,
        labour_cost_usd_per_tonne: 650.0,
    },
    OilRecord {
        name: "Cottonseed Oil",
        global_production_mt: 4.76,
        oilseed_yield_mt_per_ha: 1.39,
        area_harvested_million_ha: 30.209,
        land_use_mha_per_mt: 1.3897,
        water_footprint_m3_per_tonne: 3800.0,
        fertilizer_input_kg_per_ha_year: 184.29,
        labour_demand_hrs_per_ha_year: 150.0,
        labour_cost_usd_per_tonne: 300.0,
    },
];
