use crate::dataset::OilRecord;
use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

/// Qualitative palette used for per-variety bar colors.
const PALETTE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

/// Deterministic color for a category name: the hash keeps a variety on
/// the same color across re-renders no matter which subset survives the
/// filter.
pub fn color_for(name: &str) -> &'static str {
    let h = xxh3_64(name.as_bytes());
    PALETTE[(h % PALETTE.len() as u64) as usize]
}

/// One bar chart, ready to serialize for the page renderer. The three
/// vectors run in parallel, one entry per surviving record, in dataset
/// order. Zero categories is a valid chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
}

impl BarChart {
    fn build(title: &str, rows: &[&OilRecord], value: impl Fn(&OilRecord) -> f64) -> Self {
        Self {
            title: title.to_string(),
            categories: rows.iter().map(|r| r.name.to_string()).collect(),
            values: rows.iter().map(|r| value(r)).collect(),
            colors: rows.iter().map(|r| color_for(r.name)).collect(),
        }
    }
}

/// Both dashboard charts, built together from one filtered subset so the
/// pair can never disagree about which rows survived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPair {
    pub production: BarChart,
    #[serde(rename = "yield")]
    pub oilseed_yield: BarChart,
}

impl ChartPair {
    pub fn from_rows(rows: &[&OilRecord]) -> Self {
        Self {
            production: BarChart::build("Global Production after Filtering", rows, |r| {
                r.global_production_mt
            }),
            oilseed_yield: BarChart::build("Yield after Filtering", rows, |r| {
                r.oilseed_yield_mt_per_ha
            }),
        }
    }
}
