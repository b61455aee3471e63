pub mod chart;
pub mod dataset;
pub mod filter;
pub mod thresholds;

pub use chart::{BarChart, ChartPair};
pub use dataset::{OilRecord, REFERENCE_OILS};
pub use filter::filter_oils;
pub use thresholds::{SliderSpec, Thresholds, SLIDERS};
