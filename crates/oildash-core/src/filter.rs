use crate::dataset::OilRecord;
use crate::thresholds::Thresholds;

/// Keep the rows admitted by every threshold, preserving dataset order.
///
/// An empty result is a valid outcome and renders as charts with zero
/// categories downstream.
pub fn filter_oils<'a>(rows: &'a [OilRecord], thresholds: &Thresholds) -> Vec<&'a OilRecord> {
    rows.iter().filter(|r| thresholds.admits(r)).collect()
}
