use serde::Serialize;
use ts_rs::TS;

use crate::metrics::round_half_up;

/// Slice colors, reused from the start when there are more slices.
pub const PALETTE: [&str; 5] = ["#3B82F6", "#8B5CF6", "#EF4444", "#10B981", "#F59E0B"];

/// One slice of the probability chart.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ChartSlice {
    /// Short legend key, "Top 1", "Top 2", ...
    pub name: String,
    pub full_name: String,
    /// Score as a whole percentage.
    pub value: i32,
    pub color: String,
}

pub fn chart_slices(top_scores: &[(String, f64)]) -> Vec<ChartSlice> {
    top_scores
        .iter()
        .enumerate()
        .map(|(i, (label, score))| ChartSlice {
            name: format!("Top {}", i + 1),
            full_name: label.clone(),
            value: round_half_up(score * 100.0),
            color: PALETTE[i % PALETTE.len()].to_string(),
        })
        .collect()
}
