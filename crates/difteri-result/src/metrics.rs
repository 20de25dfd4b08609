use serde::Serialize;
use ts_rs::TS;

/// Round to the nearest integer, halves going up (`2.5 → 3`, `-2.5 → -2`).
pub fn round_half_up(x: f64) -> i32 {
    (x + 0.5).floor() as i32
}

/// Confidence in `[0, 1]` as a whole percentage.
pub fn confidence_percentage(confidence: f64) -> i32 {
    round_half_up(confidence * 100.0)
}

/// Similarity of a historical case from its normalized distance.
pub fn similarity_percentage(distance: f64) -> i32 {
    round_half_up((1.0 - distance) * 100.0)
}

/// Whether the label marks an unconfirmed ("suspect") diagnosis.
pub fn is_suspect(diagnosis: &str) -> bool {
    diagnosis.to_lowercase().contains("suspect")
}

/// Display tier of a result. Not a clinical grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Suspect labels under 0.7 are `Medium` before the high-confidence
    /// check is considered.
    pub fn classify(diagnosis: &str, confidence: f64) -> Self {
        if is_suspect(diagnosis) && confidence < 0.7 {
            Severity::Medium
        } else if confidence > 0.8 {
            Severity::High
        } else {
            Severity::Low
        }
    }

    pub fn gradient(self) -> &'static str {
        match self {
            Severity::Medium => "from-yellow-500 to-orange-500",
            Severity::High => "from-red-500 to-red-600",
            Severity::Low => "from-blue-500 to-blue-600",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Medium | Severity::High => "alert-triangle",
            Severity::Low => "check-circle",
        }
    }
}
