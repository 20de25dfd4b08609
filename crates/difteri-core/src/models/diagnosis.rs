use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::codes::YesNo;
use crate::fields;

/// Prediction returned by the backend's `/predict` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisResult {
    pub diagnosis: String,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// Ranked `(label, score)` pairs.
    pub top_scores: Vec<(String, f64)>,
    /// `(case index, distance)` pairs of the nearest historical cases.
    pub similar_cases: Vec<(u32, f64)>,
    #[serde(default)]
    pub similar_cases_detailed: Vec<SimilarCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimilarCase {
    pub index: u32,
    /// Normalized distance in `[0, 1]`.
    pub distance: f64,
    pub record: CaseRecord,
}

/// A historical case as stored by the backend: an intake-shaped record
/// plus its diagnosis label. Values are numbers or strings; yes/no
/// codes arrive as `0`/`1` numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CaseRecord(pub BTreeMap<String, serde_json::Value>);

impl CaseRecord {
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// Numeric value of a field, accepting numeric strings.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Text value of a field; numbers are rendered as-is.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// A yes/no indicator stored as `1`/`0`; `None` for anything else.
    pub fn yes_no(&self, key: &str) -> Option<YesNo> {
        match self.number(key)? {
            v if v == 1.0 => Some(YesNo::Yes),
            v if v == 0.0 => Some(YesNo::No),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.yes_no(key).map(YesNo::as_bool)
    }

    pub fn name(&self) -> Option<String> {
        self.text(fields::NAMA)
    }

    pub fn diagnosis(&self) -> Option<String> {
        self.text(fields::PENYAKIT)
    }
}
