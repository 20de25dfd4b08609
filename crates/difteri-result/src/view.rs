use difteri_core::models::diagnosis::DiagnosisResult;
use serde::Serialize;
use ts_rs::TS;

use crate::case::SimilarCaseCard;
use crate::chart::{ChartSlice, chart_slices};
use crate::metrics::{Severity, confidence_percentage, is_suspect};

/// Analysis method shown among the key metrics.
pub const ANALYSIS_METHOD: &str = "CBR + ML";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct KeyMetric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

const RECOMMENDATIONS: [(&str, &str); 3] = [
    (
        "Konsultasi Medis Segera",
        "Segera hubungi dokter spesialis anak atau dokter umum untuk konfirmasi diagnosis",
    ),
    (
        "Pemeriksaan Lanjutan",
        "Lakukan kultur swab tenggorok dan tes sensitivitas antibiotik jika diperlukan",
    ),
    (
        "Isolasi dan Monitoring",
        "Lakukan isolasi untuk mencegah penularan dan monitor kondisi pasien secara ketat",
    ),
];

pub fn recommendations() -> Vec<Recommendation> {
    RECOMMENDATIONS
        .iter()
        .map(|(title, description)| Recommendation {
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Whether a stored result has anything to show. A result without a
/// label is treated like no result.
pub fn has_diagnosis(result: &DiagnosisResult) -> bool {
    !result.diagnosis.is_empty()
}

/// Everything the result page renders.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ResultView {
    pub diagnosis: String,
    pub confidence_percentage: i32,
    pub severity: Severity,
    pub severity_gradient: String,
    pub severity_icon: String,
    /// Show the "Status Suspect" notice.
    pub suspect: bool,
    pub similar_case_count: usize,
    pub summary: String,
    pub key_metrics: Vec<KeyMetric>,
    pub chart: Vec<ChartSlice>,
    pub similar_cases: Vec<SimilarCaseCard>,
    pub recommendations: Vec<Recommendation>,
}

impl ResultView {
    pub fn new(result: &DiagnosisResult) -> Self {
        let percentage = confidence_percentage(result.confidence);
        let severity = Severity::classify(&result.diagnosis, result.confidence);
        let count = result.similar_cases.len();

        Self {
            diagnosis: result.diagnosis.clone(),
            confidence_percentage: percentage,
            severity,
            severity_gradient: severity.gradient().to_string(),
            severity_icon: severity.icon().to_string(),
            suspect: is_suspect(&result.diagnosis),
            similar_case_count: count,
            summary: format!(
                "Confidence Level: {percentage}% • Berdasarkan analisis {count} kasus serupa"
            ),
            key_metrics: vec![
                KeyMetric {
                    label: "Diagnosis Utama".into(),
                    value: result.diagnosis.clone(),
                },
                KeyMetric {
                    label: "Confidence Score".into(),
                    value: format!("{percentage}%"),
                },
                KeyMetric {
                    label: "Kasus Serupa".into(),
                    value: format!("Top {count} kasus"),
                },
                KeyMetric {
                    label: "Metode Analisis".into(),
                    value: ANALYSIS_METHOD.into(),
                },
            ],
            chart: chart_slices(&result.top_scores),
            similar_cases: result
                .similar_cases_detailed
                .iter()
                .map(SimilarCaseCard::new)
                .collect(),
            recommendations: recommendations(),
        }
    }
}

impl From<&DiagnosisResult> for ResultView {
    fn from(result: &DiagnosisResult) -> Self {
        Self::new(result)
    }
}
