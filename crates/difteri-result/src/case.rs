use difteri_core::fields;
use difteri_core::models::diagnosis::{CaseRecord, SimilarCase};
use serde::Serialize;
use ts_rs::TS;

use crate::metrics::similarity_percentage;
use crate::status::{BloodPressureStatus, StatusBadge, TemperatureStatus};

/// "Ya" for 1, "Tidak" for 0, "-" for anything else.
pub fn yes_no_text(flag: Option<bool>) -> &'static str {
    match flag {
        Some(true) => "Ya",
        Some(false) => "Tidak",
        None => "-",
    }
}

fn immunization_text(record: &CaseRecord) -> &'static str {
    match record.number(fields::STATUS_IMUNISASI) {
        Some(v) if v == 0.0 => "Tidak lengkap",
        Some(v) if v == 1.0 => "Lengkap",
        Some(v) if v == 2.0 => "Tidak tahu",
        _ => "-",
    }
}

/// A labelled value as rendered on a card.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct DetailItem {
    pub label: String,
    pub value: String,
}

impl DetailItem {
    fn flag(record: &CaseRecord, label: &str, field: &str) -> Self {
        Self {
            label: label.to_string(),
            value: yes_no_text(record.flag(field)).to_string(),
        }
    }

    fn text(record: &CaseRecord, label: &str, field: &str) -> Self {
        Self {
            label: label.to_string(),
            value: record.text(field).unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct LabPanel {
    pub title: String,
    pub values: Vec<DetailItem>,
}

const SYMPTOMS: [(&str, &str); 8] = [
    ("Mual", fields::MUAL),
    ("Muntah", fields::MUNTAH),
    ("Batuk", fields::BATUK),
    ("Pilek", fields::PILEK),
    ("Nyeri Menelan", fields::NYERI_MENELAN),
    ("Suara Mengorok", fields::SUARA_MENGOROK),
    ("Sesak", fields::SESAK),
    ("Pembesaran Kelenjar", fields::PEMBESARAN_KELENJAR),
];

const LAB_PANELS: [(&str, &[(&str, &str)]); 4] = [
    (
        "Hematologi",
        &[
            ("Hemoglobin (g/dL)", fields::HEMOGLOBIN),
            ("Hematokrit (%)", fields::HEMATROKIT),
            ("Leukosit (×10³/μL)", fields::LEUKOSIT),
            ("Trombosit (×10³/μL)", fields::TROMBOSIT),
        ],
    ),
    (
        "Hitung Jenis",
        &[
            ("Basofil (%)", fields::BASOFIL),
            ("Eosinofil (%)", fields::EOSINOFIL),
            ("Neutrofil (%)", fields::NEUTROFIL),
            ("Limfosit (%)", fields::LIMPOSIT),
            ("Monosit (%)", fields::MONOSIT),
        ],
    ),
    (
        "Kimia Darah & Elektrolit",
        &[
            ("Glukosa (mg/dL)", fields::GLUKOSA),
            ("Natrium (mEq/L)", fields::NATRIUM),
            ("Kalium (mEq/L)", fields::KALIUM),
            ("Klorida (mEq/L)", fields::KHLORIDA),
        ],
    ),
    (
        "Analisis Gas Darah & EKG",
        &[
            ("pH", fields::PH),
            ("PCO₂ (mmHg)", fields::PCO2),
            ("Heart Rate", fields::RATE),
            ("QTc (ms)", fields::QTC),
        ],
    ),
];

/// One historical case as shown in the "Detail Kasus Serupa" list.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct SimilarCaseCard {
    pub index: u32,
    pub similarity: i32,
    pub name: Option<String>,
    pub age: Option<f64>,
    pub diagnosis: Option<String>,
    pub medical_record_number: Option<String>,
    pub weight: Option<f64>,
    pub fever_days: Option<f64>,
    pub temperature: Option<f64>,
    pub temperature_status: StatusBadge,
    pub pulse: Option<f64>,
    pub respiration: Option<f64>,
    /// "sistol/diastol" as recorded.
    pub blood_pressure: String,
    pub blood_pressure_status: StatusBadge,
    pub membrane_site: Option<String>,
    pub membrane_extent: Option<f64>,
    pub bleeds_on_swab: String,
    pub symptoms: Vec<DetailItem>,
    pub laboratory: Vec<LabPanel>,
    pub history: Vec<DetailItem>,
}

impl SimilarCaseCard {
    pub fn new(case: &SimilarCase) -> Self {
        let record = &case.record;
        let systolic = record.number(fields::SISTOL);
        let diastolic = record.number(fields::DIASTOL);
        let temperature = record.number(fields::SUHU);

        let blood_pressure_status = BloodPressureStatus::classify(
            systolic.unwrap_or(f64::NAN),
            diastolic.unwrap_or(f64::NAN),
        );
        let temperature_status = TemperatureStatus::classify(temperature.unwrap_or(f64::NAN));

        let blood_pressure = format!(
            "{}/{}",
            record.text(fields::SISTOL).unwrap_or_else(|| "-".into()),
            record.text(fields::DIASTOL).unwrap_or_else(|| "-".into()),
        );

        Self {
            index: case.index,
            similarity: similarity_percentage(case.distance),
            name: record.name(),
            age: record.number(fields::USIA),
            diagnosis: record.diagnosis(),
            medical_record_number: record.text(fields::NO_RM),
            weight: record.number(fields::BB),
            fever_days: record.number(fields::LAMA_DEMAM),
            temperature,
            temperature_status: temperature_status.badge(),
            pulse: record.number(fields::NADI),
            respiration: record.number(fields::PERNAFASAN),
            blood_pressure,
            blood_pressure_status: blood_pressure_status.badge(),
            membrane_site: record.text(fields::TERDAPAT_MEMBRAN_DI),
            membrane_extent: record.number(fields::LUAS_MEMBRAN),
            bleeds_on_swab: yes_no_text(record.flag(fields::BERDARAH_SAAT_DI_SWAB)).to_string(),
            symptoms: SYMPTOMS
                .iter()
                .map(|(label, field)| DetailItem::flag(record, label, field))
                .collect(),
            laboratory: LAB_PANELS
                .iter()
                .map(|(title, values)| LabPanel {
                    title: title.to_string(),
                    values: values
                        .iter()
                        .map(|(label, field)| DetailItem::text(record, label, field))
                        .collect(),
                })
                .collect(),
            history: vec![
                DetailItem::flag(record, "Kontak Erat Difteri", fields::KONTAK_ERAT_DIFTERI),
                DetailItem {
                    label: "Status Imunisasi".to_string(),
                    value: immunization_text(record).to_string(),
                },
                DetailItem::flag(record, "Antibiotik Sudah Diberi", fields::ANTIBIOTIK_SUDAH_DIBERI),
            ],
        }
    }
}
