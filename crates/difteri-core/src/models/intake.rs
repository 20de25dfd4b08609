//! Validated step records.
//!
//! Rust field names are English; the serde names are the wire keys used by
//! the prediction backend and the historical case base (see
//! [`crate::fields`]).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::codes::{Immunization, MembraneSite, YesNo};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    /// Case-base identifier. `None` when left blank; the submission
    /// synthesizes one.
    #[serde(rename = "id_casebase", default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    #[serde(rename = "no_rm")]
    pub medical_record_number: String,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "usia")]
    pub age: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalSymptoms {
    #[serde(rename = "mual")]
    pub nausea: YesNo,
    #[serde(rename = "muntah")]
    pub vomiting: YesNo,
    #[serde(rename = "batuk")]
    pub cough: YesNo,
    #[serde(rename = "pilek")]
    pub runny_nose: YesNo,
    #[serde(rename = "nyeri_menelan")]
    pub painful_swallowing: YesNo,
    #[serde(rename = "suara_mengorok")]
    pub stridor: YesNo,
    #[serde(rename = "sesak")]
    pub dyspnea: YesNo,
    /// Days of fever; 0 when afebrile.
    #[serde(rename = "lama_demam")]
    pub fever_days: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PhysicalExam {
    #[serde(rename = "pembesaran_kelenjar")]
    pub gland_enlargement: YesNo,
    #[serde(rename = "bullneck")]
    pub bull_neck: YesNo,
    #[serde(rename = "terdapat_membran_di")]
    pub membrane_site: MembraneSite,
    /// Membrane extent. Must be > 0 whenever `membrane_site` is present.
    #[serde(rename = "luas_membran")]
    pub membrane_extent: f64,
    #[serde(rename = "berdarah_saat_di_swab")]
    pub bleeds_on_swab: YesNo,
    /// Conjunctiva score 1–5.
    #[serde(rename = "konjungtiva")]
    pub conjunctiva: u8,
    /// Lymph-node score 0–3.
    #[serde(rename = "kelenjar_getah_bening")]
    pub lymph_nodes: u8,
    /// Brodsky tonsil grade 0–4.
    #[serde(rename = "tonsil")]
    pub tonsil_grade: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LaboratoryResult {
    // Hematology
    pub hemoglobin: f64,
    #[serde(rename = "hematrokit")]
    pub hematocrit: f64,
    #[serde(rename = "eritrosit")]
    pub erythrocytes: f64,
    #[serde(rename = "m_c_v")]
    pub mcv: f64,
    #[serde(rename = "m_c_h")]
    pub mch: f64,
    #[serde(rename = "m_c_h_c")]
    pub mchc: f64,
    #[serde(rename = "leukosit")]
    pub leukocytes: f64,
    #[serde(rename = "trombosit")]
    pub platelets: f64,
    #[serde(rename = "laju_endap_darah")]
    pub sedimentation_rate: f64,

    // Differential count, percent
    #[serde(rename = "basofil")]
    pub basophils: f64,
    #[serde(rename = "eosinofil")]
    pub eosinophils: f64,
    #[serde(rename = "neutrofil")]
    pub neutrophils: f64,
    #[serde(rename = "limposit")]
    pub lymphocytes: f64,
    #[serde(rename = "monosit")]
    pub monocytes: f64,

    // Chemistry and electrolytes
    #[serde(rename = "glukosa")]
    pub glucose: f64,
    #[serde(rename = "natrium")]
    pub sodium: f64,
    #[serde(rename = "kalium")]
    pub potassium: f64,
    #[serde(rename = "khlorida")]
    pub chloride: f64,

    // Blood gas
    pub ph: f64,
    #[serde(rename = "3pco2")]
    pub pco2: f64,
    /// Base excess; signed.
    #[serde(rename = "be")]
    pub base_excess: f64,
    pub so2: f64,

    // ECG
    #[serde(rename = "rate")]
    pub heart_rate: f64,
    pub qtc: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalSigns {
    #[serde(rename = "bb")]
    pub weight: f64,
    #[serde(rename = "sistol")]
    pub systolic: f64,
    /// Always below `systolic`.
    #[serde(rename = "diastol")]
    pub diastolic: f64,
    #[serde(rename = "nadi")]
    pub pulse: f64,
    #[serde(rename = "pernafasan")]
    pub respiration: f64,
    #[serde(rename = "suhu")]
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdditionalData {
    #[serde(rename = "kontak_erat_difteri")]
    pub diphtheria_contact: YesNo,
    #[serde(rename = "status_imunisasi")]
    pub immunization: Immunization,
    #[serde(rename = "antibiotik_sudah_diberi")]
    pub antibiotics_given: YesNo,
}
