#![allow(dead_code)]

use std::sync::Mutex;

use difteri_client::wire::{Capabilities, PredictRequest};
use difteri_client::{ClientError, PredictionBackend};
use difteri_core::models::diagnosis::DiagnosisResult;
use difteri_core::models::step::StepId;
use difteri_forms::RawInput;
use serde_json::json;

pub enum Predict {
    Succeed(DiagnosisResult),
    Reject(Option<String>),
    Fail(u16),
}

/// In-memory backend that records every prediction request.
pub struct MockBackend {
    pub healthy: bool,
    pub features: Vec<String>,
    pub predict: Predict,
    pub health_calls: Mutex<usize>,
    pub requests: Mutex<Vec<PredictRequest>>,
}

impl MockBackend {
    pub fn new(predict: Predict) -> Self {
        Self {
            healthy: true,
            features: vec!["usia".into(), "batuk".into(), "suhu".into()],
            predict,
            health_calls: Mutex::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            healthy: false,
            ..Self::new(Predict::Succeed(sample_result()))
        }
    }

    pub fn requests(&self) -> Vec<PredictRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl PredictionBackend for MockBackend {
    fn health(&self) -> Result<Capabilities, ClientError> {
        *self.health_calls.lock().unwrap() += 1;
        if !self.healthy {
            return Err(ClientError::Status {
                status: 503,
                body: String::new(),
            });
        }
        Ok(Capabilities {
            features: self.features.clone(),
        })
    }

    fn predict(&self, request: &PredictRequest) -> Result<DiagnosisResult, ClientError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.predict {
            Predict::Succeed(result) => Ok(result.clone()),
            Predict::Reject(msg) => Err(ClientError::Rejected(msg.clone())),
            Predict::Fail(status) => Err(ClientError::Status {
                status: *status,
                body: String::new(),
            }),
        }
    }
}

pub fn sample_result() -> DiagnosisResult {
    DiagnosisResult {
        diagnosis: "Difteri".into(),
        confidence: 0.873,
        top_scores: vec![
            ("Difteri".into(), 0.873),
            ("Suspect Difteri".into(), 0.1),
            ("Bukan Difteri".into(), 0.027),
        ],
        similar_cases: vec![(3, 0.12), (17, 0.2), (42, 0.31)],
        similar_cases_detailed: vec![],
    }
}

fn object(value: serde_json::Value) -> RawInput {
    match value {
        serde_json::Value::Object(map) => map,
        _ => RawInput::new(),
    }
}

/// A fully valid set of edits for each step.
pub fn valid_edits(step: StepId) -> RawInput {
    object(match step {
        StepId::Patient => json!({
            "no_rm": "RM-0042",
            "nama": "Budi Santoso",
            "usia": "7",
        }),
        StepId::Symptoms => json!({
            "batuk": "1",
            "nyeri_menelan": "1",
            "suara_mengorok": "1",
            "lama_demam": "3",
        }),
        StepId::Physical => json!({
            "pembesaran_kelenjar": "1",
            "bullneck": "1",
            "terdapat_membran_di": "Tonsil",
            "luas_membran": "2.5",
            "konjungtiva": "2",
            "kelenjar_getah_bening": "1",
            "tonsil": "3",
        }),
        StepId::Laboratory => json!({
            "hemoglobin": "11.2",
            "hematrokit": "34",
            "eritrosit": "4.1",
            "m_c_v": "80",
            "m_c_h": "27",
            "m_c_h_c": "33",
            "leukosit": "14500",
            "trombosit": "250000",
            "laju_endap_darah": "20",
            "basofil": "0",
            "eosinofil": "2",
            "neutrofil": "75",
            "limposit": "18",
            "monosit": "5",
            "glukosa": "98",
            "natrium": "138",
            "kalium": "4.2",
            "khlorida": "101",
            "ph": "7.38",
            "3pco2": "40",
            "be": "-2.5",
            "so2": "97",
            "rate": "110",
            "qtc": "420",
        }),
        StepId::Vitals => json!({
            "bb": "21",
            "sistol": "110",
            "diastol": "70",
            "nadi": "96",
            "pernafasan": "24",
            "suhu": "38.4",
        }),
        StepId::Additional => json!({
            "kontak_erat_difteri": "1",
            "status_imunisasi": "0",
            "antibiotik_sudah_diberi": "0",
        }),
    })
}
