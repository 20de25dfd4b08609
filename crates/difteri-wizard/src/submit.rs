//! Submission orchestration: capability check, record assembly, prediction
//! and persistence, strictly in that order.

use difteri_client::wire::{Capabilities, IntakeRecord, PredictRequest, TOP_K};
use difteri_client::{ClientError, PredictionBackend};
use difteri_core::fields;
use difteri_core::models::draft::DraftState;
use difteri_core::models::step::StepId;
use difteri_store::{DiagnosisStore, StoredDiagnosis};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::SubmissionError;

/// Shown when the prediction fails for any reason other than a 422 with a
/// message.
pub const GENERIC_FAILURE: &str = "Gagal untuk mendiagnosa data";

/// Shown when the capability endpoint cannot be used.
pub const CAPABILITY_FAILURE: &str = "Gagal mendapatkan features";

/// Prefix of synthesized case identifiers.
pub const CASE_ID_PREFIX: &str = "CB-";

/// Where the caller goes after a successful submission.
pub const RESULT_PATH: &str = "/result";

/// Fields to compare on: the fixed identity/label fields followed by
/// whatever the backend advertises.
pub fn similarity_fields(capabilities: &Capabilities) -> Vec<String> {
    fields::IDENTITY_FIELDS
        .iter()
        .map(|f| f.to_string())
        .chain(capabilities.features.iter().cloned())
        .collect()
}

/// Flatten every completed step of the draft into one record. Steps are
/// merged in wizard order; a later key replaces an earlier one.
pub fn merge_draft(draft: &DraftState) -> Result<IntakeRecord, serde_json::Error> {
    let mut record = IntakeRecord::new();
    for step in StepId::ALL {
        if let Some(Value::Object(values)) = draft.step_value(step)? {
            record.extend(values);
        }
    }
    Ok(record)
}

/// Turn every numeric-looking string into a JSON number. Empty and
/// non-numeric strings are left as they are.
pub fn normalize(record: IntakeRecord) -> IntakeRecord {
    record
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => numeric(&s).unwrap_or(Value::String(s)),
                other => other,
            };
            (key, value)
        })
        .collect()
}

fn numeric(s: &str) -> Option<Value> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed: f64 = trimmed.parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    if parsed.fract() == 0.0 && parsed.abs() < i64::MAX as f64 {
        return Some(Value::from(parsed as i64));
    }
    serde_json::Number::from_f64(parsed).map(Value::Number)
}

/// `CB-` followed by a uniformly drawn number in 1000..=9999. Uniqueness
/// is not checked.
pub fn generate_case_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{CASE_ID_PREFIX}{}", rng.gen_range(1000..=9999))
}

/// Fill in `id_casebase` when it is absent, null or an empty string.
/// Returns whether an identifier was synthesized.
pub fn ensure_case_id<R: Rng + ?Sized>(record: &mut IntakeRecord, rng: &mut R) -> bool {
    let missing = match record.get(fields::ID_CASEBASE) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    };
    if missing {
        record.insert(
            fields::ID_CASEBASE.to_string(),
            Value::String(generate_case_id(rng)),
        );
    }
    missing
}

/// Assemble the `/predict` body from a finished draft.
pub fn build_request<R: Rng + ?Sized>(
    draft: &DraftState,
    capabilities: &Capabilities,
    rng: &mut R,
) -> Result<PredictRequest, serde_json::Error> {
    let mut data = normalize(merge_draft(draft)?);
    ensure_case_id(&mut data, rng);
    Ok(PredictRequest {
        data,
        topk: TOP_K,
        similar_fields: similarity_fields(capabilities),
    })
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct SubmissionOutcome {
    pub submission_id: uuid::Uuid,
    pub diagnosis: String,
    pub redirect: String,
}

/// One submission attempt over a snapshot of the draft.
#[derive(Debug, Clone)]
pub struct Submission {
    id: Uuid,
    draft: DraftState,
}

impl Submission {
    pub fn new(draft: DraftState) -> Self {
        Self {
            id: Uuid::new_v4(),
            draft,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    /// Run the submission against `backend` and persist the result in
    /// `store`. The prediction is never requested if the capability check
    /// fails.
    pub fn run<R: Rng + ?Sized>(
        &self,
        backend: &dyn PredictionBackend,
        store: &DiagnosisStore,
        rng: &mut R,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        let span = tracing::info_span!("submission", submission_id = %self.id);
        let _enter = span.enter();

        let capabilities = backend.health().map_err(|e| {
            warn!(error = %e, "capability check failed");
            SubmissionError::Capability(e)
        })?;

        let request = build_request(&self.draft, &capabilities, rng)?;
        let case_id = request
            .data
            .get(fields::ID_CASEBASE)
            .and_then(Value::as_str)
            .unwrap_or_default();
        info!(
            case_id,
            similar_fields = request.similar_fields.len(),
            "requesting prediction"
        );

        let result = backend.predict(&request).map_err(|e| match e {
            ClientError::Rejected(msg) => {
                warn!(message = ?msg, "prediction rejected");
                SubmissionError::Rejected(msg.unwrap_or_else(|| GENERIC_FAILURE.to_string()))
            }
            other => {
                warn!(error = %other, "prediction failed");
                SubmissionError::Failed(other)
            }
        })?;

        let diagnosis = result.diagnosis.clone();
        store.set(StoredDiagnosis::new(result, self.id))?;
        info!(diagnosis = %diagnosis, "submission complete");

        Ok(SubmissionOutcome {
            submission_id: self.id,
            diagnosis,
            redirect: RESULT_PATH.to_string(),
        })
    }
}
