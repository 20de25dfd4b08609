use difteri_core::fields;
use difteri_core::models::draft::{DraftState, StepOutput};
use difteri_core::models::intake::PatientRecord;
use difteri_core::models::step::StepId;
use serde_json::json;

use crate::rules::{Checker, NumberRule, TextRule, ValidationErrors};
use crate::{RawInput, StepSchema, object};

/// Step 1: patient identity.
pub struct PatientSchema;

impl StepSchema for PatientSchema {
    type Output = PatientRecord;

    const STEP: StepId = StepId::Patient;

    fn validate(raw: &RawInput) -> Result<PatientRecord, ValidationErrors> {
        let mut check = Checker::new(raw);

        let case_id = check.optional_text(fields::ID_CASEBASE);
        let medical_record_number = check.text(
            fields::NO_RM,
            &TextRule::new()
                .min_len(1, "Nomor rekam medis wajib diisi")
                .max_len(50, "Terlalu panjang"),
        );
        let name = check.text(
            fields::NAMA,
            &TextRule::new()
                .min_len(2, "Nama minimal 2 karakter")
                .max_len(100, "Nama terlalu panjang"),
        );
        let age = check.number(
            fields::USIA,
            &NumberRule::new("Usia harus berupa angka")
                .positive("Usia harus > 0")
                .max(150.0, "Usia tidak wajar"),
        );

        check.finish()?;
        Ok(PatientRecord {
            case_id,
            medical_record_number,
            name,
            age,
        })
    }

    fn defaults() -> RawInput {
        object(json!({
            fields::ID_CASEBASE: "",
            fields::NO_RM: "",
            fields::NAMA: "",
            fields::USIA: 0,
        }))
    }

    fn to_raw(output: &PatientRecord) -> RawInput {
        object(json!({
            fields::ID_CASEBASE: output.case_id.clone().unwrap_or_default(),
            fields::NO_RM: output.medical_record_number,
            fields::NAMA: output.name,
            fields::USIA: output.age,
        }))
    }

    fn wrap(output: PatientRecord) -> StepOutput {
        StepOutput::Patient(output)
    }

    fn stored(draft: &DraftState) -> Option<&PatientRecord> {
        draft.patient.as_ref()
    }
}
