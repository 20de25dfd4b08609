use difteri_core::fields;
use difteri_core::models::draft::{DraftState, StepOutput};
use difteri_core::models::intake::ClinicalSymptoms;
use difteri_core::models::step::StepId;
use serde_json::json;

use crate::rules::{Checker, NumberRule, ValidationErrors};
use crate::{RawInput, StepSchema, object};

/// Step 2: clinical symptoms.
pub struct SymptomsSchema;

impl StepSchema for SymptomsSchema {
    type Output = ClinicalSymptoms;

    const STEP: StepId = StepId::Symptoms;

    fn validate(raw: &RawInput) -> Result<ClinicalSymptoms, ValidationErrors> {
        let mut check = Checker::new(raw);

        let symptoms = ClinicalSymptoms {
            nausea: check.choice(fields::MUAL),
            vomiting: check.choice(fields::MUNTAH),
            cough: check.choice(fields::BATUK),
            runny_nose: check.choice(fields::PILEK),
            painful_swallowing: check.choice(fields::NYERI_MENELAN),
            stridor: check.choice(fields::SUARA_MENGOROK),
            dyspnea: check.choice(fields::SESAK),
            fever_days: check.number(
                fields::LAMA_DEMAM,
                &NumberRule::new("Lama demam harus berupa angka")
                    .min(0.0, "Minimal 0 hari")
                    .max(60.0, "Terlalu lama, periksa kembali"),
            ),
        };

        check.finish()?;
        Ok(symptoms)
    }

    fn defaults() -> RawInput {
        object(json!({
            fields::MUAL: "0",
            fields::MUNTAH: "0",
            fields::BATUK: "0",
            fields::PILEK: "0",
            fields::NYERI_MENELAN: "0",
            fields::SUARA_MENGOROK: "0",
            fields::SESAK: "0",
            fields::LAMA_DEMAM: "",
        }))
    }

    fn wrap(output: ClinicalSymptoms) -> StepOutput {
        StepOutput::Symptoms(output)
    }

    fn stored(draft: &DraftState) -> Option<&ClinicalSymptoms> {
        draft.symptoms.as_ref()
    }
}
