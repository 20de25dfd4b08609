use difteri_core::fields;
use difteri_core::models::draft::{DraftState, StepOutput};
use difteri_core::models::intake::AdditionalData;
use difteri_core::models::step::StepId;
use serde_json::json;

use crate::rules::{Checker, ValidationErrors};
use crate::{RawInput, StepSchema, object};

/// Step 6: exposure and treatment history. The last step; its successful
/// validation triggers the submission.
pub struct AdditionalSchema;

impl StepSchema for AdditionalSchema {
    type Output = AdditionalData;

    const STEP: StepId = StepId::Additional;

    fn validate(raw: &RawInput) -> Result<AdditionalData, ValidationErrors> {
        let mut check = Checker::new(raw);

        let data = AdditionalData {
            diphtheria_contact: check.choice(fields::KONTAK_ERAT_DIFTERI),
            immunization: check.choice(fields::STATUS_IMUNISASI),
            antibiotics_given: check.choice(fields::ANTIBIOTIK_SUDAH_DIBERI),
        };

        check.finish()?;
        Ok(data)
    }

    fn defaults() -> RawInput {
        object(json!({
            fields::KONTAK_ERAT_DIFTERI: "0",
            fields::STATUS_IMUNISASI: "0",
            fields::ANTIBIOTIK_SUDAH_DIBERI: "0",
        }))
    }

    fn wrap(output: AdditionalData) -> StepOutput {
        StepOutput::Additional(output)
    }

    fn stored(draft: &DraftState) -> Option<&AdditionalData> {
        draft.additional.as_ref()
    }
}
