use difteri_core::fields;
use difteri_core::models::draft::{DraftState, StepOutput};
use difteri_core::models::intake::LaboratoryResult;
use difteri_core::models::step::StepId;

use crate::rules::{Checker, NumberRule, ValidationErrors};
use crate::{RawInput, StepSchema};

const TYPE_MESSAGE: &str = "Input harus angka";
const MIN_MESSAGE: &str = "Nilai harus ≥ 0";

/// Every laboratory field, in panel order.
pub const LAB_FIELDS: [&str; 24] = [
    fields::HEMOGLOBIN,
    fields::HEMATROKIT,
    fields::ERITROSIT,
    fields::MCV,
    fields::MCH,
    fields::MCHC,
    fields::LEUKOSIT,
    fields::TROMBOSIT,
    fields::LAJU_ENDAP_DARAH,
    fields::BASOFIL,
    fields::EOSINOFIL,
    fields::NEUTROFIL,
    fields::LIMPOSIT,
    fields::MONOSIT,
    fields::GLUKOSA,
    fields::NATRIUM,
    fields::KALIUM,
    fields::KHLORIDA,
    fields::PH,
    fields::PCO2,
    fields::BE,
    fields::SO2,
    fields::RATE,
    fields::QTC,
];

fn non_negative() -> NumberRule {
    NumberRule::new(TYPE_MESSAGE).min(0.0, MIN_MESSAGE)
}

fn percentage() -> NumberRule {
    non_negative().max(100.0, None)
}

/// Step 4: laboratory panels. Loose bounds keep historical values valid.
pub struct LaboratorySchema;

impl StepSchema for LaboratorySchema {
    type Output = LaboratoryResult;

    const STEP: StepId = StepId::Laboratory;

    fn validate(raw: &RawInput) -> Result<LaboratoryResult, ValidationErrors> {
        let mut check = Checker::new(raw);
        let nn = non_negative();
        let pct = percentage();

        let lab = LaboratoryResult {
            hemoglobin: check.number(fields::HEMOGLOBIN, &nn),
            hematocrit: check.number(fields::HEMATROKIT, &nn),
            erythrocytes: check.number(fields::ERITROSIT, &nn),
            mcv: check.number(fields::MCV, &nn),
            mch: check.number(fields::MCH, &nn),
            mchc: check.number(fields::MCHC, &nn),
            leukocytes: check.number(fields::LEUKOSIT, &nn),
            platelets: check.number(fields::TROMBOSIT, &nn),
            sedimentation_rate: check.number(fields::LAJU_ENDAP_DARAH, &nn),

            basophils: check.number(fields::BASOFIL, &pct),
            eosinophils: check.number(fields::EOSINOFIL, &pct),
            neutrophils: check.number(fields::NEUTROFIL, &pct),
            lymphocytes: check.number(fields::LIMPOSIT, &pct),
            monocytes: check.number(fields::MONOSIT, &pct),

            glucose: check.number(fields::GLUKOSA, &nn),
            sodium: check.number(fields::NATRIUM, &nn),
            potassium: check.number(fields::KALIUM, &nn),
            chloride: check.number(fields::KHLORIDA, &nn),

            ph: check.number(fields::PH, &nn),
            pco2: check.number(fields::PCO2, &nn),
            base_excess: check.number(fields::BE, &NumberRule::new(TYPE_MESSAGE)),
            so2: check.number(fields::SO2, &pct),

            heart_rate: check.number(fields::RATE, &nn),
            qtc: check.number(fields::QTC, &nn),
        };

        check.finish()?;
        Ok(lab)
    }

    fn defaults() -> RawInput {
        LAB_FIELDS
            .iter()
            .map(|field| (field.to_string(), serde_json::Value::String(String::new())))
            .collect()
    }

    fn wrap(output: LaboratoryResult) -> StepOutput {
        StepOutput::Laboratory(output)
    }

    fn stored(draft: &DraftState) -> Option<&LaboratoryResult> {
        draft.laboratory.as_ref()
    }
}
