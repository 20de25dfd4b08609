use difteri_core::fields;
use difteri_core::models::draft::{DraftState, StepOutput};
use difteri_core::models::intake::VitalSigns;
use difteri_core::models::step::StepId;
use serde_json::json;

use crate::rules::{Checker, NumberRule, ValidationErrors};
use crate::{RawInput, StepSchema, object};

/// Step 5: vital signs. Diastolic pressure must stay below systolic; the
/// error is reported on the diastolic field.
pub struct VitalsSchema;

impl StepSchema for VitalsSchema {
    type Output = VitalSigns;

    const STEP: StepId = StepId::Vitals;

    fn validate(raw: &RawInput) -> Result<VitalSigns, ValidationErrors> {
        let mut check = Checker::new(raw);

        let vitals = VitalSigns {
            weight: check.number(
                fields::BB,
                &NumberRule::new("Berat badan harus angka")
                    .positive("Berat badan harus > 0")
                    .max(300.0, "Nilai tidak wajar"),
            ),
            systolic: check.number(
                fields::SISTOL,
                &NumberRule::new("Sistol harus angka")
                    .min(40.0, "Terlalu rendah")
                    .max(300.0, "Terlalu tinggi"),
            ),
            diastolic: check.number(
                fields::DIASTOL,
                &NumberRule::new("Diastol harus angka")
                    .min(20.0, "Terlalu rendah")
                    .max(200.0, "Terlalu tinggi"),
            ),
            pulse: check.number(
                fields::NADI,
                &NumberRule::new("Nadi harus angka")
                    .min(0.0, None)
                    .max(300.0, "Nilai tidak wajar"),
            ),
            respiration: check.number(
                fields::PERNAFASAN,
                &NumberRule::new("Frekuensi napas harus angka")
                    .min(0.0, None)
                    .max(100.0, "Nilai tidak wajar"),
            ),
            temperature: check.number(
                fields::SUHU,
                &NumberRule::new("Suhu harus angka")
                    .min(25.0, "Tidak wajar")
                    .max(45.0, "Tidak wajar"),
            ),
        };

        check.finish()?;

        if vitals.diastolic >= vitals.systolic {
            return Err(ValidationErrors::single(
                fields::DIASTOL,
                "Diastol harus lebih kecil dari sistol",
            ));
        }

        Ok(vitals)
    }

    fn defaults() -> RawInput {
        object(json!({
            fields::BB: "",
            fields::SISTOL: "",
            fields::DIASTOL: "",
            fields::NADI: "",
            fields::PERNAFASAN: "",
            fields::SUHU: "",
        }))
    }

    fn wrap(output: VitalSigns) -> StepOutput {
        StepOutput::Vitals(output)
    }

    fn stored(draft: &DraftState) -> Option<&VitalSigns> {
        draft.vitals.as_ref()
    }
}
