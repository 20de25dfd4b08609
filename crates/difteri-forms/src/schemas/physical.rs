use difteri_core::fields;
use difteri_core::models::codes::{CodeSet, MembraneSite};
use difteri_core::models::draft::{DraftState, StepOutput};
use difteri_core::models::intake::PhysicalExam;
use difteri_core::models::step::StepId;
use serde_json::json;

use crate::rules::{Checker, NumberRule, ValidationErrors};
use crate::{RawInput, StepSchema, object};

/// Step 3: physical examination.
///
/// A membrane at any site requires a positive extent. Choosing "Tidak Ada"
/// in the form zeroes the extent.
pub struct PhysicalExamSchema;

impl StepSchema for PhysicalExamSchema {
    type Output = PhysicalExam;

    const STEP: StepId = StepId::Physical;

    fn validate(raw: &RawInput) -> Result<PhysicalExam, ValidationErrors> {
        let mut check = Checker::new(raw);

        let exam = PhysicalExam {
            gland_enlargement: check.choice(fields::PEMBESARAN_KELENJAR),
            bull_neck: check.choice(fields::BULLNECK),
            membrane_site: check.choice(fields::TERDAPAT_MEMBRAN_DI),
            membrane_extent: check.number(
                fields::LUAS_MEMBRAN,
                &NumberRule::new("Luas membran harus berupa angka").min(0.0, "Minimal 0"),
            ),
            bleeds_on_swab: check.choice(fields::BERDARAH_SAAT_DI_SWAB),
            conjunctiva: check.score(
                fields::KONJUNGTIVA,
                &NumberRule::new("Nilai konjungtiva harus angka")
                    .integer("Nilai konjungtiva harus bilangan bulat")
                    .min(1.0, None)
                    .max(5.0, None),
            ),
            lymph_nodes: check.score(
                fields::KELENJAR_GETAH_BENING,
                &NumberRule::new("Nilai KGB harus angka")
                    .integer("Nilai KGB harus bilangan bulat")
                    .min(0.0, None)
                    .max(3.0, None),
            ),
            tonsil_grade: check.score(
                fields::TONSIL,
                &NumberRule::new("Nilai tonsil harus angka")
                    .integer("Nilai tonsil harus bilangan bulat")
                    .min(0.0, None)
                    .max(4.0, None),
            ),
        };

        check.finish()?;

        if exam.membrane_site.is_present() && exam.membrane_extent <= 0.0 {
            return Err(ValidationErrors::single(
                fields::LUAS_MEMBRAN,
                "Wajib > 0 jika terdapat membran.",
            ));
        }

        Ok(exam)
    }

    fn defaults() -> RawInput {
        object(json!({
            fields::PEMBESARAN_KELENJAR: "0",
            fields::BULLNECK: "0",
            fields::TERDAPAT_MEMBRAN_DI: MembraneSite::Absent.code(),
            fields::LUAS_MEMBRAN: 0,
            fields::BERDARAH_SAAT_DI_SWAB: "0",
            fields::KONJUNGTIVA: "",
            fields::KELENJAR_GETAH_BENING: "",
            fields::TONSIL: "",
        }))
    }

    fn on_change(raw: &mut RawInput, field: &str) {
        if field != fields::TERDAPAT_MEMBRAN_DI {
            return;
        }
        let absent = raw
            .get(field)
            .and_then(|v| v.as_str())
            .is_some_and(|code| code == MembraneSite::Absent.code());
        if absent {
            raw.insert(fields::LUAS_MEMBRAN.to_string(), json!(0));
        }
    }

    fn wrap(output: PhysicalExam) -> StepOutput {
        StepOutput::Physical(output)
    }

    fn stored(draft: &DraftState) -> Option<&PhysicalExam> {
        draft.physical.as_ref()
    }
}
