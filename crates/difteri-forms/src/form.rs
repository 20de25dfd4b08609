//! Step forms.
//!
//! A form holds the raw values of one step's controls between edits. Its
//! state lives behind a shared handle so the wizard can reset it without
//! owning it: the form hands out a [`ResetHandle`] when it is mounted.

use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use difteri_core::models::draft::{DraftState, StepOutput};
use difteri_core::models::step::StepId;

use crate::error::FormError;
use crate::rules::ValidationErrors;
use crate::schemas::{
    AdditionalSchema, LaboratorySchema, PatientSchema, PhysicalExamSchema, SymptomsSchema,
    VitalsSchema,
};
use crate::{RawInput, StepSchema};

/// Callback registered with the wizard to clear a form's local state.
#[derive(Clone)]
pub struct ResetHandle {
    step: StepId,
    reset: Arc<dyn Fn() + Send + Sync>,
}

impl ResetHandle {
    pub fn new(step: StepId, reset: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            step,
            reset: Arc::new(reset),
        }
    }

    pub fn step(&self) -> StepId {
        self.step
    }

    pub fn invoke(&self) {
        (self.reset)();
    }
}

impl fmt::Debug for ResetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetHandle").field("step", &self.step).finish()
    }
}

fn lock(values: &Mutex<RawInput>) -> MutexGuard<'_, RawInput> {
    values.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The controls of one wizard step.
pub struct StepForm<S: StepSchema> {
    values: Arc<Mutex<RawInput>>,
    _schema: PhantomData<S>,
}

impl<S: StepSchema> StepForm<S> {
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(S::defaults())),
            _schema: PhantomData,
        }
    }

    pub fn step(&self) -> StepId {
        S::STEP
    }

    /// Repopulate every control from a previously validated output.
    /// `None` keeps whatever the user has typed so far.
    pub fn load(&self, data: Option<&S::Output>) {
        if let Some(output) = data {
            let mut values = lock(&self.values);
            *values = S::defaults();
            values.extend(S::to_raw(output));
        }
    }

    pub fn values(&self) -> RawInput {
        lock(&self.values).clone()
    }

    /// Edit one control and apply the schema's side effects.
    pub fn set(&self, field: &str, value: serde_json::Value) -> Result<(), FormError> {
        let mut values = lock(&self.values);
        if !values.contains_key(field) {
            return Err(FormError::UnknownField {
                step: S::STEP,
                field: field.to_string(),
            });
        }
        values.insert(field.to_string(), value);
        S::on_change(&mut values, field);
        Ok(())
    }

    /// Apply several edits in order. Nothing is applied if any field is
    /// unknown to this form.
    pub fn edit(&self, edits: &RawInput) -> Result<(), FormError> {
        {
            let values = lock(&self.values);
            if let Some(field) = edits.keys().find(|f| !values.contains_key(f.as_str())) {
                return Err(FormError::UnknownField {
                    step: S::STEP,
                    field: field.clone(),
                });
            }
        }
        for (field, value) in edits {
            self.set(field, value.clone())?;
        }
        Ok(())
    }

    pub fn submit(&self) -> Result<S::Output, ValidationErrors> {
        let values = lock(&self.values);
        let result = S::validate(&values);
        if let Err(errors) = &result {
            tracing::debug!(step = %S::STEP, errors = errors.len(), "step validation failed");
        }
        result
    }

    pub fn reset(&self) {
        *lock(&self.values) = S::defaults();
    }

    pub fn reset_handle(&self) -> ResetHandle {
        let values = Arc::clone(&self.values);
        ResetHandle::new(S::STEP, move || {
            *lock(&values) = S::defaults();
        })
    }
}

impl<S: StepSchema> Default for StepForm<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// All six step forms, addressed by [`StepId`].
#[derive(Default)]
pub struct FormSet {
    pub patient: StepForm<PatientSchema>,
    pub symptoms: StepForm<SymptomsSchema>,
    pub physical: StepForm<PhysicalExamSchema>,
    pub laboratory: StepForm<LaboratorySchema>,
    pub vitals: StepForm<VitalsSchema>,
    pub additional: StepForm<AdditionalSchema>,
}

impl FormSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self, step: StepId) -> RawInput {
        match step {
            StepId::Patient => self.patient.values(),
            StepId::Symptoms => self.symptoms.values(),
            StepId::Physical => self.physical.values(),
            StepId::Laboratory => self.laboratory.values(),
            StepId::Vitals => self.vitals.values(),
            StepId::Additional => self.additional.values(),
        }
    }

    pub fn edit(&self, step: StepId, edits: &RawInput) -> Result<(), FormError> {
        match step {
            StepId::Patient => self.patient.edit(edits),
            StepId::Symptoms => self.symptoms.edit(edits),
            StepId::Physical => self.physical.edit(edits),
            StepId::Laboratory => self.laboratory.edit(edits),
            StepId::Vitals => self.vitals.edit(edits),
            StepId::Additional => self.additional.edit(edits),
        }
    }

    /// Repopulate a step's form from the draft, if that step has an output.
    pub fn load(&self, step: StepId, draft: &DraftState) {
        match step {
            StepId::Patient => self.patient.load(PatientSchema::stored(draft)),
            StepId::Symptoms => self.symptoms.load(SymptomsSchema::stored(draft)),
            StepId::Physical => self.physical.load(PhysicalExamSchema::stored(draft)),
            StepId::Laboratory => self.laboratory.load(LaboratorySchema::stored(draft)),
            StepId::Vitals => self.vitals.load(VitalsSchema::stored(draft)),
            StepId::Additional => self.additional.load(AdditionalSchema::stored(draft)),
        }
    }

    pub fn submit(&self, step: StepId) -> Result<StepOutput, ValidationErrors> {
        match step {
            StepId::Patient => self.patient.submit().map(PatientSchema::wrap),
            StepId::Symptoms => self.symptoms.submit().map(SymptomsSchema::wrap),
            StepId::Physical => self.physical.submit().map(PhysicalExamSchema::wrap),
            StepId::Laboratory => self.laboratory.submit().map(LaboratorySchema::wrap),
            StepId::Vitals => self.vitals.submit().map(VitalsSchema::wrap),
            StepId::Additional => self.additional.submit().map(AdditionalSchema::wrap),
        }
    }

    pub fn reset_handles(&self) -> Vec<ResetHandle> {
        vec![
            self.patient.reset_handle(),
            self.symptoms.reset_handle(),
            self.physical.reset_handle(),
            self.laboratory.reset_handle(),
            self.vitals.reset_handle(),
            self.additional.reset_handle(),
        ]
    }
}
