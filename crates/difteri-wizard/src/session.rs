use difteri_client::PredictionBackend;
use difteri_core::models::step::StepId;
use difteri_forms::RawInput;
use difteri_forms::error::FormError;
use difteri_forms::form::FormSet;
use difteri_store::DiagnosisStore;
use rand::Rng;
use serde::Serialize;
use ts_rs::TS;

use crate::controller::{StepStatus, WizardController};
use crate::error::WizardError;
use crate::submit::{Submission, SubmissionOutcome};

/// What the front-end needs to render the active step.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct WizardView {
    pub step: StepId,
    pub title: String,
    pub gradient: String,
    pub index: usize,
    pub total: usize,
    /// Fraction in `(0, 1]`.
    pub progress: f64,
    /// "Langkah N dari 6".
    pub progress_label: String,
    pub steps: Vec<StepStatus>,
    pub can_go_back: bool,
    pub is_last: bool,
    pub loading: bool,
    #[ts(type = "Record<string, unknown>")]
    pub values: RawInput,
}

/// One user's pass through the wizard: the six mounted forms and the
/// controller driving them.
pub struct IntakeSession {
    forms: FormSet,
    controller: WizardController,
}

impl IntakeSession {
    /// Mount every form and register its reset handle with the controller.
    pub fn new() -> Self {
        let forms = FormSet::new();
        let mut controller = WizardController::new();
        for handle in forms.reset_handles() {
            controller.register_reset_handle(handle);
        }
        Self { forms, controller }
    }

    pub fn controller(&self) -> &WizardController {
        &self.controller
    }

    pub fn forms(&self) -> &FormSet {
        &self.forms
    }

    pub fn current_step(&self) -> StepId {
        self.controller.current_step()
    }

    /// Raw values of the active form.
    pub fn values(&self) -> RawInput {
        self.forms.values(self.current_step())
    }

    /// Apply edits to the active form.
    pub fn edit(&mut self, edits: &RawInput) -> Result<(), WizardError> {
        self.forms.edit(self.current_step(), edits)?;
        Ok(())
    }

    /// Apply edits, validate the active step and move on. On the last step
    /// the output is stored and the wizard stays put.
    pub fn advance(&mut self, edits: &RawInput) -> Result<StepId, WizardError> {
        let step = self.current_step();
        self.forms.edit(step, edits)?;
        let output = self
            .forms
            .submit(step)
            .map_err(|e| WizardError::Form(FormError::Validation(e)))?;
        let next = self.controller.next(output)?;
        self.forms.load(next, self.controller.draft());
        Ok(next)
    }

    pub fn back(&mut self) -> StepId {
        let step = self.controller.prev();
        self.forms.load(step, self.controller.draft());
        step
    }

    /// Clear the draft and every form, back to the first step.
    pub fn reset(&mut self) {
        let discarded_draft = !self.controller.draft().is_empty();
        self.controller.reset();
        tracing::info!(discarded_draft, "intake form reset");
    }

    /// Validate the final step and snapshot the draft for submission. The
    /// session stays busy until [`finish_submission`](Self::finish_submission).
    pub fn begin_submission(&mut self, edits: &RawInput) -> Result<Submission, WizardError> {
        let step = self.current_step();
        if !step.is_last() {
            return Err(WizardError::NotFinalStep(step));
        }
        if self.controller.is_loading() {
            return Err(WizardError::Busy);
        }

        self.forms.edit(step, edits)?;
        let output = self
            .forms
            .submit(step)
            .map_err(|e| WizardError::Form(FormError::Validation(e)))?;
        self.controller.record(output)?;
        self.controller.begin_submission()?;

        let submission = Submission::new(self.controller.draft().clone());
        tracing::info!(submission_id = %submission.id(), "submission started");
        Ok(submission)
    }

    pub fn finish_submission(&mut self) {
        self.controller.end_submission();
    }

    /// Submit in one go: validate, call the backend, persist the result.
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        edits: &RawInput,
        backend: &dyn PredictionBackend,
        store: &DiagnosisStore,
        rng: &mut R,
    ) -> Result<SubmissionOutcome, WizardError> {
        let submission = self.begin_submission(edits)?;
        let outcome = submission.run(backend, store, rng);
        self.finish_submission();
        Ok(outcome?)
    }

    pub fn view(&self) -> WizardView {
        let step = self.current_step();
        WizardView {
            step,
            title: step.title().to_string(),
            gradient: step.gradient().to_string(),
            index: self.controller.index(),
            total: self.controller.total(),
            progress: self.controller.progress(),
            progress_label: format!(
                "Langkah {} dari {}",
                self.controller.index() + 1,
                self.controller.total()
            ),
            steps: self.controller.step_states(),
            can_go_back: self.controller.can_go_back(),
            is_last: step.is_last(),
            loading: self.controller.is_loading(),
            values: self.values(),
        }
    }
}

impl Default for IntakeSession {
    fn default() -> Self {
        Self::new()
    }
}
