use difteri_core::models::draft::{DraftState, StepOutput};
use difteri_core::models::step::StepId;
use difteri_forms::form::ResetHandle;
use serde::Serialize;
use ts_rs::TS;

use crate::error::WizardError;

/// Position of a step relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StepState {
    Done,
    Active,
    Pending,
}

/// One entry of the step indicator strip.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct StepStatus {
    pub step: StepId,
    pub title: String,
    pub state: StepState,
}

/// Linear state machine over the six intake steps.
///
/// Owns the draft. Steps are only completed through [`WizardController::next`],
/// which stores the step's validated output before moving on. Both
/// directions clamp at the ends.
#[derive(Debug)]
pub struct WizardController {
    current: StepId,
    draft: DraftState,
    loading: bool,
    reset_handles: Vec<ResetHandle>,
}

impl WizardController {
    pub fn new() -> Self {
        Self {
            current: StepId::Patient,
            draft: DraftState::default(),
            loading: false,
            reset_handles: Vec::new(),
        }
    }

    pub fn current_step(&self) -> StepId {
        self.current
    }

    pub fn index(&self) -> usize {
        self.current.index()
    }

    pub fn total(&self) -> usize {
        StepId::COUNT
    }

    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    pub fn can_go_back(&self) -> bool {
        !self.current.is_first()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Display-only completion fraction, `(index + 1) / total`.
    pub fn progress(&self) -> f64 {
        (self.index() + 1) as f64 / self.total() as f64
    }

    pub fn step_states(&self) -> Vec<StepStatus> {
        StepId::ALL
            .iter()
            .map(|&step| StepStatus {
                step,
                title: step.title().to_string(),
                state: match step.index().cmp(&self.index()) {
                    std::cmp::Ordering::Less => StepState::Done,
                    std::cmp::Ordering::Equal => StepState::Active,
                    std::cmp::Ordering::Greater => StepState::Pending,
                },
            })
            .collect()
    }

    /// Register a form's reset callback. Invoked on every [`reset`](Self::reset).
    pub fn register_reset_handle(&mut self, handle: ResetHandle) {
        tracing::debug!(step = %handle.step(), "reset handle registered");
        self.reset_handles.push(handle);
    }

    /// Store the active step's output without moving.
    pub fn record(&mut self, output: StepOutput) -> Result<(), WizardError> {
        let got = output.step();
        if got != self.current {
            return Err(WizardError::StepMismatch {
                expected: self.current,
                got,
            });
        }
        let revisit = self.draft.has(got);
        self.draft.store(output);
        tracing::debug!(step = %got, revisit, "step recorded");
        Ok(())
    }

    /// Store the active step's output and advance one step. Stays put on
    /// the last step.
    pub fn next(&mut self, output: StepOutput) -> Result<StepId, WizardError> {
        self.record(output)?;
        if let Some(step) = StepId::from_index(self.index() + 1) {
            self.current = step;
        }
        tracing::debug!(step = %self.current, "wizard advanced");
        Ok(self.current)
    }

    /// Go back one step, keeping every stored output. Stays put on the
    /// first step.
    pub fn prev(&mut self) -> StepId {
        if let Some(index) = self.index().checked_sub(1)
            && let Some(step) = StepId::from_index(index)
        {
            self.current = step;
        }
        tracing::debug!(step = %self.current, "wizard moved back");
        self.current
    }

    /// Back to the first step with an empty draft and no submission in
    /// flight. Registered forms are reset as well.
    pub fn reset(&mut self) {
        for handle in &self.reset_handles {
            handle.invoke();
        }
        self.draft.clear();
        self.current = StepId::Patient;
        self.loading = false;
        tracing::debug!("wizard reset");
    }

    /// Mark a submission as in flight.
    pub fn begin_submission(&mut self) -> Result<(), WizardError> {
        if self.loading {
            return Err(WizardError::Busy);
        }
        self.loading = true;
        Ok(())
    }

    pub fn end_submission(&mut self) {
        self.loading = false;
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}
