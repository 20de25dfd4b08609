//! difteri-wizard
//!
//! The six-step intake flow: a linear controller that owns the draft, the
//! session that mounts the step forms, and the orchestrator that turns a
//! finished draft into a prediction request.

pub mod controller;
pub mod error;
pub mod session;
pub mod submit;

pub use controller::{StepState, StepStatus, WizardController};
pub use error::{SubmissionError, WizardError};
pub use session::{IntakeSession, WizardView};
pub use submit::{Submission, SubmissionOutcome};
