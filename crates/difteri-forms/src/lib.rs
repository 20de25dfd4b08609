//! difteri-forms
//!
//! Field schemas and step forms for the intake wizard. Pure data and
//! validation: no network or storage dependency. Each step owns one
//! schema that coerces raw control values into a typed record and
//! reports every field problem at once.

pub mod error;
pub mod form;
pub mod rules;
pub mod schemas;

use difteri_core::models::draft::{DraftState, StepOutput};
use difteri_core::models::step::StepId;
use serde::Serialize;
use serde::de::DeserializeOwned;

use rules::ValidationErrors;

/// Raw field values as they arrive from form controls: strings from text
/// inputs, strings or numbers from selection controls.
pub type RawInput = serde_json::Map<String, serde_json::Value>;

/// Trait implemented by each step's schema.
pub trait StepSchema: Send + Sync + 'static {
    /// Typed record produced by a successful validation.
    type Output: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync;

    /// The wizard step this schema validates.
    const STEP: StepId;

    /// Coerce and validate raw input. Per-field errors are accumulated;
    /// cross-field rules only run once every field is individually valid.
    fn validate(raw: &RawInput) -> Result<Self::Output, ValidationErrors>;

    /// Initial raw values of a freshly mounted form. The key set is the
    /// form's full field list.
    fn defaults() -> RawInput;

    /// Raw values that repopulate a form from a previously validated output.
    fn to_raw(output: &Self::Output) -> RawInput {
        match serde_json::to_value(output) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => RawInput::new(),
        }
    }

    /// Side effects applied after `field` was edited.
    fn on_change(_raw: &mut RawInput, _field: &str) {}

    /// Tag an output with its step.
    fn wrap(output: Self::Output) -> StepOutput;

    /// This step's stored output in the draft, if any.
    fn stored(draft: &DraftState) -> Option<&Self::Output>;
}

/// Turn a `json!` object literal into a [`RawInput`].
pub(crate) fn object(value: serde_json::Value) -> RawInput {
    match value {
        serde_json::Value::Object(map) => map,
        _ => RawInput::new(),
    }
}

/// Interpret a request body as field edits. `null` means "no edits".
pub fn as_edits(value: serde_json::Value) -> Result<RawInput, error::FormError> {
    match value {
        serde_json::Value::Null => Ok(RawInput::new()),
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(error::FormError::NotAnObject),
    }
}
