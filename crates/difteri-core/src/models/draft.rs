use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::intake::{
    AdditionalData, ClinicalSymptoms, LaboratoryResult, PatientRecord, PhysicalExam, VitalSigns,
};
use super::step::StepId;

/// The in-progress accumulation of every step's validated output.
/// A field stays `None` until its step has been completed once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DraftState {
    pub patient: Option<PatientRecord>,
    pub symptoms: Option<ClinicalSymptoms>,
    pub physical: Option<PhysicalExam>,
    pub laboratory: Option<LaboratoryResult>,
    pub vitals: Option<VitalSigns>,
    pub additional: Option<AdditionalData>,
}

/// Validated output of a single step, tagged with the step it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutput {
    Patient(PatientRecord),
    Symptoms(ClinicalSymptoms),
    Physical(PhysicalExam),
    Laboratory(LaboratoryResult),
    Vitals(VitalSigns),
    Additional(AdditionalData),
}

impl StepOutput {
    pub fn step(&self) -> StepId {
        match self {
            StepOutput::Patient(_) => StepId::Patient,
            StepOutput::Symptoms(_) => StepId::Symptoms,
            StepOutput::Physical(_) => StepId::Physical,
            StepOutput::Laboratory(_) => StepId::Laboratory,
            StepOutput::Vitals(_) => StepId::Vitals,
            StepOutput::Additional(_) => StepId::Additional,
        }
    }
}

impl DraftState {
    /// Store a step's output under its own key, replacing any earlier value.
    pub fn store(&mut self, output: StepOutput) {
        match output {
            StepOutput::Patient(v) => self.patient = Some(v),
            StepOutput::Symptoms(v) => self.symptoms = Some(v),
            StepOutput::Physical(v) => self.physical = Some(v),
            StepOutput::Laboratory(v) => self.laboratory = Some(v),
            StepOutput::Vitals(v) => self.vitals = Some(v),
            StepOutput::Additional(v) => self.additional = Some(v),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn has(&self, step: StepId) -> bool {
        match step {
            StepId::Patient => self.patient.is_some(),
            StepId::Symptoms => self.symptoms.is_some(),
            StepId::Physical => self.physical.is_some(),
            StepId::Laboratory => self.laboratory.is_some(),
            StepId::Vitals => self.vitals.is_some(),
            StepId::Additional => self.additional.is_some(),
        }
    }

    /// Stored output of one step as a JSON object keyed by wire names.
    pub fn step_value(&self, step: StepId) -> Result<Option<serde_json::Value>, serde_json::Error> {
        let value = match step {
            StepId::Patient => self.patient.as_ref().map(serde_json::to_value),
            StepId::Symptoms => self.symptoms.as_ref().map(serde_json::to_value),
            StepId::Physical => self.physical.as_ref().map(serde_json::to_value),
            StepId::Laboratory => self.laboratory.as_ref().map(serde_json::to_value),
            StepId::Vitals => self.vitals.as_ref().map(serde_json::to_value),
            StepId::Additional => self.additional.as_ref().map(serde_json::to_value),
        };
        value.transpose()
    }
}
