use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One page of the intake wizard. The declaration order is the order in
/// which the wizard walks through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StepId {
    Patient,
    Symptoms,
    Physical,
    Laboratory,
    Vitals,
    Additional,
}

impl StepId {
    pub const ALL: [StepId; 6] = [
        StepId::Patient,
        StepId::Symptoms,
        StepId::Physical,
        StepId::Laboratory,
        StepId::Vitals,
        StepId::Additional,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn is_first(self) -> bool {
        self == StepId::Patient
    }

    pub fn is_last(self) -> bool {
        self == StepId::Additional
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepId::Patient => "patient",
            StepId::Symptoms => "symptoms",
            StepId::Physical => "physical",
            StepId::Laboratory => "laboratory",
            StepId::Vitals => "vitals",
            StepId::Additional => "additional",
        }
    }

    /// Section heading shown above the step's form.
    pub fn title(self) -> &'static str {
        match self {
            StepId::Patient => "Data Pasien",
            StepId::Symptoms => "Gejala Klinis",
            StepId::Physical => "Pemeriksaan Fisik",
            StepId::Laboratory => "Hasil Laboratorium",
            StepId::Vitals => "Tanda Vital",
            StepId::Additional => "Data Tambahan",
        }
    }

    /// Gradient token for the step indicator.
    pub fn gradient(self) -> &'static str {
        match self {
            StepId::Patient => "from-blue-500 to-cyan-500",
            StepId::Symptoms => "from-purple-500 to-pink-500",
            StepId::Physical => "from-green-500 to-emerald-500",
            StepId::Laboratory => "from-orange-500 to-red-500",
            StepId::Vitals => "from-pink-500 to-rose-500",
            StepId::Additional => "from-indigo-500 to-purple-500",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepId::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| CoreError::UnknownStep(s.to_string()))
    }
}
