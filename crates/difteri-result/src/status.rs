use serde::Serialize;
use ts_rs::TS;

/// A status label with its text color token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct StatusBadge {
    pub status: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BloodPressureStatus {
    High,
    Low,
    Normal,
}

impl BloodPressureStatus {
    /// High wins over low when both thresholds are crossed. A missing
    /// reading (NaN) matches neither and reads as normal.
    pub fn classify(systolic: f64, diastolic: f64) -> Self {
        if systolic >= 140.0 || diastolic >= 90.0 {
            BloodPressureStatus::High
        } else if systolic <= 90.0 || diastolic <= 60.0 {
            BloodPressureStatus::Low
        } else {
            BloodPressureStatus::Normal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BloodPressureStatus::High => "Tinggi",
            BloodPressureStatus::Low => "Rendah",
            BloodPressureStatus::Normal => "Normal",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            BloodPressureStatus::High => "text-red-400",
            BloodPressureStatus::Low => "text-blue-400",
            BloodPressureStatus::Normal => "text-green-400",
        }
    }

    pub fn badge(self) -> StatusBadge {
        StatusBadge {
            status: self.label().to_string(),
            color: self.color().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureStatus {
    Fever,
    Subfebrile,
    Normal,
}

impl TemperatureStatus {
    pub fn classify(celsius: f64) -> Self {
        if celsius >= 38.0 {
            TemperatureStatus::Fever
        } else if celsius >= 37.5 {
            TemperatureStatus::Subfebrile
        } else {
            TemperatureStatus::Normal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TemperatureStatus::Fever => "Demam",
            TemperatureStatus::Subfebrile => "Subfebris",
            TemperatureStatus::Normal => "Normal",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            TemperatureStatus::Fever => "text-red-400",
            TemperatureStatus::Subfebrile => "text-yellow-400",
            TemperatureStatus::Normal => "text-green-400",
        }
    }

    pub fn badge(self) -> StatusBadge {
        StatusBadge {
            status: self.label().to_string(),
            color: self.color().to_string(),
        }
    }
}
