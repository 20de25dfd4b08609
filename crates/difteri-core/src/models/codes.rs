//! Enumerated string codes.
//!
//! The historical case base encodes booleans and small categories as
//! string codes (`"0"`, `"1"`, ...). These types keep that encoding at the
//! boundary; business logic converts to native values explicitly.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A closed set of string codes accepted by a selection control.
pub trait CodeSet: Sized + Copy {
    /// Every accepted code, in display order.
    const CODES: &'static [&'static str];

    fn from_code(code: &str) -> Option<Self>;

    fn code(self) -> &'static str;
}

/// Two-valued indicator, `"0"` = tidak (no), `"1"` = ya (yes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum YesNo {
    #[default]
    #[serde(rename = "0")]
    No,
    #[serde(rename = "1")]
    Yes,
}

impl YesNo {
    pub fn as_bool(self) -> bool {
        self == YesNo::Yes
    }
}

impl CodeSet for YesNo {
    const CODES: &'static [&'static str] = &["0", "1"];

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(YesNo::No),
            "1" => Some(YesNo::Yes),
            _ => None,
        }
    }

    fn code(self) -> &'static str {
        match self {
            YesNo::No => "0",
            YesNo::Yes => "1",
        }
    }
}

/// Immunization status of the patient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Immunization {
    /// Tidak lengkap.
    #[default]
    #[serde(rename = "0")]
    Incomplete,
    /// Lengkap.
    #[serde(rename = "1")]
    Complete,
    /// Tidak tahu.
    #[serde(rename = "2")]
    Unknown,
}

impl CodeSet for Immunization {
    const CODES: &'static [&'static str] = &["0", "1", "2"];

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Immunization::Incomplete),
            "1" => Some(Immunization::Complete),
            "2" => Some(Immunization::Unknown),
            _ => None,
        }
    }

    fn code(self) -> &'static str {
        match self {
            Immunization::Incomplete => "0",
            Immunization::Complete => "1",
            Immunization::Unknown => "2",
        }
    }
}

/// Where a pseudomembrane was found, or `Absent` ("Tidak Ada").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MembraneSite {
    #[default]
    #[serde(rename = "Tidak Ada")]
    Absent,
    Tonsil,
    #[serde(rename = "Faring")]
    Pharynx,
    #[serde(rename = "Laring")]
    Larynx,
    Nasal,
    #[serde(rename = "Orofaring")]
    Oropharynx,
    #[serde(rename = "Nasofaring")]
    Nasopharynx,
    #[serde(rename = "Trakea")]
    Trachea,
    #[serde(rename = "Lainnya")]
    Other,
}

impl MembraneSite {
    pub fn is_present(self) -> bool {
        self != MembraneSite::Absent
    }
}

impl CodeSet for MembraneSite {
    const CODES: &'static [&'static str] = &[
        "Tidak Ada",
        "Tonsil",
        "Faring",
        "Laring",
        "Nasal",
        "Orofaring",
        "Nasofaring",
        "Trakea",
        "Lainnya",
    ];

    fn from_code(code: &str) -> Option<Self> {
        let site = match code {
            "Tidak Ada" => MembraneSite::Absent,
            "Tonsil" => MembraneSite::Tonsil,
            "Faring" => MembraneSite::Pharynx,
            "Laring" => MembraneSite::Larynx,
            "Nasal" => MembraneSite::Nasal,
            "Orofaring" => MembraneSite::Oropharynx,
            "Nasofaring" => MembraneSite::Nasopharynx,
            "Trakea" => MembraneSite::Trachea,
            "Lainnya" => MembraneSite::Other,
            _ => return None,
        };
        Some(site)
    }

    fn code(self) -> &'static str {
        match self {
            MembraneSite::Absent => "Tidak Ada",
            MembraneSite::Tonsil => "Tonsil",
            MembraneSite::Pharynx => "Faring",
            MembraneSite::Larynx => "Laring",
            MembraneSite::Nasal => "Nasal",
            MembraneSite::Oropharynx => "Orofaring",
            MembraneSite::Nasopharynx => "Nasofaring",
            MembraneSite::Trachea => "Trakea",
            MembraneSite::Other => "Lainnya",
        }
    }
}
