use difteri_core::models::codes::CodeSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::RawInput;

/// One side of a numeric range.
#[derive(Debug, Clone, Copy)]
pub struct Limit {
    pub value: f64,
    pub exclusive: bool,
    pub message: Option<&'static str>,
}

/// Coercion and range rule for a numeric field.
#[derive(Debug, Clone, Copy)]
pub struct NumberRule {
    /// Shown when the value cannot be read as a number.
    pub type_message: &'static str,
    pub min: Option<Limit>,
    pub max: Option<Limit>,
    /// `Some(message)` when the value must be a whole number.
    pub integer: Option<&'static str>,
}

impl NumberRule {
    pub const fn new(type_message: &'static str) -> Self {
        Self {
            type_message,
            min: None,
            max: None,
            integer: None,
        }
    }

    /// Inclusive lower bound.
    pub fn min(mut self, value: f64, message: impl Into<Option<&'static str>>) -> Self {
        self.min = Some(Limit {
            value,
            exclusive: false,
            message: message.into(),
        });
        self
    }

    /// Strictly greater than zero.
    pub fn positive(mut self, message: impl Into<Option<&'static str>>) -> Self {
        self.min = Some(Limit {
            value: 0.0,
            exclusive: true,
            message: message.into(),
        });
        self
    }

    /// Inclusive upper bound.
    pub fn max(mut self, value: f64, message: impl Into<Option<&'static str>>) -> Self {
        self.max = Some(Limit {
            value,
            exclusive: false,
            message: message.into(),
        });
        self
    }

    pub fn integer(mut self, message: &'static str) -> Self {
        self.integer = Some(message);
        self
    }

    pub fn contains(&self, value: f64) -> bool {
        self.check(value).is_ok()
    }

    /// Check an already-coerced value, returning the first violated rule's
    /// message.
    pub fn check(&self, value: f64) -> Result<f64, String> {
        if let Some(message) = self.integer
            && value.fract() != 0.0
        {
            return Err(message.to_string());
        }
        if let Some(min) = self.min {
            let too_small = if min.exclusive {
                value <= min.value
            } else {
                value < min.value
            };
            if too_small {
                return Err(min.message.map(str::to_string).unwrap_or_else(|| {
                    let op = if min.exclusive { ">" } else { "≥" };
                    format!("Nilai harus {op} {}", min.value)
                }));
            }
        }
        if let Some(max) = self.max
            && value > max.value
        {
            return Err(max
                .message
                .map(str::to_string)
                .unwrap_or_else(|| format!("Nilai harus ≤ {}", max.value)));
        }
        Ok(value)
    }
}

/// Trimmed-length rule for a text field.
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    pub min_len: Option<(usize, &'static str)>,
    pub max_len: Option<(usize, &'static str)>,
}

impl TextRule {
    pub const fn new() -> Self {
        Self {
            min_len: None,
            max_len: None,
        }
    }

    pub fn min_len(mut self, len: usize, message: &'static str) -> Self {
        self.min_len = Some((len, message));
        self
    }

    pub fn max_len(mut self, len: usize, message: &'static str) -> Self {
        self.max_len = Some((len, message));
        self
    }

    pub fn check(&self, value: &str) -> Result<String, String> {
        let trimmed = value.trim();
        let len = trimmed.chars().count();
        if let Some((min, message)) = self.min_len
            && len < min
        {
            return Err(message.to_string());
        }
        if let Some((max, message)) = self.max_len
            && len > max
        {
            return Err(message.to_string());
        }
        Ok(trimmed.to_string())
    }
}

impl Default for TextRule {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a raw control value as a number.
///
/// Accepts JSON numbers, numeric strings (surrounding whitespace ignored)
/// and booleans. A cleared control (blank string or `null`) reads as 0.
/// Non-numeric strings, other JSON values and non-finite values are not
/// numbers.
pub fn coerce_number(value: &serde_json::Value) -> Option<f64> {
    let n = match value {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Some(0.0);
            }
            s.parse::<f64>().ok()?
        }
        serde_json::Value::Bool(b) => f64::from(u8::from(*b)),
        serde_json::Value::Null => 0.0,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// A problem with one field, addressed by its wire name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every field problem found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field: field.to_string(),
                message: message.into(),
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message attached to `field`.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.message_for(field).is_some()
    }
}

/// Accumulates per-field errors while a schema reads its fields.
///
/// Each reader returns a placeholder when the field is invalid so the
/// schema can keep going; [`Checker::finish`] reports whether any
/// placeholder was produced.
pub struct Checker<'a> {
    raw: &'a RawInput,
    errors: Vec<FieldError>,
}

impl<'a> Checker<'a> {
    pub fn new(raw: &'a RawInput) -> Self {
        Self {
            raw,
            errors: Vec::new(),
        }
    }

    fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn number(&mut self, field: &str, rule: &NumberRule) -> f64 {
        let Some(value) = self.raw.get(field).and_then(coerce_number) else {
            self.fail(field, rule.type_message);
            return 0.0;
        };
        match rule.check(value) {
            Ok(v) => v,
            Err(message) => {
                self.fail(field, message);
                0.0
            }
        }
    }

    /// A small ordinal score. The rule must carry an integer constraint and
    /// a range inside `0..=255`.
    pub fn score(&mut self, field: &str, rule: &NumberRule) -> u8 {
        let value = self.number(field, rule);
        value.clamp(0.0, f64::from(u8::MAX)) as u8
    }

    pub fn text(&mut self, field: &str, rule: &TextRule) -> String {
        let raw = self.raw;
        let Some(serde_json::Value::String(value)) = raw.get(field) else {
            self.fail(field, "Input harus berupa teks");
            return String::new();
        };
        match rule.check(value) {
            Ok(v) => v,
            Err(message) => {
                self.fail(field, message);
                String::new()
            }
        }
    }

    /// Optional text: absent, `null` and blank all read as `None`.
    pub fn optional_text(&mut self, field: &str) -> Option<String> {
        match self.raw.get(field) {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Some(_) => {
                self.fail(field, "Input harus berupa teks");
                None
            }
        }
    }

    /// One of a closed set of string codes.
    pub fn choice<C: CodeSet + Default>(&mut self, field: &str) -> C {
        let code = match self.raw.get(field) {
            Some(serde_json::Value::String(s)) => C::from_code(s),
            _ => None,
        };
        code.unwrap_or_else(|| {
            self.fail(
                field,
                format!("Pilihan tidak valid, harus salah satu dari: {}", C::CODES.join(", ")),
            );
            C::default()
        })
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                errors: self.errors,
            })
        }
    }
}
