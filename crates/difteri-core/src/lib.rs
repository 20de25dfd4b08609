//! difteri-core
//!
//! Pure domain types for the diphtheria intake wizard and the wire field
//! names shared with the prediction backend. No HTTP or filesystem
//! dependency: this is the shared vocabulary of the Difteri system.

pub mod error;
pub mod fields;
pub mod models;
