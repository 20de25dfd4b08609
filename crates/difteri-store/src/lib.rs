//! difteri-store
//!
//! Durable single-slot storage for the last diagnosis, so a reload of the
//! result view does not lose it.

pub mod error;
pub mod slot;

pub use error::StoreError;
pub use slot::{DiagnosisStore, Lookup, StoredDiagnosis};
