use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use difteri_core::models::diagnosis::DiagnosisResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;

/// Name of the storage slot; the file is `<dir>/<SLOT_NAME>.json`.
pub const SLOT_NAME: &str = "diagnosis-storage";

/// Current envelope version. Bump when the stored shape changes.
const CURRENT_VERSION: u32 = 1;

/// The persisted diagnosis and where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDiagnosis {
    pub result: DiagnosisResult,
    pub submission_id: Uuid,
    pub saved_at: jiff::Timestamp,
}

impl StoredDiagnosis {
    pub fn new(result: DiagnosisResult, submission_id: Uuid) -> Self {
        Self {
            result,
            submission_id,
            saved_at: jiff::Timestamp::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    /// Missing or 0 = pre-versioned file.
    #[serde(default)]
    version: u32,
    state: Option<StoredDiagnosis>,
}

/// What a reader sees in the slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Storage has not been read yet; the absence of a result means nothing.
    NotHydrated,
    /// Storage was read and holds no result.
    Empty,
    Present(StoredDiagnosis),
}

#[derive(Debug)]
enum Hydration {
    Pending,
    Ready(Option<StoredDiagnosis>),
}

/// Single-slot diagnosis store backed by a JSON file.
///
/// Starts out unhydrated. [`DiagnosisStore::hydrate`] reads the file once;
/// writes go through to disk immediately.
#[derive(Debug)]
pub struct DiagnosisStore {
    path: PathBuf,
    state: RwLock<Hydration>,
}

impl DiagnosisStore {
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{SLOT_NAME}.json")),
            state: RwLock::new(Hydration::Pending),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the slot from disk.
    ///
    /// A value written before hydration finishes wins over the file. On a
    /// read or parse failure the store still becomes hydrated (empty) so
    /// readers are not left waiting, and the error is returned.
    pub fn hydrate(&self) -> Result<(), StoreError> {
        if self.has_hydrated() {
            return Ok(());
        }

        let loaded = self.read_file();

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if matches!(*state, Hydration::Ready(_)) {
            return Ok(());
        }

        match loaded {
            Ok(stored) => {
                tracing::debug!(
                    path = %self.path.display(),
                    present = stored.is_some(),
                    "diagnosis store hydrated"
                );
                *state = Hydration::Ready(stored);
                Ok(())
            }
            Err(e) => {
                *state = Hydration::Ready(None);
                Err(e)
            }
        }
    }

    pub fn has_hydrated(&self) -> bool {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        matches!(*state, Hydration::Ready(_))
    }

    pub fn lookup(&self) -> Lookup {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        match &*state {
            Hydration::Pending => Lookup::NotHydrated,
            Hydration::Ready(None) => Lookup::Empty,
            Hydration::Ready(Some(stored)) => Lookup::Present(stored.clone()),
        }
    }

    /// Replace the slot's content and write it to disk.
    pub fn set(&self, stored: StoredDiagnosis) -> Result<(), StoreError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        self.write_file(Some(&stored))?;
        tracing::info!(
            submission_id = %stored.submission_id,
            diagnosis = %stored.result.diagnosis,
            "diagnosis stored"
        );
        *state = Hydration::Ready(Some(stored));
        Ok(())
    }

    /// Empty the slot.
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        self.write_file(None)?;
        tracing::info!("diagnosis store cleared");
        *state = Hydration::Ready(None);
        Ok(())
    }

    fn read_file(&self) -> Result<Option<StoredDiagnosis>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read(&self.path)?;
        let envelope: Envelope = serde_json::from_slice(&contents)?;
        if envelope.version > CURRENT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: envelope.version,
                supported: CURRENT_VERSION,
            });
        }
        Ok(envelope.state)
    }

    fn write_file(&self, stored: Option<&StoredDiagnosis>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let envelope = serde_json::json!({
            "version": CURRENT_VERSION,
            "state": stored,
        });
        let json = serde_json::to_vec_pretty(&envelope)?;

        // Write to a temp file then rename for atomicity
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
        }

        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
