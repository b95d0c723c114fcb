// ============================================================
// Layer 6 — Model Store
// ============================================================
// Saves and restores the fitted ModelArtifact as one JSON file.
//
// Lifecycle of the file:
//   Absent  ──(save)──▶ Present ──(save)──▶ Present (overwritten)
//   Present ──(remove / external delete)──▶ Absent
//
// save() goes through write_atomic, so a crash mid-write leaves
// the previous model in place and readers never observe a partial
// file.
//
// Reference: Rust Book §9 (Error Handling)

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::domain::error::{AssistantError, AssistantResult};
use crate::infra::atomic_file::write_atomic;
use crate::ml::model::ModelArtifact;

pub struct ModelStore {
    /// Path of the model file, e.g. models/model.json
    path: PathBuf,
}

impl ModelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Serialize and atomically replace the model file
    pub fn save(&self, model: &ModelArtifact) -> AssistantResult<()> {
        let json = serde_json::to_vec(model)
            .map_err(|e| AssistantError::ModelFormat(format!("cannot encode model: {e}")))?;

        write_atomic(&self.path, &json)
            .map_err(|e| AssistantError::storage(format!("write model '{}'", self.path.display()), e))?;

        tracing::debug!("Saved model to '{}' ({} bytes)", self.path.display(), json.len());
        Ok(())
    }

    /// Load the model, or None when no model has been trained yet
    pub fn load(&self) -> AssistantResult<Option<ModelArtifact>> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AssistantError::storage(format!("read model '{}'", self.path.display()), e))
            }
        };

        let model: ModelArtifact = serde_json::from_slice(&bytes)
            .map_err(|e| AssistantError::ModelFormat(e.to_string()))?;
        model.validate()?;
        Ok(Some(model))
    }

    /// Delete the model file. Returns false when there was nothing to delete.
    pub fn remove(&self) -> AssistantResult<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("Removed model '{}'", self.path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AssistantError::storage(format!("remove model '{}'", self.path.display()), e)),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::training_example::TrainingExample;
    use crate::ml::trainer::fit_artifact;

    #[test]
    fn test_absent_model_loads_as_none() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("models/model.json"));
        assert!(!store.exists());
        assert!(store.load().unwrap().is_none());
        assert!(!store.remove().unwrap());
    }

    #[test]
    fn test_save_load_remove() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("models/model.json"));
        let model = fit_artifact(&[TrainingExample::new("good morning", "morning!")]).unwrap();

        store.save(&model).unwrap();
        let loaded = store.load().unwrap().expect("model present after save");
        assert_eq!(loaded.vectorizer, model.vectorizer);
        assert_eq!(loaded.classifier.classes(), model.classifier.classes());
        assert_eq!(loaded.predict("morning").unwrap(), "morning!");

        assert!(store.remove().unwrap());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_garbage_file_is_model_format_error() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("model.json"));
        fs::write(store.path(), b"\x80 not json").unwrap();
        assert!(matches!(store.load(), Err(AssistantError::ModelFormat(_))));
    }
}
