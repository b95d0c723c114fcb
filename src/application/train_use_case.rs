// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Owns the corpus and the model file and is the only writer of
// either. The retrain pipeline, in order:
//
//   Step 1: append the new example, if any   (Layer 4 - data)
//   Step 2: reload the whole corpus          (Layer 4 - data)
//   Step 3: fit vectorizer + classifier      (Layer 5 - ml)
//   Step 4: atomically replace the model     (Layer 6 - infra)
//   Step 5: upload the model, log on failure (Layer 6 - infra)
//
// Steps 1–5 run under one writer lock, so concurrent training
// requests are applied one after another. Readers never take the
// lock; they only ever see a fully written model file.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::application::config::AppConfig;
use crate::data::corpus_store::CorpusStore;
use crate::domain::error::AssistantResult;
use crate::domain::traits::ObjectStore;
use crate::domain::training_example::TrainingExample;
use crate::infra::model_store::ModelStore;
use crate::ml::trainer::fit_artifact;

/// Summary of one successful retrain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetrainReport {
    pub examples:   usize,
    pub classes:    usize,
    pub vocabulary: usize,
}

pub struct TrainUseCase {
    corpus:     CorpusStore,
    models:     ModelStore,
    remote:     Arc<dyn ObjectStore>,
    write_lock: Mutex<()>,
}

impl TrainUseCase {
    pub fn new(config: &AppConfig, remote: Arc<dyn ObjectStore>) -> Self {
        Self {
            corpus: CorpusStore::new(&config.data_file),
            models: ModelStore::new(&config.model_file),
            remote,
            write_lock: Mutex::new(()),
        }
    }

    pub fn model_path(&self) -> &Path {
        self.models.path()
    }

    /// Append `example` (when given and complete), then refit the model
    /// from the whole corpus and replace the model file.
    pub fn retrain(&self, example: Option<&TrainingExample>) -> AssistantResult<RetrainReport> {
        let _guard = self.lock();

        if let Some(ex) = example {
            if ex.is_complete() {
                self.corpus.append(ex)?;
            } else {
                tracing::warn!("Ignoring training example with a blank side");
            }
        }

        let examples = self.corpus.load_all()?;
        let model    = fit_artifact(&examples)?;
        self.models.save(&model)?;

        if let Err(e) = self.remote.upload(self.models.path()) {
            tracing::warn!("Model upload failed: {e}");
        }

        Ok(RetrainReport {
            examples:   examples.len(),
            classes:    model.classifier.classes().len(),
            vocabulary: model.vectorizer.len(),
        })
    }

    /// Record a training example without refitting
    pub fn append_and_persist(&self, example: &TrainingExample) -> AssistantResult<()> {
        let _guard = self.lock();
        self.corpus.append(example)
    }

    /// Raw corpus contents for a dump view
    pub fn load_corpus_as_text(&self) -> AssistantResult<String> {
        self.corpus.load_as_text()
    }

    /// Delete the model file. The corpus is kept.
    pub fn reset_model(&self) -> AssistantResult<bool> {
        let _guard = self.lock();
        self.models.remove()
    }

    /// Delete the corpus. The current model is kept until the next retrain.
    pub fn clear_corpus(&self) -> AssistantResult<()> {
        let _guard = self.lock();
        self.corpus.clear()
    }

    /// Fetch the model from the object store when none exists locally.
    /// Returns true when a local model is present afterwards.
    pub fn pull_model_if_absent(&self) -> bool {
        if self.models.exists() {
            return true;
        }
        let _guard = self.lock();
        // a retrain may have written the model while we waited
        if self.models.exists() {
            return true;
        }
        match self.remote.download(self.models.path()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("No model downloaded: {e}");
                false
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // the guarded state lives on disk, so a poisoned lock is still usable
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
