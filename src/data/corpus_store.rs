// ============================================================
// Layer 4 — Training Corpus Store
// ============================================================
// Append-only JSONL file holding every accepted training pair.
//
// File format (UTF-8, one object per line):
//   {"input":"hello","output":"world"}
//   {"input":"how are you","output":"fine, thanks"}
//
// Writes go through OpenOptions with append=true, one record per
// call, flushed before returning. Reads load the whole file back
// in insertion order. A missing file is an empty corpus; a single
// unparsable line fails the whole load.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::domain::error::{AssistantError, AssistantResult};
use crate::domain::training_example::TrainingExample;

pub struct CorpusStore {
    /// Full path to the JSONL file
    path: PathBuf,
}

impl CorpusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one example as a new line and flush it to disk
    pub fn append(&self, example: &TrainingExample) -> AssistantResult<()> {
        let line = serde_json::to_string(example)
            .map_err(|e| AssistantError::storage("encode training example", io::Error::other(e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| AssistantError::storage(format!("create '{}'", parent.display()), e))?;
        }

        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AssistantError::storage(format!("open '{}'", self.path.display()), e))?;

        writeln!(f, "{line}")
            .and_then(|_| f.flush())
            .map_err(|e| AssistantError::storage(format!("append to '{}'", self.path.display()), e))?;

        tracing::debug!("Appended training example to '{}'", self.path.display());
        Ok(())
    }

    /// Load every example, oldest first
    pub fn load_all(&self) -> AssistantResult<Vec<TrainingExample>> {
        let Some(text) = self.read_if_exists()? else {
            tracing::debug!("Corpus '{}' does not exist yet", self.path.display());
            return Ok(Vec::new());
        };

        text.lines()
            .enumerate()
            .map(|(i, line)| {
                serde_json::from_str::<TrainingExample>(line).map_err(|e| {
                    AssistantError::CorruptCorpus { line: i + 1, reason: e.to_string() }
                })
            })
            .collect()
    }

    /// Raw file contents for a dump view; empty when the file is missing
    pub fn load_as_text(&self) -> AssistantResult<String> {
        Ok(self.read_if_exists()?.unwrap_or_default())
    }

    /// Remove the whole corpus. A missing file counts as cleared.
    pub fn clear(&self) -> AssistantResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("Cleared corpus '{}'", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AssistantError::storage(format!("remove '{}'", self.path.display()), e)),
        }
    }

    fn read_if_exists(&self) -> AssistantResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AssistantError::storage(format!("read '{}'", self.path.display()), e)),
        }
    }
}
