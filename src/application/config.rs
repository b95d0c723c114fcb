// ============================================================
// Layer 2 — Application Configuration
// ============================================================
// File locations shared by every use case. Built from the CLI
// flags (see cli::StorageArgs) and serialisable so a web layer
// can load the same settings from JSON.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// JSONL training corpus
    pub data_file: PathBuf,

    /// Serialized (vectorizer, classifier) pair
    pub model_file: PathBuf,

    /// Directory acting as the remote model bucket
    pub bucket_dir: PathBuf,

    /// JSONL chat history
    pub chat_log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file:     PathBuf::from("data/training_data.jsonl"),
            model_file:    PathBuf::from("models/model.json"),
            bucket_dir:    PathBuf::from("bucket/model-bucket"),
            chat_log_file: PathBuf::from("data/chat_logs.jsonl"),
        }
    }
}

impl AppConfig {
    /// Every path re-rooted under `dir`. Used by tests and by
    /// deployments that keep all state in one directory.
    pub fn rooted_at(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let d   = Self::default();
        Self {
            data_file:     dir.join(d.data_file),
            model_file:    dir.join(d.model_file),
            bucket_dir:    dir.join(d.bucket_dir),
            chat_log_file: dir.join(d.chat_log_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooted_at_keeps_relative_layout() {
        let cfg = AppConfig::rooted_at("/srv/state");
        assert_eq!(cfg.data_file, PathBuf::from("/srv/state/data/training_data.jsonl"));
        assert_eq!(cfg.model_file, PathBuf::from("/srv/state/models/model.json"));
    }

    #[test]
    fn test_json_round_trip() {
        let cfg  = AppConfig::default();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        assert_eq!(serde_json::from_str::<AppConfig>(&json).unwrap(), cfg);
    }
}
