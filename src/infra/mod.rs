// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Filesystem-backed pieces used by more than one use case:
//
//   atomic_file.rs  — write-then-rename helper
//   model_store.rs  — saves/loads the fitted ModelArtifact
//   object_store.rs — LocalBucket, a directory-backed ObjectStore
//                     used to sync the model file
//   chat_log.rs     — JsonlChatLog, per-user conversation history
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Write-then-rename file replacement
pub mod atomic_file;

/// Model artifact persistence
pub mod model_store;

/// Directory-backed object store
pub mod object_store;

/// JSONL chat history
pub mod chat_log;
