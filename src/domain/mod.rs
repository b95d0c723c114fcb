// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that name the core
// concepts of the assistant:
//
//   training_example.rs — one (input, output) pair of the corpus
//   chat.rs             — chat log records and history turns
//   error.rs            — the typed error kinds of the core
//   traits.rs           — collaborator seams (object store,
//                         LLM client, chat log)
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO model fitting code
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// A single (input, output) training pair
pub mod training_example;

/// Chat log record and history turn types
pub mod chat;

/// Error kinds surfaced by the core
pub mod error;

/// Collaborator abstractions implemented by Layer 6 or by callers
pub mod traits;
