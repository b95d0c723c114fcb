// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between raw user text and the fitted model:
//
//   user text
//       │
//       ├──▶ math          → allow-listed expression evaluator
//       ├──▶ language      → language code for the chat prompt
//       │
//       ▼
//   normalizer             → lowercase, strip punctuation
//       │
//       ▼
//   corpus_store           → append-only JSONL of training pairs
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Lowercases and cleans raw text
pub mod normalizer;

/// Math pre-filter and sandboxed evaluator
pub mod math;

pub mod language;

/// JSONL training corpus
pub mod corpus_store;
