// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only. No model math here (Layer 5) and
// no direct file formats (Layers 4 and 6).
//
//   config.rs           — AppConfig, the file locations
//   train_use_case.rs   — corpus append + retrain, single writer
//   predict_use_case.rs — math → model strategy chain
//   chat_use_case.rs    — LLM turn, chat log, auto-train
//
// Reference: Clean Architecture pattern

/// File locations shared by all use cases
pub mod config;

/// The training workflow
pub mod train_use_case;

/// The prediction workflow
pub mod predict_use_case;

/// The hosted-LLM chat workflow
pub mod chat_use_case;
