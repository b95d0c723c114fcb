// ============================================================
// Layer 3 — Collaborator Traits
// ============================================================
// Handles to external services are constructed once at startup
// and passed in explicitly. The core only ever talks to these
// traits:
//
//   ObjectStore → infra::object_store::LocalBucket
//   ChatLog     → infra::chat_log::JsonlChatLog
//   LlmClient   → provided by the web layer (hosted completion API)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::Path;

use anyhow::Result;

use crate::domain::chat::ChatTurn;
use crate::domain::error::AssistantResult;

// ─── ObjectStore ──────────────────────────────────────────────────────────────
/// Remote blob storage for the serialized model file.
/// Objects are keyed by the file name of `path`.
pub trait ObjectStore: Send + Sync {
    /// Upload (upsert) the file at `path`
    fn upload(&self, path: &Path) -> AssistantResult<()>;

    /// Download the object named after `path` and write it to `path`
    fn download(&self, path: &Path) -> AssistantResult<()>;
}

// ─── LlmClient ────────────────────────────────────────────────────────────────
/// A hosted chat-completion API.
pub trait LlmClient {
    /// Return the assistant reply for one system prompt and one user message
    fn complete(&self, system_prompt: &str, user_text: &str) -> Result<String>;
}

// ─── ChatLog ──────────────────────────────────────────────────────────────────
/// Persistent per-user conversation history.
pub trait ChatLog {
    /// Store one exchange. `user_id` may be absent for anonymous sessions.
    fn append(&self, input: &str, output: &str, user_id: Option<&str>) -> Result<()>;

    /// All turns of `user_id`, oldest first
    fn fetch(&self, user_id: &str) -> Result<Vec<ChatTurn>>;
}
