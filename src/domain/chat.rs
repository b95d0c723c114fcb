// ============================================================
// Layer 3 — Chat Domain Types
// ============================================================
// ChatRecord is what the chat log stores for every LLM reply.
// ChatTurn is the (user, bot) view handed back when rendering a
// user's history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored exchange. `user_id` is None for anonymous callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub user_id:   Option<String>,
    pub input:     String,
    pub output:    String,
    pub timestamp: DateTime<Utc>,
}

impl ChatRecord {
    /// Create a record stamped with the current UTC time
    pub fn now(
        input:   impl Into<String>,
        output:  impl Into<String>,
        user_id: Option<&str>,
    ) -> Self {
        Self {
            user_id:   user_id.map(str::to_string),
            input:     input.into(),
            output:    output.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A single history entry as the chat page shows it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub user: String,
    pub bot:  String,
}

impl From<ChatRecord> for ChatTurn {
    fn from(r: ChatRecord) -> Self {
        Self { user: r.input, bot: r.output }
    }
}
