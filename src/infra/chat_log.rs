// ============================================================
// Layer 6 — Chat Log
// ============================================================
// Stores every LLM exchange as one JSON line:
//
//   {"user_id":"3f2c…","input":"hi","output":"Hello!","timestamp":"2026-10-18T09:12:44Z"}
//
// Appends use OpenOptions with append=true so earlier turns are
// never rewritten. fetch() returns the turns of one user, oldest
// first.

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::PathBuf,
};

use crate::domain::chat::{ChatRecord, ChatTurn};
use crate::domain::traits::ChatLog;

pub struct JsonlChatLog {
    path: PathBuf,
}

impl JsonlChatLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn records(&self) -> Result<Vec<ChatRecord>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Cannot read chat log '{}'", self.path.display()))
            }
        };

        text.lines()
            .enumerate()
            .map(|(i, line)| {
                serde_json::from_str(line)
                    .with_context(|| format!("Bad chat log line {} in '{}'", i + 1, self.path.display()))
            })
            .collect()
    }
}

impl ChatLog for JsonlChatLog {
    fn append(&self, input: &str, output: &str, user_id: Option<&str>) -> Result<()> {
        let record = ChatRecord::now(input, output, user_id);
        let line   = serde_json::to_string(&record)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Cannot open chat log '{}'", self.path.display()))?;
        writeln!(f, "{line}")?;

        tracing::debug!("Chat saved for user {:?}", user_id);
        Ok(())
    }

    fn fetch(&self, user_id: &str) -> Result<Vec<ChatTurn>> {
        if user_id.is_empty() {
            return Ok(Vec::new());
        }

        let mut records: Vec<ChatRecord> = self
            .records()?
            .into_iter()
            .filter(|r| r.user_id.as_deref() == Some(user_id))
            .collect();
        // stable: equal timestamps keep file order
        records.sort_by_key(|r| r.timestamp);

        Ok(records.into_iter().map(ChatTurn::from).collect())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_filters_by_user_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonlChatLog::new(dir.path().join("chat_logs.jsonl"));

        log.append("hi", "hello", Some("alice")).unwrap();
        log.append("anon question", "anon answer", None).unwrap();
        log.append("hey", "yo", Some("bob")).unwrap();
        log.append("how are you", "fine", Some("alice")).unwrap();

        let turns = log.fetch("alice").unwrap();
        assert_eq!(
            turns,
            vec![
                ChatTurn { user: "hi".into(), bot: "hello".into() },
                ChatTurn { user: "how are you".into(), bot: "fine".into() },
            ]
        );
        assert_eq!(log.fetch("bob").unwrap().len(), 1);
    }

    #[test]
    fn test_empty_user_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonlChatLog::new(dir.path().join("chat_logs.jsonl"));
        assert!(log.fetch("alice").unwrap().is_empty());
        log.append("hi", "hello", Some("alice")).unwrap();
        assert!(log.fetch("").unwrap().is_empty());
    }
}
