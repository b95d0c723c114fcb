// ============================================================
// Layer 3 — TrainingExample Domain Type
// ============================================================
// One accepted (input, output) pair. Every accepted chat turn
// and every explicit training call produces one of these, and
// the corpus file holds them one JSON object per line:
//
//   {"input": "hello", "output": "world"}
//
// Once appended a pair is never edited or removed on its own;
// the only deletion is clearing the whole corpus file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// What the user typed
    pub input: String,

    /// The reply that was accepted for it, used verbatim as a class label
    pub output: String,
}

impl TrainingExample {
    /// Create a new pair. Accepts &str or String for both fields.
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input:  input.into(),
            output: output.into(),
        }
    }

    /// True when both sides carry text. Blank pairs are never appended.
    pub fn is_complete(&self) -> bool {
        !self.input.trim().is_empty() && !self.output.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_sides_are_incomplete() {
        assert!(TrainingExample::new("hi", "there").is_complete());
        assert!(!TrainingExample::new("  ", "there").is_complete());
        assert!(!TrainingExample::new("hi", "").is_complete());
    }

    #[test]
    fn test_json_shape() {
        let ex   = TrainingExample::new("hello", "world");
        let json = serde_json::to_string(&ex).unwrap();
        assert_eq!(json, r#"{"input":"hello","output":"world"}"#);
    }
}
