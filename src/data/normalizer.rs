// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Cleans raw user text before it is vectorized. The same
// function runs at training time and at prediction time, so the
// vocabulary built from the corpus lines up with the tokens seen
// at inference.
//
// Cleaning steps (applied in order, one pass over the chars):
//   1. Lowercase (full Unicode lowercase, so "İ" may expand)
//   2. Anything that is neither alphanumeric nor whitespace
//      becomes a space ("what's up?" → "what s up ")
//   3. Runs of whitespace collapse into one space
//   4. Leading/trailing whitespace is trimmed
//
// Reference: Rust Book §8 (Strings in Rust)

pub struct Normalizer;

impl Normalizer {
    /// Create a new Normalizer instance
    pub fn new() -> Self {
        Self
    }

    /// Normalize a raw string. Total: every input yields a String.
    pub fn normalize(&self, text: &str) -> String {
        let mut out        = String::with_capacity(text.len());
        let mut last_space = true;

        for c in text.chars().flat_map(char::to_lowercase) {
            if c.is_alphanumeric() {
                out.push(c);
                last_space = false;
            } else if !last_space {
                // punctuation, symbols, control chars and whitespace
                // all act as a single separator
                out.push(' ');
                last_space = true;
            }
        }

        if out.ends_with(' ') {
            out.pop();
        }
        out
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for `Normalizer::new().normalize(text)`
pub fn normalize(text: &str) -> String {
    Normalizer::new().normalize(text)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("Hello WORLD"), "hello world");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(normalize("what's up?!"), "what s up");
    }

    #[test]
    fn test_collapses_whitespace_and_trims() {
        assert_eq!(normalize("  a\t\tb \n c  "), "a b c");
    }

    #[test]
    fn test_keeps_non_ascii_letters_and_digits() {
        assert_eq!(normalize("Café №5, Größe"), "café 5 größe");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!... ---"), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("  Hi, there -- FRIEND!! ");
        assert_eq!(normalize(&once), once);
    }
}
