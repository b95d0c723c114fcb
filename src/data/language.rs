// ============================================================
// Layer 4 — Language Detection
// ============================================================
// Guesses the language of a chat message when the caller did
// not supply one. The result is a two-letter code understood by
// chat_use_case::choose_system_prompt; anything the prompts do
// not distinguish, and any failed detection, is "".
//
// The lingua detector is built once and shared. Low accuracy
// mode keeps the loaded n-gram models small.

use std::sync::OnceLock;

use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};

fn detector() -> &'static LanguageDetector {
    static DETECTOR: OnceLock<LanguageDetector> = OnceLock::new();
    DETECTOR.get_or_init(|| {
        LanguageDetectorBuilder::from_all_languages()
            .with_low_accuracy_mode()
            .build()
    })
}

/// Language code of `text`: "sw", "en", "id" or "" when unknown
pub fn detect_language(text: &str) -> &'static str {
    if text.trim().is_empty() {
        return "";
    }
    let code = match detector().detect_language_of(text) {
        Some(Language::Swahili) => "sw",
        Some(Language::English) => "en",
        Some(Language::Indonesian) => "id",
        _ => "",
    };
    tracing::debug!("Detected language {code:?}");
    code
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_swahili_and_english() {
        assert_eq!(
            detect_language("Habari za asubuhi rafiki yangu, ningependa kujua hali ya hewa ya leo katika mji wa Nairobi"),
            "sw"
        );
        assert_eq!(
            detect_language("Good morning my friend, I would like to know what the weather is like in the city today"),
            "en"
        );
    }

    #[test]
    fn test_blank_text_is_unknown() {
        assert_eq!(detect_language(""), "");
        assert_eq!(detect_language("   "), "");
    }
}
