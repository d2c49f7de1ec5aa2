use serde::{Deserialize, Serialize};

/// What the user is asking for, decided before any model call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    CodeAnalysis,
    CodeGeneration,
    GeneralChat,
}

impl Intent {
    /// Code-related exchanges are the ones written to the analysis store.
    pub fn is_code_related(&self) -> bool {
        !matches!(self, Intent::GeneralChat)
    }
}

/// Classifier seam. Callers only see this trait, so the keyword heuristic
/// below can be replaced without touching them.
pub trait IntentClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Intent;
}

/// Substring-based classifier.
///
/// Matching is plain `contains` with no word-boundary awareness: "classic"
/// contains "class" and is treated as code. Code tokens win over request
/// tokens when both match.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

const CODE_TOKENS: &[&str] = &[
    "def", "class", "=", "{", "}", "(", ")", "print", "return",
];

const REQUEST_TOKENS: &[&str] = &[
    "write", "create", "make", "required", "code", "function", "program",
];

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    fn looks_like_code(text: &str) -> bool {
        CODE_TOKENS.iter().any(|token| text.contains(token))
    }

    fn looks_like_request(text: &str) -> bool {
        REQUEST_TOKENS.iter().any(|token| text.contains(token))
    }
}

impl IntentClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Intent {
        if Self::looks_like_code(text) {
            Intent::CodeAnalysis
        } else if Self::looks_like_request(text) {
            Intent::CodeGeneration
        } else {
            Intent::GeneralChat
        }
    }
}
