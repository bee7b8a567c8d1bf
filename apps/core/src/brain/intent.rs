//! Intent Classification using lexicon phrase patterns.
//!
//! Ordered category scan, first match wins:
//! `ask_advice` > `venting` > `seeking_support`, else `general_conversation`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::lexicon::{normalize, Category, Lexicon};

/// Detected conversational intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Asking for guidance ("what should i do", "tips", ...)
    AskAdvice,
    /// Letting feelings out, not asking for anything
    Venting,
    /// Explicitly asking for help or company
    SeekingSupport,
    /// Default
    GeneralConversation,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Scan priority. `GeneralConversation` is the fallback and has no patterns.
    pub const PRIORITY: [Intent; 3] = [Intent::AskAdvice, Intent::Venting, Intent::SeekingSupport];

    pub const ALL: [Intent; 4] = [
        Intent::AskAdvice,
        Intent::Venting,
        Intent::SeekingSupport,
        Intent::GeneralConversation,
    ];

    /// Returns the wire label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::AskAdvice => "ask_advice",
            Intent::Venting => "venting",
            Intent::SeekingSupport => "seeking_support",
            Intent::GeneralConversation => "general_conversation",
        }
    }
}

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    /// Detected intent
    pub intent: Intent,
    /// Patterns of the winning category that matched
    pub matched_patterns: Vec<String>,
}

/// Intent classifier over the shared lexicon
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    lexicon: Arc<Lexicon>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(Arc::new(Lexicon::default()))
    }
}

impl IntentClassifier {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Classify the intent of a text
    pub fn classify(&self, text: &str) -> IntentResult {
        self.classify_normalized(&normalize(text))
    }

    /// Classify text already passed through [`normalize`].
    pub fn classify_normalized(&self, normalized: &str) -> IntentResult {
        for intent in Intent::PRIORITY {
            let hits = self.lexicon.matches(Category::Intent(intent), normalized);
            if !hits.is_empty() {
                return IntentResult {
                    intent,
                    matched_patterns: hits.into_iter().map(str::to_string).collect(),
                };
            }
        }

        IntentResult {
            intent: Intent::GeneralConversation,
            matched_patterns: vec![],
        }
    }
}
