//! Sentiment Deriver - coarse polarity from the dominant emotion.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::emotion::Emotion;

/// Coarse polarity of an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Fixed emotion to sentiment table.
    pub fn derive(emotion: Emotion) -> Sentiment {
        match emotion {
            Emotion::Joy | Emotion::Love | Emotion::Surprise => Sentiment::Positive,
            Emotion::Sadness
            | Emotion::Anger
            | Emotion::Fear
            | Emotion::Disgust
            | Emotion::Anxiety
            | Emotion::Stress
            | Emotion::Confusion
            | Emotion::Loneliness => Sentiment::Negative,
            Emotion::Neutral => Sentiment::Neutral,
        }
    }

    /// Parse a remote sentiment label.
    ///
    /// Accepts plain names, three-letter forms and the `LABEL_0..2` ids used
    /// by the cardiffnlp RoBERTa sentiment models.
    pub fn from_remote_label(label: &str) -> Option<Sentiment> {
        match label.trim().to_lowercase().as_str() {
            "positive" | "pos" | "label_2" => Some(Sentiment::Positive),
            "neutral" | "neu" | "label_1" => Some(Sentiment::Neutral),
            "negative" | "neg" | "label_0" => Some(Sentiment::Negative),
            _ => None,
        }
    }
}
