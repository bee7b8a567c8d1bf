//! # Enrichment Module
//!
//! Optional remote classifier that supplies probabilistic emotion and
//! sentiment labels. Always best-effort: every failure is recovered by the
//! local rules in [`crate::brain::emotion`].
//!
//! ## Components
//! - [`EnrichmentPort`]: the injectable seam (mock it in tests)
//! - `huggingface`: Hugging Face inference API implementation

pub mod huggingface;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::EnrichmentError;

pub use huggingface::HuggingFaceClient;

/// One label/score pair from a remote classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Highest-scoring entry. NaN scores never win.
pub fn top_label(scores: &[LabelScore]) -> Option<&LabelScore> {
    scores
        .iter()
        .filter(|s| !s.score.is_nan())
        .max_by(|a, b| a.score.total_cmp(&b.score))
}

/// Defines the interface of a remote enrichment source.
///
/// Implementations only transport and decode; label mapping and fallback are
/// handled by the caller.
#[async_trait]
pub trait EnrichmentPort: Send + Sync + 'static {
    /// Emotion label distribution for `text`.
    async fn emotion_scores(&self, text: &str) -> Result<Vec<LabelScore>, EnrichmentError>;

    /// Sentiment label distribution for `text`.
    async fn sentiment_scores(&self, text: &str) -> Result<Vec<LabelScore>, EnrichmentError>;
}
