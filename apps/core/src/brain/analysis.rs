//! Analysis output - the structured result handed to the chat layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::emotion::Emotion;
use super::intent::Intent;
use super::sentiment::Sentiment;
use super::severity::Severity;
use crate::error::EnrichmentError;

/// Classification of one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub emotion: Emotion,
    pub sentiment: Sentiment,
    pub severity: Severity,
    pub intent: Intent,
    /// 0 for rule-based readings, else the remote top-label score.
    pub confidence: f32,
}

impl Default for AnalysisResult {
    /// The neutral default used for empty input and internal failures.
    fn default() -> Self {
        Self {
            emotion: Emotion::Neutral,
            sentiment: Sentiment::Neutral,
            severity: Severity::Normal,
            intent: Intent::GeneralConversation,
            confidence: 0.0,
        }
    }
}

/// Why part of the result came from a fallback path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", content = "error", rename_all = "snake_case")]
pub enum FallbackReason {
    /// The remote enrichment source failed; local rules filled in.
    Enrichment(EnrichmentError),
    /// The pipeline itself failed; the neutral default was returned.
    Internal(String),
}

/// Detailed analysis outcome.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub result: AnalysisResult,
    /// Indicators behind the severity verdict.
    pub matched_indicators: Vec<String>,
    /// Set whenever a fallback was taken.
    pub fallback: Option<FallbackReason>,
    pub processing_time_ms: u64,
    pub timestamp: DateTime<Utc>,
}

impl Analysis {
    /// Whether the result is degraded (any fallback taken).
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Emotion: {} ({:.0}%), Sentiment: {}, Severity: {}, Intent: {}, Fallback: {}",
            self.result.emotion,
            self.result.confidence * 100.0,
            self.result.sentiment,
            self.result.severity,
            self.result.intent,
            if self.is_fallback() { "yes" } else { "no" }
        )
    }
}
