//! Emotion classification.
//!
//! Two interchangeable [`EmotionSource`] strategies:
//! - [`LocalRuleSource`]: first lexicon category with a hit wins, confidence 0.
//! - [`RemoteEnrichedSource`]: asks an [`EnrichmentPort`] for emotion and
//!   sentiment labels concurrently and wraps a local source as fallback.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::lexicon::{normalize, Category, Lexicon};
use super::sentiment::Sentiment;
use crate::enrichment::{top_label, EnrichmentPort};
use crate::error::EnrichmentError;

/// The closed emotion label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Sadness,
    Anger,
    Anxiety,
    Fear,
    Disgust,
    Surprise,
    Joy,
    Love,
    Loneliness,
    Stress,
    Confusion,
    Neutral,
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Emotion {
    pub const ALL: [Emotion; 12] = [
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Anxiety,
        Emotion::Fear,
        Emotion::Disgust,
        Emotion::Surprise,
        Emotion::Joy,
        Emotion::Love,
        Emotion::Loneliness,
        Emotion::Stress,
        Emotion::Confusion,
        Emotion::Neutral,
    ];

    /// Returns the wire label for the emotion
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Anxiety => "anxiety",
            Emotion::Fear => "fear",
            Emotion::Disgust => "disgust",
            Emotion::Surprise => "surprise",
            Emotion::Joy => "joy",
            Emotion::Love => "love",
            Emotion::Loneliness => "loneliness",
            Emotion::Stress => "stress",
            Emotion::Confusion => "confusion",
            Emotion::Neutral => "neutral",
        }
    }

    /// Map a remote classifier label onto the closed set.
    ///
    /// Covers the GoEmotions taxonomy, the Ekman labels used by the
    /// DistilRoBERTa emotion models, and the closed set's own labels.
    pub fn from_remote_label(label: &str) -> Option<Emotion> {
        let emotion = match label.trim().to_lowercase().as_str() {
            "sadness" | "sad" | "grief" | "remorse" | "disappointment" | "embarrassment" => {
                Emotion::Sadness
            }
            "anger" | "angry" | "annoyance" | "disapproval" => Emotion::Anger,
            "anxiety" | "nervousness" => Emotion::Anxiety,
            "fear" => Emotion::Fear,
            "disgust" => Emotion::Disgust,
            "surprise" | "realization" => Emotion::Surprise,
            "joy" | "happy" | "admiration" | "amusement" | "approval" | "excitement"
            | "gratitude" | "optimism" | "pride" | "relief" => Emotion::Joy,
            "love" | "caring" | "desire" => Emotion::Love,
            "loneliness" => Emotion::Loneliness,
            "stress" => Emotion::Stress,
            "confusion" | "curiosity" => Emotion::Confusion,
            "neutral" => Emotion::Neutral,
            _ => return None,
        };
        Some(emotion)
    }
}

/// What an [`EmotionSource`] produced for one utterance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionReading {
    pub emotion: Emotion,
    /// 0 for rule-based readings, else the remote top-label score.
    pub confidence: f32,
    /// Independent sentiment supplied by the remote source, if any.
    pub sentiment: Option<Sentiment>,
    /// Set when a remote call failed and local rules filled in.
    pub fallback: Option<EnrichmentError>,
}

impl EmotionReading {
    /// A rule-based reading.
    pub fn local(emotion: Emotion) -> Self {
        Self {
            emotion,
            confidence: 0.0,
            sentiment: None,
            fallback: None,
        }
    }

    /// Final sentiment: the remote override if present, else the table value.
    pub fn resolved_sentiment(&self) -> Sentiment {
        self.sentiment
            .unwrap_or_else(|| Sentiment::derive(self.emotion))
    }
}

/// Strategy producing an emotion reading for an utterance.
#[async_trait]
pub trait EmotionSource: Send + Sync + 'static {
    /// Classify `text`. Never fails: sources degrade to rules internally.
    async fn read(&self, text: &str) -> EmotionReading;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Keyword-rule emotion classifier.
#[derive(Debug, Clone)]
pub struct LocalRuleSource {
    lexicon: Arc<Lexicon>,
}

impl Default for LocalRuleSource {
    fn default() -> Self {
        Self::new(Arc::new(Lexicon::default()))
    }
}

impl LocalRuleSource {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Classify raw text with the keyword rules.
    pub fn classify(&self, text: &str) -> EmotionReading {
        self.classify_normalized(&normalize(text))
    }

    /// Classify text already passed through [`normalize`].
    pub fn classify_normalized(&self, normalized: &str) -> EmotionReading {
        let emotion = self
            .lexicon
            .emotion_order()
            .iter()
            .copied()
            .find(|emotion| self.lexicon.any_match(Category::Emotion(*emotion), normalized))
            .unwrap_or(Emotion::Neutral);

        EmotionReading::local(emotion)
    }
}

#[async_trait]
impl EmotionSource for LocalRuleSource {
    async fn read(&self, text: &str) -> EmotionReading {
        self.classify(text)
    }

    fn name(&self) -> &'static str {
        "local_rules"
    }
}

/// Remote-first emotion source that falls back to local rules.
pub struct RemoteEnrichedSource {
    local: LocalRuleSource,
    port: Arc<dyn EnrichmentPort>,
    timeout: Duration,
}

impl RemoteEnrichedSource {
    pub fn new(local: LocalRuleSource, port: Arc<dyn EnrichmentPort>, timeout: Duration) -> Self {
        Self {
            local,
            port,
            timeout,
        }
    }

    fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }

    async fn remote_emotion(&self, text: &str) -> Result<(Emotion, f32), EnrichmentError> {
        let scores = timeout(self.timeout, self.port.emotion_scores(text))
            .await
            .map_err(|_| EnrichmentError::Timeout(self.timeout_ms()))??;

        let top = top_label(&scores)
            .ok_or_else(|| EnrichmentError::Malformed("empty emotion label list".to_string()))?;
        let emotion = Emotion::from_remote_label(&top.label)
            .ok_or_else(|| EnrichmentError::UnknownLabel(top.label.clone()))?;

        Ok((emotion, top.score.clamp(0.0, 1.0)))
    }

    async fn remote_sentiment(&self, text: &str) -> Result<Sentiment, EnrichmentError> {
        let scores = timeout(self.timeout, self.port.sentiment_scores(text))
            .await
            .map_err(|_| EnrichmentError::Timeout(self.timeout_ms()))??;

        let top = top_label(&scores)
            .ok_or_else(|| EnrichmentError::Malformed("empty sentiment label list".to_string()))?;
        Sentiment::from_remote_label(&top.label)
            .ok_or_else(|| EnrichmentError::UnknownLabel(top.label.clone()))
    }
}

#[async_trait]
impl EmotionSource for RemoteEnrichedSource {
    async fn read(&self, text: &str) -> EmotionReading {
        let (emotion, sentiment) =
            tokio::join!(self.remote_emotion(text), self.remote_sentiment(text));

        match (emotion, sentiment) {
            (Ok((emotion, confidence)), Ok(sentiment)) => {
                debug!(%emotion, %sentiment, confidence, "Enriched emotion reading");
                EmotionReading {
                    emotion,
                    confidence,
                    sentiment: Some(sentiment),
                    fallback: None,
                }
            }
            (Ok((emotion, confidence)), Err(e)) => {
                warn!("Sentiment enrichment failed, deriving from emotion: {}", e);
                EmotionReading {
                    emotion,
                    confidence,
                    sentiment: None,
                    fallback: Some(e),
                }
            }
            (Err(e), _) => {
                warn!("Emotion enrichment failed, using local rules: {}", e);
                let mut reading = self.local.classify(text);
                reading.fallback = Some(e);
                reading
            }
        }
    }

    fn name(&self) -> &'static str {
        "remote_enriched"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::LabelScore;

    struct FixedPort {
        emotion: Result<Vec<LabelScore>, EnrichmentError>,
        sentiment: Result<Vec<LabelScore>, EnrichmentError>,
    }

    #[async_trait]
    impl EnrichmentPort for FixedPort {
        async fn emotion_scores(&self, _text: &str) -> Result<Vec<LabelScore>, EnrichmentError> {
            self.emotion.clone()
        }

        async fn sentiment_scores(&self, _text: &str) -> Result<Vec<LabelScore>, EnrichmentError> {
            self.sentiment.clone()
        }
    }

    fn scores(pairs: &[(&str, f32)]) -> Vec<LabelScore> {
        pairs
            .iter()
            .map(|(label, score)| LabelScore::new(*label, *score))
            .collect()
    }

    fn remote(port: FixedPort) -> RemoteEnrichedSource {
        RemoteEnrichedSource::new(
            LocalRuleSource::default(),
            Arc::new(port),
            Duration::from_millis(500),
        )
    }

    #[test]
    fn test_local_emotion_detection() {
        let source = LocalRuleSource::default();

        let cases = [
            ("I'm feeling really anxious about my exam", Emotion::Anxiety),
            ("Best day ever, I'm so happy!", Emotion::Joy),
            ("I feel so lonely tonight", Emotion::Loneliness),
            ("I'm FURIOUS with my boss", Emotion::Anger),
            ("The weather is mild", Emotion::Neutral),
        ];
        for (text, expected) in cases {
            assert_eq!(source.classify(text).emotion, expected, "{}", text);
        }
    }

    #[test]
    fn test_anger_ignores_words_containing_rage() {
        let source = LocalRuleSource::default();

        for text in [
            "My friend encouraged me today",
            "It takes courage to try again",
            "My grades are about average",
            "I bought more cloud storage",
        ] {
            assert_eq!(source.classify(text).emotion, Emotion::Neutral, "{}", text);
        }

        assert_eq!(source.classify("I was enraged by the news").emotion, Emotion::Anger);
        assert_eq!(source.classify("She was in a rage all evening").emotion, Emotion::Anger);
    }

    #[test]
    fn test_local_precedence_first_category_wins() {
        let source = LocalRuleSource::default();
        // Both sadness and anxiety phrases; sadness is declared first.
        let reading = source.classify("I'm sad and anxious");
        assert_eq!(reading.emotion, Emotion::Sadness);
        assert_eq!(reading.confidence, 0.0);
        assert!(reading.fallback.is_none());
    }

    #[test]
    fn test_unhappy_is_not_joy() {
        let source = LocalRuleSource::default();
        assert_eq!(source.classify("I'm unhappy").emotion, Emotion::Sadness);
    }

    #[test]
    fn test_empty_input_is_neutral() {
        let source = LocalRuleSource::default();
        assert_eq!(source.classify("").emotion, Emotion::Neutral);
        assert_eq!(source.classify("   ").emotion, Emotion::Neutral);
    }

    #[test]
    fn test_remote_label_aliases() {
        assert_eq!(Emotion::from_remote_label("admiration"), Some(Emotion::Joy));
        assert_eq!(Emotion::from_remote_label("nervousness"), Some(Emotion::Anxiety));
        assert_eq!(Emotion::from_remote_label("grief"), Some(Emotion::Sadness));
        assert_eq!(Emotion::from_remote_label("  Caring "), Some(Emotion::Love));
        assert_eq!(Emotion::from_remote_label("LABEL_7"), None);
        for emotion in Emotion::ALL {
            assert_eq!(Emotion::from_remote_label(emotion.label()), Some(emotion));
        }
    }

    #[tokio::test]
    async fn test_remote_success_uses_top_label() {
        let source = remote(FixedPort {
            emotion: Ok(scores(&[("neutral", 0.1), ("nervousness", 0.82)])),
            sentiment: Ok(scores(&[("negative", 0.7), ("neutral", 0.3)])),
        });

        let reading = source.read("whatever").await;
        assert_eq!(reading.emotion, Emotion::Anxiety);
        assert!((reading.confidence - 0.82).abs() < f32::EPSILON);
        assert_eq!(reading.sentiment, Some(Sentiment::Negative));
        assert!(reading.fallback.is_none());
    }

    #[tokio::test]
    async fn test_remote_sentiment_overrides_table() {
        let source = remote(FixedPort {
            emotion: Ok(scores(&[("surprise", 0.9)])),
            sentiment: Ok(scores(&[("LABEL_0", 0.9)])),
        });

        let reading = source.read("what just happened").await;
        assert_eq!(Sentiment::derive(reading.emotion), Sentiment::Positive);
        assert_eq!(reading.resolved_sentiment(), Sentiment::Negative);
    }

    #[tokio::test]
    async fn test_remote_emotion_failure_falls_back_to_local() {
        let source = remote(FixedPort {
            emotion: Err(EnrichmentError::Status {
                status: 503,
                body: "loading".to_string(),
            }),
            sentiment: Ok(scores(&[("positive", 0.99)])),
        });

        let reading = source.read("I'm so scared").await;
        assert_eq!(reading.emotion, Emotion::Fear);
        assert_eq!(reading.confidence, 0.0);
        assert_eq!(reading.sentiment, None);
        assert!(matches!(reading.fallback, Some(EnrichmentError::Status { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_remote_unknown_label_falls_back() {
        let source = remote(FixedPort {
            emotion: Ok(scores(&[("LABEL_3", 0.9)])),
            sentiment: Ok(scores(&[("neutral", 0.9)])),
        });

        let reading = source.read("I'm happy").await;
        assert_eq!(reading.emotion, Emotion::Joy);
        assert_eq!(
            reading.fallback,
            Some(EnrichmentError::UnknownLabel("LABEL_3".to_string()))
        );
    }

    #[tokio::test]
    async fn test_remote_sentiment_failure_keeps_emotion() {
        let source = remote(FixedPort {
            emotion: Ok(scores(&[("grief", 0.6)])),
            sentiment: Err(EnrichmentError::Http("connection refused".to_string())),
        });

        let reading = source.read("hm").await;
        assert_eq!(reading.emotion, Emotion::Sadness);
        assert!((reading.confidence - 0.6).abs() < f32::EPSILON);
        assert_eq!(reading.resolved_sentiment(), Sentiment::Negative);
        assert!(reading.fallback.is_some());
    }

    #[tokio::test]
    async fn test_remote_empty_list_is_malformed() {
        let source = remote(FixedPort {
            emotion: Ok(vec![]),
            sentiment: Ok(vec![]),
        });

        let reading = source.read("").await;
        assert_eq!(reading.emotion, Emotion::Neutral);
        assert!(matches!(reading.fallback, Some(EnrichmentError::Malformed(_))));
    }
}
