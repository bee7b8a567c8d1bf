//! Wellness Analyzer - Main orchestrator for the Brain module.
//!
//! Coordinates severity, intent and emotion classification, crisis detection
//! and reply selection.
//!
//! Severity and intent are always local and synchronous; only the emotion
//! source may touch the network, and it degrades to rules on its own. A
//! panicking emotion source only resets emotion, sentiment and confidence;
//! the local severity verdict is always kept.

use chrono::Utc;
use futures::FutureExt;
use serde::Serialize;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use super::analysis::{Analysis, AnalysisResult, FallbackReason};
use super::crisis::{log_crisis_event, CrisisDetection, CrisisEvent, CrisisResources};
use super::emotion::{Emotion, EmotionSource, LocalRuleSource, RemoteEnrichedSource};
use super::intent::IntentClassifier;
use super::lexicon::{normalize, Lexicon};
use super::severity::SeverityClassifier;
use crate::config::EngineConfig;
use crate::enrichment::{EnrichmentPort, HuggingFaceClient};
use crate::responses::{
    ChoiceSource, RandomChoice, ResponseCatalog, ResponseContext, ResponsePackage,
    ResponseSelector,
};

/// Everything produced for one chat turn.
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    pub analysis: Analysis,
    pub crisis: CrisisDetection,
    pub response: ResponsePackage,
}

/// Main analyzer that orchestrates all classification components
pub struct WellnessAnalyzer {
    severity: SeverityClassifier,
    intents: IntentClassifier,
    emotions: Box<dyn EmotionSource>,
    resources: Arc<CrisisResources>,
    responses: ResponseSelector,
}

impl Default for WellnessAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl WellnessAnalyzer {
    /// Local rules, default lexicon and helplines, entropy-seeded replies.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> WellnessAnalyzerBuilder {
        WellnessAnalyzerBuilder::default()
    }

    /// Build from engine configuration. Enrichment is wired in only when the
    /// configuration is active and the client can be constructed.
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut builder = Self::builder().response_seed(config.response_seed);

        if config.enrichment.is_active() {
            match HuggingFaceClient::new(&config.enrichment) {
                Ok(client) => {
                    info!(
                        "Remote enrichment enabled ({} / {})",
                        config.enrichment.emotion_model, config.enrichment.sentiment_model
                    );
                    builder = builder.enrichment(Arc::new(client), config.enrichment.timeout());
                }
                Err(e) => warn!("Failed to build enrichment client, using local rules: {}", e),
            }
        }

        builder.build()
    }

    /// Name of the active emotion source, for diagnostics.
    pub fn emotion_source(&self) -> &'static str {
        self.emotions.name()
    }

    pub fn resources(&self) -> &CrisisResources {
        &self.resources
    }

    /// Classify an utterance. Never fails.
    pub async fn analyze(&self, text: &str) -> AnalysisResult {
        self.analyze_detailed(text).await.result
    }

    /// Classify an utterance and report indicators, fallbacks and timing.
    pub async fn analyze_detailed(&self, text: &str) -> Analysis {
        let start = Instant::now();

        let normalized = normalize(text);
        let (result, matched_indicators, fallback) = if normalized.is_empty() {
            (AnalysisResult::default(), vec![], None)
        } else {
            self.run_pipeline(text, &normalized).await
        };

        let analysis = Analysis {
            result,
            matched_indicators,
            fallback,
            processing_time_ms: start.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        };
        debug!("Analysis complete: {}", analysis.summary());
        analysis
    }

    /// Each stage sits behind its own panic boundary so a failing emotion
    /// source never discards the severity verdict.
    async fn run_pipeline(
        &self,
        text: &str,
        normalized: &str,
    ) -> (AnalysisResult, Vec<String>, Option<FallbackReason>) {
        // 1. Local, never blocked by the network
        let local = panic::catch_unwind(AssertUnwindSafe(|| {
            (
                self.severity.classify_normalized(normalized),
                self.intents.classify_normalized(normalized),
            )
        }));
        let (verdict, intent) = match local {
            Ok(parts) => parts,
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!("Local classification failed, returning neutral default: {}", message);
                return (
                    AnalysisResult::default(),
                    vec![],
                    Some(FallbackReason::Internal(message)),
                );
            }
        };

        let mut result = AnalysisResult {
            severity: verdict.severity,
            intent: intent.intent,
            ..AnalysisResult::default()
        };

        // 2. Emotion and sentiment (local or enriched)
        let fallback = match AssertUnwindSafe(self.emotions.read(text))
            .catch_unwind()
            .await
        {
            Ok(reading) => {
                result.emotion = reading.emotion;
                result.sentiment = reading.resolved_sentiment();
                result.confidence = reading.confidence;
                reading.fallback.map(FallbackReason::Enrichment)
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!(
                    "Emotion source {} failed, keeping local severity and intent: {}",
                    self.emotions.name(),
                    message
                );
                Some(FallbackReason::Internal(message))
            }
        };

        (result, verdict.matched_indicators, fallback)
    }

    /// Crisis detection, sharing the severity classifier with `analyze`.
    pub fn detect_crisis(&self, text: &str) -> CrisisDetection {
        self.resources.detection(self.severity.classify(text))
    }

    /// True iff any crisis- or moderate-tier phrase matches.
    pub fn has_crisis_indicators(&self, text: &str) -> bool {
        self.severity.has_risk_indicators(text)
    }

    pub fn build_response(&self, context: &ResponseContext) -> ResponsePackage {
        self.responses.select(context)
    }

    pub fn emotional_validation(&self, emotion: Emotion) -> &'static str {
        self.responses.emotional_validation(emotion)
    }

    pub fn processing_fallback_reply(&self) -> &'static str {
        self.responses.processing_fallback_reply()
    }

    /// Analyze, detect crisis and build the reply for one chat turn.
    ///
    /// A crisis verdict logs a metadata-only [`CrisisEvent`] for `user_id`.
    pub async fn respond(&self, text: &str, user_id: Option<String>) -> ChatTurn {
        let analysis = self.analyze_detailed(text).await;
        let crisis = self.detect_crisis(text);

        if crisis.is_crisis {
            log_crisis_event(&CrisisEvent::new(user_id, crisis.severity));
        }

        let context = ResponseContext {
            emotion: analysis.result.emotion,
            sentiment: analysis.result.sentiment,
            intent: analysis.result.intent,
            severity: crisis.severity,
        };

        let response = match &analysis.fallback {
            Some(FallbackReason::Internal(_)) if !crisis.is_crisis => ResponsePackage {
                primary_reply_text: self.processing_fallback_reply().to_string(),
                follow_up_wellness_tip_text: None,
                is_crisis_override: false,
                grounding_steps: vec![],
            },
            _ => self.build_response(&context),
        };

        ChatTurn {
            analysis,
            crisis,
            response,
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Builder for [`WellnessAnalyzer`].
#[derive(Default)]
pub struct WellnessAnalyzerBuilder {
    lexicon: Option<Lexicon>,
    resources: Option<CrisisResources>,
    catalog: Option<ResponseCatalog>,
    chooser: Option<Box<dyn ChoiceSource>>,
    seed: Option<u64>,
    enrichment: Option<(Arc<dyn EnrichmentPort>, Duration)>,
    emotion_source: Option<Box<dyn EmotionSource>>,
}

impl WellnessAnalyzerBuilder {
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    pub fn resources(mut self, resources: CrisisResources) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn catalog(mut self, catalog: ResponseCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Inject the template chooser. Takes precedence over `response_seed`.
    pub fn chooser(mut self, chooser: Box<dyn ChoiceSource>) -> Self {
        self.chooser = Some(chooser);
        self
    }

    pub fn response_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enrich emotion and sentiment through `port`, each call bounded by
    /// `timeout`, with local rules as fallback.
    pub fn enrichment(mut self, port: Arc<dyn EnrichmentPort>, timeout: Duration) -> Self {
        self.enrichment = Some((port, timeout));
        self
    }

    /// Replace the emotion source entirely. Takes precedence over `enrichment`.
    pub fn emotion_source(mut self, source: Box<dyn EmotionSource>) -> Self {
        self.emotion_source = Some(source);
        self
    }

    pub fn build(self) -> WellnessAnalyzer {
        let lexicon = Arc::new(self.lexicon.unwrap_or_default());
        let resources = Arc::new(self.resources.unwrap_or_default());

        let emotions: Box<dyn EmotionSource> = match (self.emotion_source, self.enrichment) {
            (Some(source), _) => source,
            (None, Some((port, timeout))) => Box::new(RemoteEnrichedSource::new(
                LocalRuleSource::new(lexicon.clone()),
                port,
                timeout,
            )),
            (None, None) => Box::new(LocalRuleSource::new(lexicon.clone())),
        };

        let chooser: Box<dyn ChoiceSource> = match (self.chooser, self.seed) {
            (Some(chooser), _) => chooser,
            (None, Some(seed)) => Box::new(RandomChoice::seeded(seed)),
            (None, None) => Box::new(RandomChoice::from_entropy()),
        };

        let responses = ResponseSelector::new(
            Arc::new(self.catalog.unwrap_or_default()),
            resources.clone(),
            chooser,
        );

        WellnessAnalyzer {
            severity: SeverityClassifier::new(lexicon.clone()),
            intents: IntentClassifier::new(lexicon),
            emotions,
            resources,
            responses,
        }
    }
}
