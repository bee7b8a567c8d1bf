//! MindCare core: rule-based wellness chat analysis.
//!
//! Classifies an utterance into emotion, sentiment, intent and crisis
//! severity, then picks a supportive reply. An optional remote classifier can
//! enrich emotion and sentiment; every remote failure falls back to the local
//! rules.

pub mod brain;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod responses;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use brain::{
    Analysis, AnalysisResult, ChatTurn, CrisisDetection, Emotion, Intent, Sentiment, Severity,
    WellnessAnalyzer,
};
pub use config::EngineConfig;
pub use error::{AppError, EnrichmentError};
pub use responses::{ResponseContext, ResponsePackage};
