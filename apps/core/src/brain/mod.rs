//! # Brain Module
//!
//! Fast, rule-based analysis of one chat utterance.
//! Runs BEFORE a reply is chosen and never fails.
//!
//! ## Components
//! - `lexicon`: trigger phrase tables and input normalisation
//! - `severity`: crisis / moderate / watch tier scan
//! - `emotion`: local rules or remote enrichment
//! - `sentiment`: emotion to sentiment table
//! - `intent`: conversational intent patterns
//! - `crisis`: helplines, grounding steps and crisis events
//! - `analysis`: output data structures
//! - `analyzer`: main orchestrator

pub mod analysis;
pub mod analyzer;
pub mod crisis;
pub mod emotion;
pub mod intent;
pub mod lexicon;
pub mod sentiment;
pub mod severity;

// Re-export main types for convenience
pub use analysis::{Analysis, AnalysisResult, FallbackReason};
pub use analyzer::{ChatTurn, WellnessAnalyzer, WellnessAnalyzerBuilder};
pub use crisis::{log_crisis_event, CrisisDetection, CrisisEvent, CrisisResources, Helpline};
pub use emotion::{Emotion, EmotionReading, EmotionSource, LocalRuleSource, RemoteEnrichedSource};
pub use intent::{Intent, IntentClassifier, IntentResult};
pub use lexicon::{normalize, Category, Lexicon, LexiconBuilder};
pub use sentiment::Sentiment;
pub use severity::{Severity, SeverityClassifier, SeverityVerdict};
