//! Brain Module Tests
//!
//! Tests for the severity tiers, emotion precedence, sentiment table, intent
//! priority and the analyzer orchestrator.

use crate::brain::{
    normalize, Category, Emotion, Intent, IntentClassifier, Lexicon, LocalRuleSource, Sentiment,
    Severity, SeverityClassifier, WellnessAnalyzer,
};
use crate::responses::FixedChoice;
use std::sync::Arc;

fn analyzer() -> WellnessAnalyzer {
    WellnessAnalyzer::builder()
        .chooser(Box::new(FixedChoice::first()))
        .build()
}

#[cfg(test)]
mod severity_tests {
    use super::*;

    #[test]
    fn test_every_crisis_phrase_is_detected() {
        let lexicon = Lexicon::default();
        let brain = analyzer();

        for phrase in lexicon.lookup(Category::SeverityCrisis) {
            let text = format!("Honestly, {} tonight", phrase);
            let detection = brain.detect_crisis(&text);
            assert_eq!(detection.severity, Severity::Crisis, "Expected Crisis for '{}'", text);
            assert!(detection.is_crisis);
            assert!(!detection.helpline_number.is_empty());
        }
    }

    #[test]
    fn test_crisis_preempts_moderate() {
        let classifier = SeverityClassifier::default();

        let verdict = classifier.classify("I feel hopeless and worthless, I want to kill myself");

        assert_eq!(verdict.severity, Severity::Crisis);
        assert_eq!(verdict.matched_indicators, vec!["kill myself".to_string()]);
    }

    #[test]
    fn test_all_crisis_matches_collected() {
        let classifier = SeverityClassifier::default();

        let verdict = classifier.classify("I'm suicidal, I want to end it all");

        assert_eq!(verdict.severity, Severity::Crisis);
        assert!(verdict.matched_indicators.contains(&"suicidal".to_string()));
        assert!(verdict.matched_indicators.contains(&"end it all".to_string()));
    }

    #[test]
    fn test_moderate_tier() {
        let brain = analyzer();

        let detection = brain.detect_crisis("I feel so hopeless");

        assert_eq!(detection.severity, Severity::Moderate);
        assert!(!detection.is_crisis);
        assert!(detection.grounding_steps.is_empty());
    }

    #[test]
    fn test_watch_tier_keeps_normal() {
        let classifier = SeverityClassifier::default();

        let verdict = classifier.classify("I'm a little anxious and stressed");

        assert_eq!(verdict.severity, Severity::Normal);
        assert_eq!(
            verdict.matched_indicators,
            vec!["anxious".to_string(), "stressed".to_string()]
        );
    }

    #[test]
    fn test_case_and_apostrophe_folding() {
        let classifier = SeverityClassifier::default();

        assert_eq!(classifier.classify("I DON\u{2019}T WANT TO LIVE").severity, Severity::Crisis);
        assert_eq!(classifier.classify("  Kill   Myself ").severity, Severity::Crisis);
    }
}

#[cfg(test)]
mod emotion_tests {
    use super::*;

    #[test]
    fn test_first_category_wins() {
        let source = LocalRuleSource::default();

        // Sadness precedes joy in the declared order.
        let reading = source.classify("I'm sad but also a bit happy");
        assert_eq!(reading.emotion, Emotion::Sadness);
        assert_eq!(reading.confidence, 0.0);
    }

    #[test]
    fn test_substring_semantics() {
        let source = LocalRuleSource::default();

        // Plain substring match: "down" hits inside "downtown".
        assert_eq!(source.classify("Walking downtown").emotion, Emotion::Sadness);
        assert_eq!(source.classify("The weather is mild").emotion, Emotion::Neutral);
    }

    #[test]
    fn test_custom_emotion_order() {
        let lexicon = Lexicon::builder()
            .emotion_order(vec![Emotion::Joy, Emotion::Sadness])
            .build();
        let source = LocalRuleSource::new(Arc::new(lexicon));

        assert_eq!(source.classify("sad but happy").emotion, Emotion::Joy);
        // Categories left out of the order are never scanned.
        assert_eq!(source.classify("so angry").emotion, Emotion::Neutral);
    }

    #[test]
    fn test_sentiment_table_is_pure() {
        for emotion in Emotion::ALL {
            let expected = Sentiment::derive(emotion);
            for _ in 0..3 {
                assert_eq!(Sentiment::derive(emotion), expected);
            }
        }
        assert_eq!(Sentiment::derive(Emotion::Surprise), Sentiment::Positive);
        assert_eq!(Sentiment::derive(Emotion::Confusion), Sentiment::Negative);
    }
}

#[cfg(test)]
mod intent_tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let classifier = IntentClassifier::default();

        // ask_advice outranks seeking_support
        let result = classifier.classify("I need help, what should I do?");
        assert_eq!(result.intent, Intent::AskAdvice);

        // venting outranks seeking_support
        let result = classifier.classify("I'm fed up, please help");
        assert_eq!(result.intent, Intent::Venting);
    }

    #[test]
    fn test_general_conversation_default() {
        let classifier = IntentClassifier::default();

        for text in ["", "Nice weather today", "I went for a walk"] {
            assert_eq!(classifier.classify(text).intent, Intent::GeneralConversation);
        }
    }

    #[test]
    fn test_intent_override() {
        let lexicon = Lexicon::builder()
            .phrases(Category::Intent(Intent::Venting), ["Rant", "  ", "rant"])
            .build();

        assert_eq!(lexicon.lookup(Category::Intent(Intent::Venting)), &["rant".to_string()]);

        let classifier = IntentClassifier::new(Arc::new(lexicon));
        assert_eq!(classifier.classify("quick rant incoming").intent, Intent::Venting);
        assert_eq!(classifier.classify("I'm fed up").intent, Intent::GeneralConversation);
    }
}

#[cfg(test)]
mod analyzer_tests {
    use super::*;

    #[tokio::test]
    async fn test_anxious_exam_scenario() {
        let brain = analyzer();

        let analysis = brain
            .analyze_detailed("I'm feeling really anxious about my exam")
            .await;

        assert_eq!(analysis.result.emotion, Emotion::Anxiety);
        assert_eq!(analysis.result.sentiment, Sentiment::Negative);
        assert_eq!(analysis.result.severity, Severity::Normal);
        assert_eq!(analysis.result.intent, Intent::GeneralConversation);
        assert_eq!(analysis.matched_indicators, vec!["anxious".to_string()]);
        assert!(!analysis.is_fallback());
    }

    #[tokio::test]
    async fn test_happy_scenario() {
        let brain = analyzer();

        let result = brain.analyze("Best day ever, I'm so happy!").await;

        assert_eq!(result.emotion, Emotion::Joy);
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.severity, Severity::Normal);
    }

    #[tokio::test]
    async fn test_classification_is_idempotent() {
        let brain = analyzer();
        let inputs = [
            "I want to end my life",
            "I'm so lonely and sad",
            "What should I do about work pressure?",
            "",
        ];

        for text in inputs {
            let first = brain.analyze(text).await;
            for _ in 0..3 {
                assert_eq!(brain.analyze(text).await, first, "Drift for '{}'", text);
            }
            assert_eq!(first.confidence, 0.0);
        }
    }

    #[tokio::test]
    async fn test_normalized_input_is_equivalent() {
        let brain = analyzer();
        let raw = "  I\u{2019}M   SO   Lonely  ";

        assert_eq!(brain.analyze(raw).await, brain.analyze(&normalize(raw)).await);
    }
}
