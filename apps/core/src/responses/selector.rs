//! Response selection.
//!
//! Crisis severity always yields the fixed emergency script. Everything else
//! draws an emotion template through a [`ChoiceSource`], so tests can pin the
//! pick while production uses a uniform RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use super::catalog::ResponseCatalog;
use crate::brain::{CrisisResources, Emotion, Intent, Sentiment, Severity};

/// Template text that already offers advice or help.
const HELP_MARKERS: &[&str] = &["advice", "help", "support", "recommend", "suggest", "guidance"];

/// Inputs to response selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseContext {
    pub emotion: Emotion,
    pub sentiment: Sentiment,
    pub intent: Intent,
    pub severity: Severity,
}

/// Reply handed to the chat layer. Built fresh per turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePackage {
    pub primary_reply_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_wellness_tip_text: Option<String>,
    pub is_crisis_override: bool,
    /// The five grounding steps on a crisis override, empty otherwise.
    pub grounding_steps: Vec<String>,
}

/// Picks an index into a non-empty list.
pub trait ChoiceSource: Send + 'static {
    /// Return an index in `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Uniform random choice backed by any `rand` generator.
pub struct RandomChoice<R> {
    rng: R,
}

impl<R: Rng + Send + 'static> RandomChoice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomChoice<StdRng> {
    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng + Send + 'static> ChoiceSource for RandomChoice<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Cycles through a fixed list of indices (wrapped to the list length).
#[derive(Debug, Clone, Default)]
pub struct FixedChoice {
    indices: Vec<usize>,
    cursor: usize,
}

impl FixedChoice {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }

    /// Always pick the first entry.
    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl ChoiceSource for FixedChoice {
    fn choose_index(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        index % len
    }
}

/// Builds [`ResponsePackage`]s from classification outputs.
pub struct ResponseSelector {
    catalog: Arc<ResponseCatalog>,
    resources: Arc<CrisisResources>,
    chooser: Mutex<Box<dyn ChoiceSource>>,
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new(
            Arc::new(ResponseCatalog::default()),
            Arc::new(CrisisResources::default()),
            Box::new(RandomChoice::from_entropy()),
        )
    }
}

impl ResponseSelector {
    pub fn new(
        catalog: Arc<ResponseCatalog>,
        resources: Arc<CrisisResources>,
        chooser: Box<dyn ChoiceSource>,
    ) -> Self {
        Self {
            catalog,
            resources,
            chooser: Mutex::new(chooser),
        }
    }

    /// Default catalog and helplines with a seeded or entropy RNG.
    pub fn with_seed(seed: Option<u64>) -> Self {
        let chooser = match seed {
            Some(seed) => RandomChoice::seeded(seed),
            None => RandomChoice::from_entropy(),
        };
        Self::new(
            Arc::new(ResponseCatalog::default()),
            Arc::new(CrisisResources::default()),
            Box::new(chooser),
        )
    }

    pub fn catalog(&self) -> &ResponseCatalog {
        &self.catalog
    }

    pub fn resources(&self) -> &CrisisResources {
        &self.resources
    }

    /// Select the reply for one turn.
    pub fn select(&self, context: &ResponseContext) -> ResponsePackage {
        if context.severity == Severity::Crisis {
            return self.crisis_package();
        }

        let template = self
            .pick(self.catalog.replies(context.emotion))
            .unwrap_or_else(|| self.catalog.processing_fallback_reply().to_string());

        let mut reply = template;
        if matches!(context.intent, Intent::AskAdvice | Intent::SeekingSupport)
            && !offers_help(&reply)
        {
            if let Some(follow_up) = self.pick(self.catalog.follow_ups(context.intent)) {
                reply.push(' ');
                reply.push_str(&follow_up);
            }
        }

        let wants_tip =
            context.severity == Severity::Moderate || context.intent == Intent::SeekingSupport;
        let tip = if wants_tip {
            self.pick(self.catalog.tips(context.emotion))
        } else {
            None
        };

        ResponsePackage {
            primary_reply_text: reply,
            follow_up_wellness_tip_text: tip,
            is_crisis_override: false,
            grounding_steps: vec![],
        }
    }

    /// The fixed emergency script. Never random, never carries a tip.
    pub fn crisis_package(&self) -> ResponsePackage {
        let helpline = self.resources.primary_helpline();
        let steps = self.resources.grounding_steps();

        let mut text = String::from(self.resources.emergency_response(Severity::Crisis));
        text.push_str(&format!(
            "\n\nPlease call {} at {} right now. Someone is available to talk with you.",
            helpline.name, helpline.number
        ));
        text.push_str("\n\nWhile you reach out, let's try a grounding exercise together:");
        for (i, step) in steps.iter().enumerate() {
            text.push_str(&format!("\n{}. {}", i + 1, step));
        }

        ResponsePackage {
            primary_reply_text: text,
            follow_up_wellness_tip_text: None,
            is_crisis_override: true,
            grounding_steps: steps,
        }
    }

    /// One validation sentence for the emotion.
    pub fn emotional_validation(&self, emotion: Emotion) -> &'static str {
        self.catalog.validation(emotion)
    }

    pub fn processing_fallback_reply(&self) -> &'static str {
        self.catalog.processing_fallback_reply()
    }

    fn pick(&self, options: &[String]) -> Option<String> {
        if options.is_empty() {
            return None;
        }
        let index = {
            let mut chooser = self.chooser.lock().unwrap_or_else(|p| p.into_inner());
            chooser.choose_index(options.len())
        };
        options.get(index.min(options.len() - 1)).cloned()
    }
}

fn offers_help(template: &str) -> bool {
    let lower = template.to_lowercase();
    HELP_MARKERS.iter().any(|marker| lower.contains(marker))
}
