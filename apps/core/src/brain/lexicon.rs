//! Lexicon Store - trigger phrase tables for every classifier.
//!
//! Phrases are lowercase and matched as plain substrings of the normalised
//! utterance. There is no tokenisation: "die" matches inside "diesel".
//! A lexicon is built once and shared read-only (`Arc<Lexicon>`) by the
//! severity, emotion and intent classifiers.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::emotion::Emotion;
use super::intent::Intent;

/// A phrase table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Highest risk tier. Any hit means `Severity::Crisis`.
    SeverityCrisis,
    /// Second tier, only consulted without a crisis hit.
    SeverityModerate,
    /// Soft distress markers, recorded but never escalating.
    SeverityWatch,
    Emotion(Emotion),
    Intent(Intent),
}

// NOTE: expect() is acceptable here, the pattern is a literal.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace run"));

/// Normalise an utterance for matching.
///
/// Lowercases, trims, folds typographic apostrophes to `'` and collapses
/// whitespace runs to a single space.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' | '\u{02BC}' => '\'',
            other => other,
        })
        .collect();
    WHITESPACE.replace_all(&folded, " ").into_owned()
}

const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "end it all",
    "end my life",
    "take my own life",
    "no point",
    "don't want to live",
    "want to hurt myself",
    "harm myself",
    "self harm",
    "self-harm",
    "i should die",
    "i want to die",
    "better off dead",
];

const MODERATE_PHRASES: &[&str] = &[
    "tired of living",
    "life is meaningless",
    "hopeless",
    "useless",
    "worthless",
    "don't care anymore",
    "don't want to exist",
    "pain too much",
    "can't take it",
    "devastated",
    "desperate",
    "severe depression",
    "panic attack",
    "overwhelmed",
    "depressed",
    "broken",
];

const WATCH_PHRASES: &[&str] = &[
    "sad",
    "anxious",
    "stressed",
    "struggling",
    "not okay",
    "hurting",
];

const SADNESS_PHRASES: &[&str] = &[
    "sad",
    "unhappy",
    "down",
    "depressed",
    "crying",
    "heartbroken",
    "miserable",
    "grief",
    "grieving",
    "empty inside",
];

const JOY_PHRASES: &[&str] = &[
    "happy",
    "great",
    "excited",
    "joy",
    "wonderful",
    "amazing",
    "awesome",
    "best day",
    "glad",
    "delighted",
];

const LOVE_PHRASES: &[&str] = &["love", "adore", "cherish", "affection", "in a relationship"];

const ANGER_PHRASES: &[&str] = &[
    "angry",
    "furious",
    "mad at",
    "so mad",
    "enraged",
    "in a rage",
    "pissed",
    "irritated",
    "annoyed",
    "frustrated",
];

const FEAR_PHRASES: &[&str] = &[
    "afraid",
    "scared",
    "worried",
    "terrified",
    "frightened",
    "fear",
];

const ANXIETY_PHRASES: &[&str] = &[
    "anxious",
    "anxiety",
    "nervous",
    "panic",
    "on edge",
    "uneasy",
];

const LONELINESS_PHRASES: &[&str] = &[
    "lonely",
    "alone",
    "isolated",
    "no friends",
    "left out",
];

const STRESS_PHRASES: &[&str] = &[
    "stressed",
    "stress",
    "pressure",
    "overwhelmed",
    "burned out",
    "burnt out",
    "too much work",
];

const CONFUSION_PHRASES: &[&str] = &[
    "confused",
    "confusing",
    "don't understand",
    "unsure",
    "uncertain",
    "mixed up",
];

const DISGUST_PHRASES: &[&str] = &[
    "disgusted",
    "disgusting",
    "gross",
    "repulsed",
    "sickening",
    "revolting",
];

const SURPRISE_PHRASES: &[&str] = &[
    "surprised",
    "shocked",
    "unexpected",
    "can't believe",
    "astonished",
    "wow",
];

const ASK_ADVICE_PHRASES: &[&str] = &[
    "what should i do",
    "how can i",
    "how do i",
    "advice",
    "tips",
    "any suggestions",
    "what would you recommend",
    "should i",
];

const VENTING_PHRASES: &[&str] = &[
    "need to vent",
    "just venting",
    "i just need to say",
    "get this off my chest",
    "let it out",
    "sick of",
    "fed up",
];

const SEEKING_SUPPORT_PHRASES: &[&str] = &[
    "i need help",
    "help me",
    "need support",
    "need someone",
    "talk to someone",
    "please help",
    "can you help",
    "i need you",
];

/// Emotion precedence: the first category with a hit wins.
pub const DEFAULT_EMOTION_ORDER: &[Emotion] = &[
    Emotion::Sadness,
    Emotion::Joy,
    Emotion::Love,
    Emotion::Anger,
    Emotion::Fear,
    Emotion::Anxiety,
    Emotion::Loneliness,
    Emotion::Stress,
    Emotion::Confusion,
    Emotion::Disgust,
    Emotion::Surprise,
];

fn default_phrases(category: Category) -> &'static [&'static str] {
    match category {
        Category::SeverityCrisis => CRISIS_PHRASES,
        Category::SeverityModerate => MODERATE_PHRASES,
        Category::SeverityWatch => WATCH_PHRASES,
        Category::Emotion(emotion) => match emotion {
            Emotion::Sadness => SADNESS_PHRASES,
            Emotion::Joy => JOY_PHRASES,
            Emotion::Love => LOVE_PHRASES,
            Emotion::Anger => ANGER_PHRASES,
            Emotion::Fear => FEAR_PHRASES,
            Emotion::Anxiety => ANXIETY_PHRASES,
            Emotion::Loneliness => LONELINESS_PHRASES,
            Emotion::Stress => STRESS_PHRASES,
            Emotion::Confusion => CONFUSION_PHRASES,
            Emotion::Disgust => DISGUST_PHRASES,
            Emotion::Surprise => SURPRISE_PHRASES,
            Emotion::Neutral => &[],
        },
        Category::Intent(intent) => match intent {
            Intent::AskAdvice => ASK_ADVICE_PHRASES,
            Intent::Venting => VENTING_PHRASES,
            Intent::SeekingSupport => SEEKING_SUPPORT_PHRASES,
            Intent::GeneralConversation => &[],
        },
    }
}

fn all_categories() -> impl Iterator<Item = Category> {
    [
        Category::SeverityCrisis,
        Category::SeverityModerate,
        Category::SeverityWatch,
    ]
    .into_iter()
    .chain(Emotion::ALL.iter().map(|e| Category::Emotion(*e)))
    .chain(Intent::ALL.iter().map(|i| Category::Intent(*i)))
}

/// Clean a phrase list: lowercase, trim, drop empties and duplicates.
fn clean_phrases<I, S>(phrases: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cleaned: Vec<String> = Vec::new();
    for phrase in phrases {
        let phrase = normalize(phrase.as_ref());
        if !phrase.is_empty() && !cleaned.contains(&phrase) {
            cleaned.push(phrase);
        }
    }
    cleaned
}

/// Immutable phrase tables keyed by [`Category`].
#[derive(Debug, Clone)]
pub struct Lexicon {
    tables: HashMap<Category, Vec<String>>,
    emotion_order: Vec<Emotion>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Lexicon {
    /// Start from the built-in tables and override selectively.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Ordered phrase list for a category (empty if none configured).
    pub fn lookup(&self, category: Category) -> &[String] {
        self.tables
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Emotion categories in precedence order.
    pub fn emotion_order(&self) -> &[Emotion] {
        &self.emotion_order
    }

    /// Every phrase of `category` contained in `normalized`, in table order.
    pub fn matches<'a>(&'a self, category: Category, normalized: &str) -> Vec<&'a str> {
        self.lookup(category)
            .iter()
            .filter(|phrase| normalized.contains(phrase.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Whether any phrase of `category` is contained in `normalized`.
    pub fn any_match(&self, category: Category, normalized: &str) -> bool {
        self.lookup(category)
            .iter()
            .any(|phrase| normalized.contains(phrase.as_str()))
    }
}

/// Builder for [`Lexicon`], seeded with the built-in tables.
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    overrides: HashMap<Category, Vec<String>>,
    emotion_order: Option<Vec<Emotion>>,
}

impl LexiconBuilder {
    /// Replace the phrase list of one category.
    pub fn phrases<I, S>(mut self, category: Category, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.overrides.insert(category, clean_phrases(phrases));
        self
    }

    /// Replace the emotion precedence order. `Neutral` is ignored: it is the
    /// no-match default, not a scanned category.
    pub fn emotion_order(mut self, order: Vec<Emotion>) -> Self {
        let mut deduped = Vec::with_capacity(order.len());
        for emotion in order {
            if emotion != Emotion::Neutral && !deduped.contains(&emotion) {
                deduped.push(emotion);
            }
        }
        self.emotion_order = Some(deduped);
        self
    }

    pub fn build(mut self) -> Lexicon {
        let tables = all_categories()
            .map(|category| {
                let phrases = self
                    .overrides
                    .remove(&category)
                    .unwrap_or_else(|| clean_phrases(default_phrases(category)));
                (category, phrases)
            })
            .collect();

        Lexicon {
            tables,
            emotion_order: self
                .emotion_order
                .unwrap_or_else(|| DEFAULT_EMOTION_ORDER.to_vec()),
        }
    }
}
