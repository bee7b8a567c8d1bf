//! Crisis resources and detection output.
//!
//! Holds the helpline directory, per-severity emergency wording, the 5-4-3-2-1
//! grounding sequence and the metadata-only crisis event record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use super::severity::{Severity, SeverityVerdict};

/// A crisis line the user can call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Helpline {
    pub name: String,
    pub number: String,
}

impl Helpline {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }
}

const DEFAULT_HELPLINES: &[(&str, &str)] = &[
    ("AASRA", "+91 9820466726"),
    ("iCall", "+91 9152987821"),
    ("Vandrevala Foundation", "+91 9999 77 8888"),
    ("Lifeline", "1800 200 8332"),
];

/// 5-4-3-2-1 sensory grounding, see/touch/hear/smell/taste.
pub const GROUNDING_STEPS: [&str; 5] = [
    "Name 5 things you can see around you.",
    "Name 4 things you can touch or feel.",
    "Name 3 things you can hear.",
    "Name 2 things you can smell.",
    "Name 1 thing you can taste.",
];

const COPING_TECHNIQUES: &[&str] = &[
    "Cold Water Technique: Splash cold water on your face or hold ice in your hands",
    "Breathing Exercise: Breathe in for 4 counts, hold for 4, exhale for 4",
    "Grounding with Your Senses: Focus on textures, sounds, or scents around you",
    "Connect with Someone: Call or text a trusted friend or family member",
    "Physical Activity: Go for a walk, do stretches, or any physical movement",
    "Progressive Muscle Relaxation: Tense and release different muscle groups",
    "Mindfulness Meditation: Focus on the present moment",
    "Safe Place Visualisation: Picture a place where you feel calm and protected",
];

/// Coping techniques attached to a crisis detection.
const CRISIS_COPING_COUNT: usize = 4;

const CRISIS_RESPONSE: &str = "I'm deeply concerned about what you're sharing. Your life has value, and there are people who want to help you right now. Please reach out to a crisis helpline immediately. You don't have to face this alone.";

const MODERATE_RESPONSE: &str = "I hear that you're in significant pain. What you're feeling is important, and you deserve support. Please consider reaching out to someone you trust or contacting a helpline to talk through this.";

const NORMAL_RESPONSE: &str =
    "Thank you for sharing with me. I'm here to listen and support you through this.";

/// Result of crisis detection for one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisDetection {
    /// True iff `severity == Crisis`.
    pub is_crisis: bool,
    pub severity: Severity,
    pub matched_indicators: Vec<String>,
    pub helpline_number: String,
    pub emergency_response_text: String,
    /// The five grounding steps in fixed order; empty unless crisis.
    pub grounding_steps: Vec<String>,
    /// Extra coping techniques; empty unless crisis.
    pub coping_techniques: Vec<String>,
}

/// Safety resources shared by crisis detection and the response selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrisisResources {
    helplines: Vec<Helpline>,
}

impl Default for CrisisResources {
    fn default() -> Self {
        Self {
            helplines: DEFAULT_HELPLINES
                .iter()
                .map(|(name, number)| Helpline::new(*name, *number))
                .collect(),
        }
    }
}

impl CrisisResources {
    /// Custom directory. The first entry is the primary line; an empty list
    /// keeps the built-in directory so a helpline number is always available.
    pub fn new(helplines: Vec<Helpline>) -> Self {
        if helplines.is_empty() {
            warn!("Empty helpline directory supplied, keeping defaults");
            return Self::default();
        }
        Self { helplines }
    }

    pub fn helplines(&self) -> &[Helpline] {
        &self.helplines
    }

    pub fn primary_helpline(&self) -> &Helpline {
        // `new` and `default` never leave the directory empty.
        &self.helplines[0]
    }

    pub fn emergency_response(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Crisis => CRISIS_RESPONSE,
            Severity::Moderate => MODERATE_RESPONSE,
            Severity::Normal => NORMAL_RESPONSE,
        }
    }

    pub fn grounding_steps(&self) -> Vec<String> {
        GROUNDING_STEPS.iter().map(|s| s.to_string()).collect()
    }

    pub fn coping_techniques(&self) -> &'static [&'static str] {
        COPING_TECHNIQUES
    }

    /// Assemble the detection value for a severity verdict.
    pub fn detection(&self, verdict: SeverityVerdict) -> CrisisDetection {
        let is_crisis = verdict.severity == Severity::Crisis;

        CrisisDetection {
            is_crisis,
            severity: verdict.severity,
            matched_indicators: verdict.matched_indicators,
            helpline_number: self.primary_helpline().number.clone(),
            emergency_response_text: self.emergency_response(verdict.severity).to_string(),
            grounding_steps: if is_crisis {
                self.grounding_steps()
            } else {
                vec![]
            },
            coping_techniques: if is_crisis {
                COPING_TECHNIQUES
                    .iter()
                    .take(CRISIS_COPING_COUNT)
                    .map(|s| s.to_string())
                    .collect()
            } else {
                vec![]
            },
        }
    }
}

/// Metadata-only record of a crisis verdict. Never holds message content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisEvent {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub severity: Severity,
    pub occurred_at: DateTime<Utc>,
}

impl CrisisEvent {
    pub fn new(user_id: Option<String>, severity: Severity) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            severity,
            occurred_at: Utc::now(),
        }
    }
}

/// Emit a crisis event on the `crisis` tracing target.
pub fn log_crisis_event(event: &CrisisEvent) {
    warn!(
        target: "crisis",
        event_id = %event.id,
        user_id = event.user_id.as_deref().unwrap_or("anonymous"),
        severity = %event.severity,
        occurred_at = %event.occurred_at.to_rfc3339(),
        "Crisis event recorded"
    );
}
