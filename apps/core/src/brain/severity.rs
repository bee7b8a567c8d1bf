//! Severity Classifier - escalation tier of risk language.
//!
//! The crisis tier is always scanned first and, on any hit, the moderate tier
//! is never consulted. A moderate phrase can neither downgrade nor coexist
//! with a crisis verdict.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::lexicon::{normalize, Category, Lexicon};

/// Escalation level. Ordered `Normal < Moderate < Crisis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Moderate,
    Crisis,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Normal => "normal",
            Severity::Moderate => "moderate",
            Severity::Crisis => "crisis",
        };
        write!(f, "{}", label)
    }
}

/// Outcome of a severity scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityVerdict {
    pub severity: Severity,
    /// Distinct matched phrases of the deciding tier, in lexicon order.
    /// For `Normal` these are watch-tier phrases, if any.
    pub matched_indicators: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SeverityClassifier {
    lexicon: Arc<Lexicon>,
}

impl Default for SeverityClassifier {
    fn default() -> Self {
        Self::new(Arc::new(Lexicon::default()))
    }
}

impl SeverityClassifier {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn classify(&self, text: &str) -> SeverityVerdict {
        self.classify_normalized(&normalize(text))
    }

    /// Classify text already passed through [`normalize`].
    pub fn classify_normalized(&self, normalized: &str) -> SeverityVerdict {
        let tiers = [
            (Category::SeverityCrisis, Severity::Crisis),
            (Category::SeverityModerate, Severity::Moderate),
            (Category::SeverityWatch, Severity::Normal),
        ];

        for (category, severity) in tiers {
            let hits = self.lexicon.matches(category, normalized);
            if !hits.is_empty() {
                return SeverityVerdict {
                    severity,
                    matched_indicators: hits.into_iter().map(str::to_string).collect(),
                };
            }
        }

        SeverityVerdict {
            severity: Severity::Normal,
            matched_indicators: vec![],
        }
    }

    /// True iff any crisis- or moderate-tier phrase matches.
    pub fn has_risk_indicators(&self, text: &str) -> bool {
        let normalized = normalize(text);
        self.lexicon.any_match(Category::SeverityCrisis, &normalized)
            || self.lexicon.any_match(Category::SeverityModerate, &normalized)
    }
}
