//! Engine configuration.
//!
//! Loaded from the environment (and a `.env` file when present). Anything
//! missing or invalid leaves the engine on local rules.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;
use validator::Validate;

pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_EMOTION_MODEL: &str = "michellejieli/emotion_text_classifier";
pub const DEFAULT_SENTIMENT_MODEL: &str = "cardiffnlp/twitter-roberta-base-sentiment-latest";
pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;

/// Remote enrichment settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Master switch. Off unless explicitly enabled.
    pub enabled: bool,
    /// Inference API base URL; the model id is appended as a path.
    #[validate(url)]
    pub endpoint: String,
    /// Bearer token for the inference API.
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
    #[validate(length(min = 1))]
    pub emotion_model: String,
    #[validate(length(min = 1))]
    pub sentiment_model: String,
    /// Per-call bound for both concurrent remote calls.
    #[validate(range(min = 100, max = 30_000))]
    pub timeout_ms: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_token: None,
            emotion_model: DEFAULT_EMOTION_MODEL.to_string(),
            sentiment_model: DEFAULT_SENTIMENT_MODEL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl EnrichmentConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Enabled, has a non-empty token and passes validation.
    pub fn is_active(&self) -> bool {
        if !self.enabled {
            return false;
        }
        if self
            .api_token
            .as_deref()
            .map_or(true, |t| t.trim().is_empty())
        {
            warn!("Enrichment enabled but no API token configured, using local rules");
            return false;
        }
        if let Err(e) = self.validate() {
            warn!("Invalid enrichment configuration, using local rules: {}", e);
            return false;
        }
        true
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `mindcare_core=debug`.
    #[validate(length(min = 1))]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EngineConfig {
    #[validate(nested)]
    pub enrichment: EnrichmentConfig,
    #[validate(nested)]
    pub logging: LoggingConfig,
    /// Fixed seed for reply template selection (reproducible replies).
    pub response_seed: Option<u64>,
}

impl EngineConfig {
    /// Read configuration from the environment, loading `.env` first.
    ///
    /// Variables: `MINDCARE_ENRICHMENT_ENABLED`, `HF_API_TOKEN`,
    /// `MINDCARE_ENRICHMENT_ENDPOINT`, `MINDCARE_EMOTION_MODEL`,
    /// `MINDCARE_SENTIMENT_MODEL`, `MINDCARE_ENRICHMENT_TIMEOUT_MS`,
    /// `MINDCARE_LOG`, `MINDCARE_LOG_JSON`, `MINDCARE_RESPONSE_SEED`.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = EnrichmentConfig::default();
        let enrichment = EnrichmentConfig {
            enabled: env_flag("MINDCARE_ENRICHMENT_ENABLED").unwrap_or(false),
            endpoint: env_string("MINDCARE_ENRICHMENT_ENDPOINT").unwrap_or(defaults.endpoint),
            api_token: env_string("HF_API_TOKEN"),
            emotion_model: env_string("MINDCARE_EMOTION_MODEL").unwrap_or(defaults.emotion_model),
            sentiment_model: env_string("MINDCARE_SENTIMENT_MODEL")
                .unwrap_or(defaults.sentiment_model),
            timeout_ms: env_parse("MINDCARE_ENRICHMENT_TIMEOUT_MS").unwrap_or(defaults.timeout_ms),
        };

        let logging = LoggingConfig {
            level: env_string("MINDCARE_LOG").unwrap_or_else(|| "info".to_string()),
            json: env_flag("MINDCARE_LOG_JSON").unwrap_or(false),
        };

        Self {
            enrichment,
            logging,
            response_seed: env_parse("MINDCARE_RESPONSE_SEED"),
        }
    }
}

fn env_string(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = env_string(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparseable {}={:?}", key, raw);
            None
        }
    }
}

fn env_flag(key: &str) -> Option<bool> {
    let raw = env_string(key)?;
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            warn!("Ignoring unparseable {}={:?}", key, raw);
            None
        }
    }
}
