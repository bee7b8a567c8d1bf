//! Test Module
//!
//! Cross-component test suite for the MindCare core.
//!
//! ## Test Categories
//! - `brain_tests`: severity tiers, emotion precedence, intent priority, lexicon overrides
//! - `response_tests`: reply selection, tips and the crisis script
//! - `integration_tests`: full turns against a mocked Hugging Face endpoint
//! - `chaos_test`: timeouts, failing ports and panics inside the pipeline

pub mod brain_tests;
pub mod response_tests;
