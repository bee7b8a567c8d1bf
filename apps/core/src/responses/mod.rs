//! # Responses Module
//!
//! Turns a classification into a supportive reply.
//!
//! ## Components
//! - `catalog`: reply templates, wellness tips and validation lines
//! - `selector`: picks the reply package with an injected random source

pub mod catalog;
pub mod selector;

pub use catalog::ResponseCatalog;
pub use selector::{
    ChoiceSource, FixedChoice, RandomChoice, ResponseContext, ResponsePackage, ResponseSelector,
};
