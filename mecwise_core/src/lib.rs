#![forbid(unsafe_code)]

//! Core decision logic for the mecwise contraceptive counseling tool.
//!
//! This crate provides:
//! - Domain types (methods, MEC scores, FAB categories, preferences)
//! - The answer model and its normalizer
//! - The WHO MEC rule table and rules engine
//! - FAB (fertility awareness) eligibility
//! - The personalization filter pipeline
//! - CSV export and configuration

pub mod types;
pub mod error;
pub mod answers;
pub mod questions;
pub mod normalize;
pub mod rules;
pub mod engine;
pub mod fab;
pub mod personalize;
pub mod export;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use answers::{AnswerError, AnswerState, AnswerValue};
pub use normalize::{normalize, Computed, NormalizedAnswers};
pub use rules::{get_default_rules, Rule, RuleTable, Section};
pub use engine::{eligible_methods, evaluate, evaluate_on, evaluate_with};
pub use fab::evaluate_fab;
pub use personalize::{personalize, personalize_json};
pub use export::{write_mec_csv, write_rules_csv};
pub use config::{Config, OutputFormat};
