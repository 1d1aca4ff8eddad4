//! Core advice engine for the AgriRate platform
//!
//! This crate contains the domain types and the rule-based logic shared
//! between the web front end (via WASM) and other components: market and
//! weather snapshots in, prioritized farming advice out, plus the KhetBot
//! keyword responder.

pub mod advice;
pub mod chatbot;
pub mod fixtures;
pub mod models;
pub mod types;
pub mod validation;

pub use advice::*;
pub use chatbot::*;
pub use models::*;
pub use types::*;
pub use validation::*;
