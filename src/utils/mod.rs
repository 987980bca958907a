//! Utility functions for code generation, URL processing, and request
//! classification.
//!
//! - [`alphabet`] - Character sets for short code synthesis
//! - [`code_generator`] - Candidate generation and the uniqueness loop
//! - [`reserved`] - Reserved-word deny list
//! - [`url_normalizer`] - Destination URL normalization and safety checks
//! - [`user_agent`] - Coarse device/browser/OS classification

pub mod alphabet;
pub mod code_generator;
pub mod reserved;
pub mod url_normalizer;
pub mod user_agent;
