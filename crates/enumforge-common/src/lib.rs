//! Common types and utilities for enumforge.
//!
//! This crate provides foundational types used across all enumforge crates:
//! - Definition-time and runtime error types (`DefinitionError`, `InvalidValueError`)
//! - Identifier legality checks (`IdentifierCheck`, `StandardIdentifiers`)
//! - Unsigned base widths for flag sets (`BaseWidth`)
//! - Build options shared by every builder (`BuildOptions`)
//! - Centralized limits and thresholds

// Error types shared by the builders and the runtime types
pub mod diagnostics;
pub use diagnostics::{DecodeError, DefinitionError, InvalidValueError};

// Identifier legality
pub mod identifier;
pub use identifier::{IdentifierCheck, StandardIdentifiers};

// Base widths for flag sets
pub mod width;
pub use width::BaseWidth;

// Builder configuration
pub mod options;
pub use options::BuildOptions;

// Centralized limits and thresholds
pub mod limits;

#[cfg(test)]
#[path = "../tests/identifier_tests.rs"]
mod identifier_tests;
#[cfg(test)]
#[path = "../tests/width_tests.rs"]
mod width_tests;
