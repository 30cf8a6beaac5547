//! Shared building blocks for the HR data-access layer.
//!
//! Holds the primitive id/timestamp aliases, the [`error::CoreError`]
//! taxonomy, the [`outcome::Outcome`] type returned by every data-access
//! operation, and the sequential [`code_generator::CodeGenerator`].

pub mod code_generator;
pub mod error;
pub mod outcome;
pub mod types;
