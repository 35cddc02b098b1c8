//! # sf-core
//!
//! Core error definitions and parsing utilities for schedule-finder.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: the error hierarchy, the `ensure!` macro, and the date-string
//! parsers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
