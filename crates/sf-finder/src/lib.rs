//! # sf-finder
//!
//! The schedule date search engine: [`Finder`], its resolution policies
//! ([`ScheduleAlgorithm`]), the [`ScheduleDesigner`] builder, and the JSON
//! [`FinderConfig`].
//!
//! Searches emit `tracing` events at `debug` and `trace` level; install a
//! subscriber to see them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `ScheduleAlgorithm`: resolution policies and their fallbacks.
pub mod algorithm;

/// `FinderConfig`: JSON description of a finder.
pub mod config;

mod cursor;

/// `ScheduleDesigner`: builder for `Finder`.
pub mod designer;

/// `Finder`: the date search engine.
pub mod finder;

/// `FinderSettings`: per-finder iteration limit and default exclusions.
pub mod settings;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use algorithm::ScheduleAlgorithm;
pub use config::FinderConfig;
pub use designer::ScheduleDesigner;
pub use finder::Finder;
pub use settings::{FinderSettings, DEFAULT_ITERATION_LIMIT};
