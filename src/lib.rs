//! glotpush - upload new i18n keys to Lokalise
//!
//! glotpush is a CLI tool and library that keeps a Lokalise project in sync
//! with locally stored, nested translation JSON files: it flattens each
//! message file into `::`-joined keys, diffs them against the keys already
//! in the project, and batch-creates the ones that are missing, grouped by
//! key across all languages.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Key reconciliation pipeline (flatten, diff, aggregate)
//! - `lokalise`: Lokalise API client and wire types
//! - `messages`: Message file discovery and reading

pub mod cli;
pub mod config;
pub mod core;
pub mod lokalise;
pub mod messages;
