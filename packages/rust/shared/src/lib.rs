//! Shared types, error model, and configuration for docsnip.
//!
//! This crate is the foundation depended on by all other docsnip crates.
//! It provides:
//! - [`DocsnipError`], the unified error type
//! - Domain types ([`UsageExample`], [`ReadmeReport`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, ExtractionConfig, OutputConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from, validate_config,
};
pub use error::{DocsnipError, Result};
pub use types::{FALLBACK_DESCRIPTION, MAX_EXAMPLES, ReadmeReport, UsageExample, content_hash};
