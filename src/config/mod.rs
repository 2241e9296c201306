//! Configuration module for Sumi-Scout
//!
//! This module handles loading, parsing, and validating TOML configuration files,
//! and loading the list of sources a search fans out to.
//!
//! # Example
//!
//! ```no_run
//! use sumi_scout::config::{collect_sources, load_config};
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scout.toml")).unwrap();
//! let sources = collect_sources(&config);
//! println!("{} sources, {} results max", sources.len(), config.search.max_results);
//! ```

mod parser;
mod sources;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, SearchConfig, SourcesConfig, UserAgentConfig, DEFAULT_BROWSER_USER_AGENT,
    DEFAULT_FETCH_TIMEOUT_MS, DEFAULT_MAX_CONCURRENT_FETCHES, DEFAULT_MAX_RESULTS,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use sources::{collect_sources, load_sources, parse_source_lines};
