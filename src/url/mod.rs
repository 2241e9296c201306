//! URL handling module for Sumi-Scout
//!
//! Sources are absolute HTTP(S) URLs. This module validates them and derives
//! the domain used to label log lines.

mod source;

pub use source::{parse_source, source_domain};
