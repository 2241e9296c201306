//! State module for tracking query progress
//!
//! # Components
//!
//! - `QueryPhase`: the phase of one query execution (dispatching, collecting, ranking, done)
//! - `SourceState`: how a single source finished (matched, no match, timeout, etc.)

mod query_phase;
mod source_state;

// Re-export main types
pub use query_phase::QueryPhase;
pub use source_state::SourceState;
