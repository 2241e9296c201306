/// Phase definitions for a single query execution
///
/// A query moves strictly forward through these phases; there is no retry
/// phase and no way back.
use std::fmt;

/// Represents the current phase of one query execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryPhase {
    /// One worker per source is being launched
    Dispatching,

    /// Worker completions are consumed in whatever order they finish
    Collecting,

    /// Accumulated results are being sorted and truncated
    Ranking,

    /// The result set has been emitted
    Done,
}

impl QueryPhase {
    /// Returns the phase that follows this one, or None for Done
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Dispatching => Some(Self::Collecting),
            Self::Collecting => Some(Self::Ranking),
            Self::Ranking => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Returns true if moving from this phase to `to` is allowed
    pub fn can_transition_to(&self, to: QueryPhase) -> bool {
        self.next() == Some(to)
    }

    /// Moves to `to`, rejecting anything but the immediate successor
    pub fn transition(&mut self, to: QueryPhase) -> Result<(), crate::ScoutError> {
        if !self.can_transition_to(to) {
            return Err(crate::ScoutError::InvalidTransition { from: *self, to });
        }
        tracing::trace!("Query phase {} -> {}", self, to);
        *self = to;
        Ok(())
    }

    /// Returns true once the result set has been emitted
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Short lowercase name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dispatching => "dispatching",
            Self::Collecting => "collecting",
            Self::Ranking => "ranking",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for QueryPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
