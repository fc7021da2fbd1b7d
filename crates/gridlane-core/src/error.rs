//! Error types for gridlane operations.
//!
//! The agent core itself never fails: every terrain/light pairing is total.
//! Errors only arise at integration boundaries, where a collaborator hands
//! the core malformed input (an incomplete neighbor map, an unknown letter
//! in a scenario file).

use crate::types::Direction;

/// Result type for gridlane operations.
pub type Result<T> = std::result::Result<T, GridlaneError>;

/// Errors that can occur when building core values from external input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridlaneError {
    /// A neighbor map did not cover all four directions.
    #[error("neighbor view is missing the {0} cell")]
    MissingNeighbor(Direction),
    /// A map letter that names no terrain.
    #[error("unknown terrain letter '{0}'")]
    UnknownTerrain(char),
    /// A direction name or letter that names no direction.
    #[error("unknown direction '{0}'")]
    UnknownDirection(String),
    /// A vehicle kind name that names no kind.
    #[error("unknown vehicle kind '{0}'")]
    UnknownKind(String),
    /// Stored lifecycle state that no sequence of transitions can reach.
    #[error("invalid lifecycle: {0}")]
    InvalidLifecycle(String),
}

impl GridlaneError {
    pub fn unknown_direction(input: impl Into<String>) -> Self {
        GridlaneError::UnknownDirection(input.into())
    }

    pub fn unknown_kind(input: impl Into<String>) -> Self {
        GridlaneError::UnknownKind(input.into())
    }
}
