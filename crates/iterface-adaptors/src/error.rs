//! Error types for adaptor construction.

use std::fmt;

/// Errors arising from building a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdaptorError {
    /// The source sequence has no elements, so no position can be read.
    EmptySource,
    /// A starting position lies outside `0..=len`.
    PositionOutOfRange {
        /// The requested position.
        position: isize,
        /// Length of the sequence.
        len: usize,
    },
}

impl fmt::Display for AdaptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySource => write!(f, "source sequence must have at least one element"),
            Self::PositionOutOfRange { position, len } => {
                write!(f, "position {position} out of range 0..={len}")
            }
        }
    }
}

impl std::error::Error for AdaptorError {}
