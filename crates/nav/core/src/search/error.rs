use crate::error::{ErrorSeverity, NavError};
use crate::geometry::Point;

/// Reasons a path query produced no route.
///
/// Every variant means "cannot move there now"; none of them leaves partial
/// results behind.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PathError {
    #[error("collision map not initialized")]
    Uninitialized,

    #[error("invalid path query: {reason}")]
    InvalidInput { reason: &'static str },

    #[error("{point} is outside the map")]
    OutOfBounds { point: Point },

    #[error("start {start} is blocked for radius {radius}")]
    StartBlocked { start: Point, radius: f64 },

    #[error("destination {end} is blocked for radius {radius}")]
    EndBlocked { end: Point, radius: f64 },

    #[error("search budget exhausted after {explored} nodes")]
    Exhausted { explored: usize },

    #[error("destination unreachable ({explored} nodes explored)")]
    Unreachable { explored: usize },
}

impl NavError for PathError {
    fn severity(&self) -> ErrorSeverity {
        use PathError::*;
        match self {
            Uninitialized => ErrorSeverity::Fatal,
            InvalidInput { .. } | OutOfBounds { .. } => ErrorSeverity::Validation,
            StartBlocked { .. } | EndBlocked { .. } | Exhausted { .. } | Unreachable { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use PathError::*;
        match self {
            Uninitialized => "PATH_UNINITIALIZED",
            InvalidInput { .. } => "PATH_INVALID_INPUT",
            OutOfBounds { .. } => "PATH_OUT_OF_BOUNDS",
            StartBlocked { .. } => "PATH_START_BLOCKED",
            EndBlocked { .. } => "PATH_END_BLOCKED",
            Exhausted { .. } => "PATH_EXHAUSTED",
            Unreachable { .. } => "PATH_UNREACHABLE",
        }
    }
}
