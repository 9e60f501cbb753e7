//! Common error infrastructure for nav-core.
//!
//! Domain errors (`MapError`, `PathError`, `MotionError`) live next to the
//! operations that produce them. This module only holds the classification
//! shared between them, so callers can decide how to react without matching
//! on every variant.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the world may allow the request later (target walled off, budget hit)
/// - **Validation**: the request itself is malformed and must change before retrying
/// - **Internal**: an inconsistency that indicates a bug
/// - **Fatal**: the planner cannot operate at all (no collision raster)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Shared behaviour of all nav-core error enums.
pub trait NavError: std::error::Error {
    fn severity(&self) -> ErrorSeverity;

    /// Stable, machine-readable code (e.g. `PATH_END_BLOCKED`) for logs and telemetry.
    fn error_code(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_recoverable_is_recoverable() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(!ErrorSeverity::Fatal.is_recoverable());
    }

    #[test]
    fn internal_covers_fatal() {
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
