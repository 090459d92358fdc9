//! Common error infrastructure for scanner-core.
//!
//! The scanner never surfaces errors to the user: every failure is either
//! recovered locally (skip an entity, treat a pool as empty) or rejected as
//! invalid input. [`ErrorSeverity`] records which of the two applies so
//! callers can pick a log level.

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Recovered in place; the scan continues with partial data.
    ///
    /// Examples: unreadable entity, unavailable pool
    Recoverable,

    /// Invalid input that should not be retried unchanged.
    ///
    /// Examples: tile query outside the map
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for scanner-core errors.
pub trait ScannerError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
