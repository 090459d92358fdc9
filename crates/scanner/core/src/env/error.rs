//! Entity source access errors.

use crate::error::{ErrorSeverity, ScannerError};
use crate::position::Position;

use super::Pool;

/// Errors that occur when reading world data from an [`EntitySource`](super::EntitySource).
///
/// None of these abort a scan: an unavailable pool reads as empty and a
/// failed entity read drops that single entity.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The source cannot provide this pool at all.
    #[error("{0} pool not available")]
    NotAvailable(Pool),

    /// A single entity's attributes could not be resolved.
    #[error("failed to read {pool} entity: {reason}")]
    EntityRead { pool: Pool, reason: String },

    /// A tile query fell outside the map.
    #[error("position {0} is out of map bounds")]
    OutOfBounds(Position),
}

impl SourceError {
    pub fn entity_read(pool: Pool, reason: impl Into<String>) -> Self {
        Self::EntityRead {
            pool,
            reason: reason.into(),
        }
    }
}

impl ScannerError for SourceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotAvailable(_) | Self::EntityRead { .. } => ErrorSeverity::Recoverable,
            Self::OutOfBounds(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAvailable(_) => "SOURCE_NOT_AVAILABLE",
            Self::EntityRead { .. } => "SOURCE_ENTITY_READ",
            Self::OutOfBounds(_) => "SOURCE_OUT_OF_BOUNDS",
        }
    }
}
