//! Shared error types used across submodules.

use thiserror::Error;

use crate::matching::MatchingError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum TlPhysicsError {
    /// Wraps matching-solver errors.
    #[error(transparent)]
    Matching(#[from] MatchingError),
    /// Raised when a caller supplies an invalid parameter set.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_errors_convert_transparently() {
        let inner = MatchingError::NoWavelength { freq_hz: 0.0 };
        let message = inner.to_string();
        let outer: TlPhysicsError = inner.into();
        assert_eq!(outer.to_string(), message);
    }
}
