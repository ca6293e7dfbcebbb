use thiserror::Error;

pub const GENERIC_UNEXPECTED: &str = "An unexpected error occurred.";

/// Every way a search can fail. Each variant renders as a single line and
/// leaves the widget usable for another attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Raised locally by the controller; the provider is never contacted.
    #[error("Please enter a valid location.")]
    EmptyInput,

    #[error("API key is missing or undefined. Set WEATHER_API_KEY or run `weather-widget configure`.")]
    MissingCredential,

    #[error("Invalid city name. Please try again.")]
    InvalidLocation,

    #[error("Invalid API key or you've exceeded your quota")]
    AuthOrQuota,

    #[error("City not found")]
    NotFound { status: u16 },

    #[error("{0}")]
    Unexpected(String),
}

/// Payload-free tag of a [`QueryError`], for branching and comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryErrorKind {
    EmptyInput,
    MissingCredential,
    InvalidLocation,
    AuthOrQuota,
    NotFound,
    Unexpected,
}

impl QueryError {
    pub fn kind(&self) -> QueryErrorKind {
        match self {
            QueryError::EmptyInput => QueryErrorKind::EmptyInput,
            QueryError::MissingCredential => QueryErrorKind::MissingCredential,
            QueryError::InvalidLocation => QueryErrorKind::InvalidLocation,
            QueryError::AuthOrQuota => QueryErrorKind::AuthOrQuota,
            QueryError::NotFound { .. } => QueryErrorKind::NotFound,
            QueryError::Unexpected(_) => QueryErrorKind::Unexpected,
        }
    }

    /// Wrap an unclassified fault, falling back to a generic message when the
    /// fault has nothing to say.
    pub fn unexpected(fault: impl std::fmt::Display) -> Self {
        let message = fault.to_string();
        if message.trim().is_empty() {
            QueryError::Unexpected(GENERIC_UNEXPECTED.to_string())
        } else {
            QueryError::Unexpected(message)
        }
    }

    /// Map a non-success provider status to its error bucket.
    pub fn from_status(status: u16) -> Self {
        match status {
            403 => QueryError::AuthOrQuota,
            400 => QueryError::InvalidLocation,
            other => QueryError::NotFound { status: other },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_buckets() {
        assert_eq!(QueryError::from_status(403).kind(), QueryErrorKind::AuthOrQuota);
        assert_eq!(QueryError::from_status(400).kind(), QueryErrorKind::InvalidLocation);
        for status in [401, 404, 429, 500, 503] {
            assert_eq!(QueryError::from_status(status), QueryError::NotFound { status });
        }
    }

    #[test]
    fn unexpected_keeps_fault_message() {
        let err = QueryError::unexpected("connection refused");
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.kind(), QueryErrorKind::Unexpected);
    }

    #[test]
    fn unexpected_without_message_is_generic() {
        assert_eq!(QueryError::unexpected("").to_string(), GENERIC_UNEXPECTED);
        assert_eq!(QueryError::unexpected("  ").to_string(), GENERIC_UNEXPECTED);
    }

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(QueryError::EmptyInput.to_string(), "Please enter a valid location.");
        assert_eq!(QueryError::NotFound { status: 404 }.to_string(), "City not found");
        assert!(QueryError::MissingCredential.to_string().contains("WEATHER_API_KEY"));
    }
}
