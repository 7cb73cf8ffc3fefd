//! Error types for the roster model
//!
//! Covers the few places where roster data can be rejected:
//! - Unparseable renewal/calendar dates
//! - Unknown tier or status names coming from text input
//! - Filters whose criteria can never match

/// Main roster error type
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Date text could not be parsed as a calendar date
    #[error("invalid date '{input}': {source}")]
    InvalidDate {
        /// The rejected input text
        input: String,
        /// Underlying parser error
        #[source]
        source: chrono::ParseError,
    },

    /// Tier name is not one of the membership tiers
    #[error("unknown membership tier: '{0}'")]
    UnknownTier(String),

    /// Record id is not a decimal number
    #[error("invalid record id: '{0}'")]
    InvalidRecordId(String),

    /// Status name is not recognised
    #[error("unknown status: '{0}'")]
    UnknownStatus(String),

    /// Filter criteria are self-contradictory
    #[error("invalid filter: {0}")]
    InvalidFilter(String),
}

impl RosterError {
    /// Create invalid date error for input text
    pub fn invalid_date(input: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::InvalidDate {
            input: input.into(),
            source,
        }
    }

    /// Check if the error came from date parsing
    #[inline]
    #[must_use]
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidDate { .. })
    }
}

/// Result type alias for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
