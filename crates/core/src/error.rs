//! Error type for parsing core values.

/// Errors raised when turning raw strings into core values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A raw string did not match any variant of an enum
    #[error("unknown {kind}: {value}")]
    UnknownVariant {
        /// Enum type name
        kind: &'static str,
        /// Offending input
        value: String,
    },

    /// A string was not a valid identifier
    #[error("invalid {kind}: {value}")]
    InvalidId {
        /// Identifier type name
        kind: &'static str,
        /// Offending input
        value: String,
    },
}
