//! Engine configuration errors.

/// Errors from parsing engine settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The depth setting is neither a known policy name nor a positive number.
    #[error("invalid depth: {value}")]
    InvalidDepth {
        /// The depth string that failed to parse.
        value: String,
    },
}
