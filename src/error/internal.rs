use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Stored Discord IDs are written from `u64` values, so this only happens when the
    /// database was edited by hand.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A write touched a different number of rows than the preceding check guaranteed.
    #[error("{operation} affected {actual} rows, expected {expected}")]
    UnexpectedRowCount {
        /// Name of the repository operation
        operation: &'static str,
        /// Rows the preceding existence check guaranteed
        expected: u64,
        /// Rows actually affected
        actual: u64,
    },

    /// More than one registration row shares an identity that must be unique.
    #[error("Found {count} registration rows for {identity}")]
    DuplicateIdentity {
        /// Human readable description of the identity (Discord ID or email)
        identity: String,
        /// Number of rows found
        count: usize,
    },

    /// A destructive query was issued with a filter that has no fields set.
    #[error("Refusing to run {0} with an empty record filter")]
    EmptyFilter(&'static str),

    /// The configured guild has no role or channel with the expected name.
    #[error("Guild has no {kind} named '{name}'")]
    MissingGuildEntity {
        /// Either `role` or `channel`
        kind: &'static str,
        /// The configured name that was looked up
        name: String,
    },
}
