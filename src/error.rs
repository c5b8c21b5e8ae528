//! Error types for key-tagged value inspection and dispatch

use thiserror::Error;

/// Any failure surfaced by this crate.
///
/// The variants are transparent wrappers, so `Display` is identical to the
/// inner error while callers can still discriminate the two kinds by
/// matching on the variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input was not a key-tagged value
    #[error(transparent)]
    Conformance(#[from] ConformanceError),
    /// Dispatch found no matching action and no fallback
    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Raised when expecting a key-tagged value but got something else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConformanceError {
    /// The value is composite, but its key count is not exactly one
    #[error("Expected exactly one key but found {count}")]
    KeyCount {
        /// How many keys the value actually exposes
        count: usize,
    },
    /// The value is not composite at all
    #[error("Expected a key-tagged value but found {kind}")]
    NotComposite {
        /// What the value turned out to be
        kind: &'static str,
    },
}

/// Raised when [`match_key`](crate::match_key) found no matching key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No action provided for key: {key}")]
pub struct MatchError {
    /// The key no action was registered for
    pub key: String,
}
