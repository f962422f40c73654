//! Error types for scope checks

use thiserror::Error;

/// Scope check errors
///
/// The satisfaction predicates themselves are total; this error only comes
/// out of `Given::authorize`.
#[derive(Debug, Error)]
pub enum ScopesError {
    /// Given scopes do not satisfy any alternative of the requirement
    #[error("Insufficient scopes: client scopes do not satisfy {required}")]
    InsufficientScopes {
        /// DNF rendering of the unmet requirement
        required: String,
    },
}

/// Result type for scope operations
pub type Result<T> = std::result::Result<T, ScopesError>;
