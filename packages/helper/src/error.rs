//! Transform Errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TransformError>;

/// A failure that aborts a whole `transform` call.
///
/// Nothing registered during the failed call stays visible in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// An import list item that does not start with an identifier.
    ///
    /// The scanner only hands over brace contents, so this means the list held
    /// something like a string literal or a stray operator.
    #[error("Invalid import in {unit}: `{piece}`")]
    InvalidImport { unit: String, piece: String },

    /// Every 4-character identifier has been handed out.
    #[error("Identifier space exhausted after {capacity} import statements")]
    IdSpaceExhausted { capacity: usize },
}
