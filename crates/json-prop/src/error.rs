//! Error types for property lookup.

use thiserror::Error;

use crate::types::TypeTag;

/// Structural or navigational failure while walking a lookup path.
///
/// Every traversal variant carries the 0-based position of the failing step
/// in the path and the stringified key at that position, so callers can
/// pinpoint the exact path element that failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// An index step was applied to a value that is not an array.
    #[error("no array found for key {key} (at index {index})")]
    NotAnArray { index: usize, key: String },
    /// An index step was negative or past the end of the array.
    #[error("array index out of bounds for key {key} (at index {index})")]
    IndexOutOfBounds { index: usize, key: String },
    /// A key step was applied to a value that is not an object.
    #[error("no object found for key {key} (at index {index})")]
    NotAnObject { index: usize, key: String },
    /// A key step named a member the object does not have.
    #[error("object property not found for key {key} (at index {index})")]
    PropertyNotFound { index: usize, key: String },
    /// An option flag appeared after a key or index step.
    #[error("options must be specified before the actual keys for key {key} (at index {index})")]
    OptionAfterKey { index: usize, key: String },
    /// The resolved value does not carry the requested type tag.
    #[error("property is not of type {expected} for key {key} (at index {index})")]
    TypeMismatch {
        index: usize,
        key: String,
        expected: TypeTag,
    },
    /// The path exceeds the depth cap enforced by `validate_path`.
    #[error("path too long")]
    PathTooLong,
}

/// Any failure produced by the lookup API.
///
/// The three kinds are distinct so callers can branch on "missing or wrong
/// shape" vs. "is null" vs. "number does not fit".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// Structural, ordering, or type-mismatch failure during traversal.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// The resolved value is JSON null and `ErrorOnNull` was requested.
    #[error("value is null for key {key}")]
    NullValue { key: String },
    /// The resolved number exists but cannot be represented as the
    /// requested kind (fractional or overflowing integer, unparsable float).
    #[error("cannot represent number {value} as {target}")]
    Convert { value: String, target: &'static str },
}
