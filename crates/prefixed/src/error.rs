use thiserror::Error;

/// Errors raised before any probing happens.
///
/// Not finding a property is never an error; lookups report that as
/// `None`, `false` or [`Detection::NotFound`](crate::Detection::NotFound).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// The property name was empty or whitespace only, which would
    /// otherwise probe for the bare vendor prefixes themselves.
    #[error("property name must not be empty or whitespace only (got {0:?})")]
    EmptyPropertyName(String),
}

pub type Result<T> = std::result::Result<T, DetectError>;
