use thiserror::Error;

/// A `%` that is not followed by two hex digits.
///
/// Only the argument being decoded is affected; callers are free to reject it
/// and carry on with the rest of their input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid URL encoding: not a valid digit in {sequence:?} at offset {position}")]
pub struct MalformedEscapeError {
    /// The offending sequence, starting at the `%` (at most three characters).
    pub sequence: String,
    /// Byte offset of the `%` in the escaped input.
    pub position: usize,
}

/// The charset label does not name an encoding this build knows about.
///
/// This points at a misconfigured deployment rather than bad input, so it is
/// never retried. See [`UnsupportedCharsetError::is_fatal`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported charset: {label}")]
pub struct UnsupportedCharsetError {
    pub label: String,
}

impl UnsupportedCharsetError {
    pub fn is_fatal(&self) -> bool {
        true
    }
}
