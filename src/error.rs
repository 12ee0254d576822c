//! The validation error reported when textual color input fails to parse.
//!
//! There is a single error kind: conversions fail fast on malformed input
//! and never substitute a default color. The caller (a text field, a
//! clipboard paste handler) decides how to surface the failure.

/// A single grammar violation found while validating textual color input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// The input has a length no accepted hex form uses.
    #[error("wrong length: expected {expected} hex digits, found {found}")]
    WrongLength {
        /// The digit counts the operation accepts, e.g. `"3 or 6"`.
        expected: &'static str,
        /// The number of digits received.
        found: usize,
    },

    /// A character outside `[0-9a-fA-F]` in the digit part of a hex color.
    #[error("non-hex character {found:?} at position {position}")]
    NonHexDigit {
        /// Offset of the character within the received string.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// The input is not wrapped in the expected CSS function form.
    #[error("expected a {expected}(...) function")]
    MissingFunction {
        /// The function name the operation expects, e.g. `"rgb"`.
        expected: &'static str,
    },

    /// The CSS function carries the wrong number of arguments.
    #[error("expected {expected} channels, found {found}")]
    WrongChannelCount {
        /// How many channels the function form takes.
        expected: usize,
        /// How many were received.
        found: usize,
    },

    /// A channel argument is not a number in the accepted form.
    #[error("malformed {channel} channel {found:?}")]
    MalformedChannel {
        /// Which channel the argument was parsed as.
        channel: &'static str,
        /// The offending token.
        found: String,
    },
}

/// The error returned when a value fails color validation. Carries the name
/// of the failing operation, the raw received value, and the specific
/// grammar violations found.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{operation}: {received:?} is not a valid color value")]
pub struct ColorError {
    /// The operation that rejected the value, e.g. `"Rgb::from_hex"`.
    pub operation: &'static str,
    /// The raw value as received.
    pub received: String,
    /// Every violation found while validating the value.
    pub violations: Vec<Violation>,
}

impl ColorError {
    pub(crate) fn new(
        operation: &'static str,
        received: &str,
        violations: Vec<Violation>,
    ) -> Self {
        Self {
            operation,
            received: received.to_string(),
            violations,
        }
    }
}
