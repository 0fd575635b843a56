//! Error taxonomy and result types shared by every encoding pair.
//!
//! The engine never grows this set at runtime: every scalar and vector
//! backend reports one of these seven kinds, and bit-exactness between
//! backends is defined in terms of them (see [`crate::vector`]).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The reason a validate/convert operation stopped before the end of input.
///
/// `None` means "no error" and is the value carried by a fully successful
/// [`ValidateResult`] or [`ConvertResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// No error occurred.
    None,
    /// A multi-unit sequence was truncated by the end of the input, or a
    /// UTF-8 continuation byte did not match `10xxxxxx`.
    TooShort,
    /// A stray continuation-class byte appeared where a leading byte was
    /// expected (UTF-8 only).
    TooLong,
    /// A decoded code point exceeds `0x10FFFF`, or a UTF-8 leading byte
    /// declares a sequence length longer than four bytes.
    TooLarge,
    /// A code point was encoded using more units than its shortest form
    /// requires.
    Overlong,
    /// A lone or mismatched UTF-16 surrogate half, or a decoded code point
    /// in the surrogate range `0xD800..=0xDFFF`.
    Surrogate,
    /// A UTF-8 leading byte declared reserved header bits (`0xF8..=0xFF`).
    HeaderBits,
}

impl ErrorKind {
    /// True for [`ErrorKind::None`].
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, ErrorKind::None)
    }
}

impl Default for ErrorKind {
    #[inline]
    fn default() -> Self {
        ErrorKind::None
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = match self {
            ErrorKind::None => "no error",
            ErrorKind::TooShort => "input truncated mid-sequence",
            ErrorKind::TooLong => "stray continuation byte",
            ErrorKind::TooLarge => "code point or sequence length out of range",
            ErrorKind::Overlong => "overlong encoding",
            ErrorKind::Surrogate => "lone or invalid surrogate",
            ErrorKind::HeaderBits => "reserved leading-byte header bits",
        };
        f.write_str(text)
    }
}

/// Outcome of a `validate` call: how many input code units were confirmed
/// well-formed, and what (if anything) stopped the scan.
///
/// `input_consumed` never counts the code unit at which `error` occurred;
/// it is always the count of code units validated strictly before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidateResult {
    pub error: ErrorKind,
    pub input_consumed: usize,
}

impl ValidateResult {
    #[inline]
    pub const fn ok(input_consumed: usize) -> Self {
        ValidateResult {
            error: ErrorKind::None,
            input_consumed,
        }
    }

    #[inline]
    pub const fn err(error: ErrorKind, input_consumed: usize) -> Self {
        ValidateResult {
            error,
            input_consumed,
        }
    }

    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.error.is_ok()
    }
}

/// Outcome of a `convert` call: how much input was consumed, how much
/// output was written, and what (if anything) stopped the conversion.
///
/// Under [`crate::policy::Policy::ZeroOrProcessed`], `output_written` is
/// forced to zero whenever `error` is not [`ErrorKind::None`], even though
/// the destination buffer may already hold partially written bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConvertResult {
    pub error: ErrorKind,
    pub input_consumed: usize,
    pub output_written: usize,
}

impl ConvertResult {
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.error.is_ok()
    }
}
