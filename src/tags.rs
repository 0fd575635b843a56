//! The runtime encoding tag used by the dispatching [`crate::api`] layer.

/// Identifies one of the six supported in-memory text representations.
///
/// `Utf8` and `Utf8Char` describe the same byte layout; they exist as
/// separate tags only so that callers working with `&[i8]` buffers (the
/// signed `char` convention some platforms use for UTF-8 text) don't need
/// to transmute before calling into the engine. `Utf32` has no separate
/// big/little-endian tags: the engine always reads and writes 32-bit units
/// in host-native order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncodingTag {
    Latin1,
    Utf8,
    Utf8Char,
    Utf16Le,
    Utf16Be,
    Utf32,
}

impl EncodingTag {
    /// Width in bytes of one code unit in this encoding's in-memory form.
    #[inline]
    pub const fn unit_bytes(self) -> usize {
        match self {
            EncodingTag::Latin1 | EncodingTag::Utf8 | EncodingTag::Utf8Char => 1,
            EncodingTag::Utf16Le | EncodingTag::Utf16Be => 2,
            EncodingTag::Utf32 => 4,
        }
    }
}
