//! Byte-level views over the signed `char` buffers some platforms use for
//! UTF-8 text.
//!
//! Every encoding this crate handles — including [`crate::tags::EncodingTag::Utf8Char`]
//! — is represented internally as a `&[u8]` / `&mut [u8]` byte buffer; this
//! module is the one place that bridges the signed-`i8` convention at the
//! public boundary to that internal representation, via `bytemuck` rather
//! than a raw pointer cast.

use bytemuck::{cast_slice, cast_slice_mut};

/// Reinterpret a signed-`char` buffer as the unsigned byte buffer every
/// codec operates on. `i8` and `u8` share layout, so this is a free
/// reinterpretation, not a conversion.
#[inline]
pub(crate) fn i8_as_u8(input: &[i8]) -> &[u8] {
    cast_slice(input)
}

/// Mutable counterpart of [`i8_as_u8`].
#[inline]
pub(crate) fn i8_as_u8_mut(output: &mut [i8]) -> &mut [u8] {
    cast_slice_mut(output)
}
