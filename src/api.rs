//! Public entry points: `validate`, `length`, and `convert`, each taking an
//! [`crate::tags::EncodingTag`] (or a pair of them) and dispatching to the
//! concrete [`crate::codec::Codec`] instantiation in [`crate::scalar`],
//! accelerated by [`crate::vector`] where [`crate::backend::Backend`]
//! allows it.

use crate::backend::Backend;
use crate::error::{ConvertResult, ValidateResult};
use crate::policy::Policy;
use crate::scalar;
use crate::scalar::latin1::Latin1;
use crate::scalar::utf16::{Utf16Be, Utf16Le};
use crate::scalar::utf32::Utf32;
use crate::scalar::utf8::Utf8;
use crate::tags::EncodingTag;
use crate::units;
use crate::vector;

/// The five distinct byte-level codecs backing the six public tags —
/// [`EncodingTag::Utf8`] and [`EncodingTag::Utf8Char`] share one codec and
/// differ only in the signedness of the caller's slice type.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Kind {
    Latin1,
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32,
}

impl From<EncodingTag> for Kind {
    #[inline]
    fn from(tag: EncodingTag) -> Self {
        match tag {
            EncodingTag::Latin1 => Kind::Latin1,
            EncodingTag::Utf8 | EncodingTag::Utf8Char => Kind::Utf8,
            EncodingTag::Utf16Le => Kind::Utf16Le,
            EncodingTag::Utf16Be => Kind::Utf16Be,
            EncodingTag::Utf32 => Kind::Utf32,
        }
    }
}

/// Validate `input` (encoded as `tag`), using `backend` to choose between
/// the portable and AVX-512 implementations.
pub fn validate(tag: EncodingTag, input: &[u8], backend: Backend) -> ValidateResult {
    let use_vector = matches!(backend, Backend::Vector | Backend::Auto) && Backend::vector_available();

    match Kind::from(tag) {
        Kind::Latin1 => scalar::validate::<Latin1>(input),
        Kind::Utf8 => {
            if use_vector {
                #[cfg(target_arch = "x86_64")]
                {
                    return unsafe { vector::utf8::validate(input) };
                }
                #[cfg(not(target_arch = "x86_64"))]
                {
                    return vector::utf8::validate(input);
                }
            }
            scalar::validate::<Utf8>(input)
        }
        Kind::Utf16Le => scalar::validate::<Utf16Le>(input),
        Kind::Utf16Be => scalar::validate::<Utf16Be>(input),
        Kind::Utf32 => scalar::validate::<Utf32>(input),
    }
}

/// Count the code units `out_tag` would need to hold the same text as
/// `input`, which must already be well-formed `in_tag`.
pub fn length(in_tag: EncodingTag, out_tag: EncodingTag, input: &[u8]) -> usize {
    use Kind::*;
    macro_rules! call {
        ($In:ty, $Out:ty) => {
            scalar::length::<$In, $Out>(input)
        };
    }
    match (Kind::from(in_tag), Kind::from(out_tag)) {
        (Latin1, Latin1) => call!(Latin1, Latin1),
        (Latin1, Utf8) => call!(Latin1, Utf8),
        (Latin1, Utf16Le) => call!(Latin1, Utf16Le),
        (Latin1, Utf16Be) => call!(Latin1, Utf16Be),
        (Latin1, Utf32) => call!(Latin1, Utf32),

        (Utf8, Latin1) => call!(Utf8, Latin1),
        (Utf8, Utf8) => call!(Utf8, Utf8),
        (Utf8, Utf16Le) => call!(Utf8, Utf16Le),
        (Utf8, Utf16Be) => call!(Utf8, Utf16Be),
        (Utf8, Utf32) => call!(Utf8, Utf32),

        (Utf16Le, Latin1) => call!(Utf16Le, Latin1),
        (Utf16Le, Utf8) => call!(Utf16Le, Utf8),
        (Utf16Le, Utf16Le) => call!(Utf16Le, Utf16Le),
        (Utf16Le, Utf16Be) => call!(Utf16Le, Utf16Be),
        (Utf16Le, Utf32) => call!(Utf16Le, Utf32),

        (Utf16Be, Latin1) => call!(Utf16Be, Latin1),
        (Utf16Be, Utf8) => call!(Utf16Be, Utf8),
        (Utf16Be, Utf16Le) => call!(Utf16Be, Utf16Le),
        (Utf16Be, Utf16Be) => call!(Utf16Be, Utf16Be),
        (Utf16Be, Utf32) => call!(Utf16Be, Utf32),

        (Utf32, Latin1) => call!(Utf32, Latin1),
        (Utf32, Utf8) => call!(Utf32, Utf8),
        (Utf32, Utf16Le) => call!(Utf32, Utf16Le),
        (Utf32, Utf16Be) => call!(Utf32, Utf16Be),
        (Utf32, Utf32) => call!(Utf32, Utf32),
    }
}

/// Convert `input` (encoded as `in_tag`) into `output` (encoded as
/// `out_tag`) according to `policy`.
///
/// Conversion always runs on the scalar backend: the vector backend only
/// accelerates [`validate`] (see [`crate::vector`]).
pub fn convert(
    in_tag: EncodingTag,
    out_tag: EncodingTag,
    policy: Policy,
    input: &[u8],
    output: &mut [u8],
) -> ConvertResult {
    use Kind::*;
    macro_rules! call {
        ($In:ty, $Out:ty) => {
            scalar::convert::<$In, $Out>(policy, input, output)
        };
    }
    match (Kind::from(in_tag), Kind::from(out_tag)) {
        (Latin1, Latin1) => call!(Latin1, Latin1),
        (Latin1, Utf8) => call!(Latin1, Utf8),
        (Latin1, Utf16Le) => call!(Latin1, Utf16Le),
        (Latin1, Utf16Be) => call!(Latin1, Utf16Be),
        (Latin1, Utf32) => call!(Latin1, Utf32),

        (Utf8, Latin1) => call!(Utf8, Latin1),
        (Utf8, Utf8) => call!(Utf8, Utf8),
        (Utf8, Utf16Le) => call!(Utf8, Utf16Le),
        (Utf8, Utf16Be) => call!(Utf8, Utf16Be),
        (Utf8, Utf32) => call!(Utf8, Utf32),

        (Utf16Le, Latin1) => call!(Utf16Le, Latin1),
        (Utf16Le, Utf8) => call!(Utf16Le, Utf8),
        (Utf16Le, Utf16Le) => call!(Utf16Le, Utf16Le),
        (Utf16Le, Utf16Be) => call!(Utf16Le, Utf16Be),
        (Utf16Le, Utf32) => call!(Utf16Le, Utf32),

        (Utf16Be, Latin1) => call!(Utf16Be, Latin1),
        (Utf16Be, Utf8) => call!(Utf16Be, Utf8),
        (Utf16Be, Utf16Le) => call!(Utf16Be, Utf16Le),
        (Utf16Be, Utf16Be) => call!(Utf16Be, Utf16Be),
        (Utf16Be, Utf32) => call!(Utf16Be, Utf32),

        (Utf32, Latin1) => call!(Utf32, Latin1),
        (Utf32, Utf8) => call!(Utf32, Utf8),
        (Utf32, Utf16Le) => call!(Utf32, Utf16Le),
        (Utf32, Utf16Be) => call!(Utf32, Utf16Be),
        (Utf32, Utf32) => call!(Utf32, Utf32),
    }
}

/// Validate a signed-`char` UTF-8 buffer without the caller having to cast
/// it to `&[u8]` first.
pub fn validate_utf8_chars(input: &[i8], backend: Backend) -> ValidateResult {
    validate(EncodingTag::Utf8Char, units::i8_as_u8(input), backend)
}

/// Convert into a signed-`char` UTF-8 destination buffer without the
/// caller having to cast it to `&mut [u8]` first.
pub fn convert_to_utf8_chars(
    in_tag: EncodingTag,
    policy: Policy,
    input: &[u8],
    output: &mut [i8],
) -> ConvertResult {
    convert(in_tag, EncodingTag::Utf8Char, policy, input, units::i8_as_u8_mut(output))
}
