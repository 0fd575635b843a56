//! The generic `Codec` matrix: one implementation per encoding, instantiated
//! against every other encoding by the free functions in [`crate::scalar`]
//! and [`crate::vector`].
//!
//! Every concrete text representation in this crate — Latin-1, UTF-8,
//! UTF-16LE/BE, UTF-32 — is a byte buffer (`&[u8]` / `&mut [u8]`). A codec
//! knows how wide its own code unit is and how to step a single code point
//! on or off that buffer; the generic `validate`/`length`/`convert` loops
//! in [`crate::scalar::generic`] drive that one-code-point-at-a-time
//! interface to cover all twenty encoding pairs without duplicating the
//! outer loop six times over.

/// The result of decoding one code point starting at a given code-unit
/// index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) struct DecodeStep {
    /// The decoded Unicode scalar value. Meaningless when `error` is set.
    pub cp: u32,
    /// Number of code units (not bytes) consumed on success.
    pub advance: usize,
    pub error: crate::error::ErrorKind,
}

impl DecodeStep {
    #[inline]
    pub const fn ok(cp: u32, advance: usize) -> Self {
        DecodeStep {
            cp,
            advance,
            error: crate::error::ErrorKind::None,
        }
    }

    #[inline]
    pub const fn err(error: crate::error::ErrorKind) -> Self {
        DecodeStep {
            cp: 0,
            advance: 0,
            error,
        }
    }
}

/// The result of encoding one code point into an output buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) struct EncodeStep {
    /// Number of code units (not bytes) written on success.
    pub units: usize,
    pub error: crate::error::ErrorKind,
}

impl EncodeStep {
    #[inline]
    pub const fn ok(units: usize) -> Self {
        EncodeStep {
            units,
            error: crate::error::ErrorKind::None,
        }
    }

    #[inline]
    pub const fn err(error: crate::error::ErrorKind) -> Self {
        EncodeStep { units: 0, error }
    }
}

/// A single encoding's byte-level decode/encode rules.
///
/// All offsets and slice lengths passed to and returned from this trait
/// are in code units of `Self`, not bytes; implementations multiply by
/// [`Codec::UNIT_BYTES`] themselves when indexing into the underlying byte
/// buffer.
pub(crate) trait Codec {
    /// Width in bytes of one code unit.
    const UNIT_BYTES: usize;

    /// Upper bound on code units consumed or produced by a single code
    /// point, used to size scratch buffers and decide when the block fast
    /// path in [`crate::scalar::block`] may run unchecked.
    const MAX_UNITS_PER_CODEPOINT: usize;

    /// Decode one code point starting at code-unit index `unit`.
    ///
    /// `checked` selects between full semantic validation (the default)
    /// and the reduced validation used under
    /// [`crate::policy::Policy::AssumeValid`], which skips overlong,
    /// surrogate, too-large and header-bit checks but still bounds-checks
    /// every byte it reads.
    fn decode_one(input: &[u8], unit: usize, checked: bool) -> DecodeStep;

    /// Encode one code point into `output` starting at code-unit index
    /// `unit`.
    fn encode_one(cp: u32, output: &mut [u8], unit: usize) -> EncodeStep;

    /// Number of code units `Self` would need to encode `cp`, without
    /// writing anything. Used by [`crate::scalar::generic::length`].
    fn encoded_units(cp: u32) -> usize;

    /// True if the code unit at `unit` is plain ASCII (`< 0x80`) and can
    /// therefore be widened or narrowed into any other encoding with a
    /// trivial one-unit-to-one-unit copy, bypassing the full decode/encode
    /// round trip. Used by the block fast path in [`crate::scalar::block`].
    fn is_ascii_unit(input: &[u8], unit: usize) -> bool;

    /// Number of whole code units available in `input`.
    #[inline]
    fn unit_count(input: &[u8]) -> usize {
        input.len() / Self::UNIT_BYTES
    }
}
