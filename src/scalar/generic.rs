//! The portable backend's outer loops: `validate`, `length`, and `convert`,
//! each written once against the [`Codec`] trait and instantiated for
//! every one of the twenty ordered encoding pairs by [`crate::api`].
//!
//! These are also what the vector backend in [`crate::vector`] falls back
//! to for buffers shorter than one SIMD block, and for the scalar tail
//! after the last full block — and, on any block that reports an error,
//! for re-deriving the exact failing position (see the module docs on
//! [`crate::vector`]).

use crate::codec::Codec;
use crate::error::{ConvertResult, ErrorKind, ValidateResult};
use crate::policy::Policy;

use super::block;

fn ascii_run<C: Codec>(input: &[u8], start_unit: usize) -> usize {
    if C::UNIT_BYTES == 1 {
        block::ascii_run_u8(input, start_unit)
    } else {
        let unit_count = C::unit_count(input);
        block::ascii_run_by(unit_count, start_unit, |u| C::is_ascii_unit(input, u))
    }
}

/// Validate `input` as well-formed `C`, scanning until the first error or
/// the end of input.
pub(crate) fn validate<C: Codec>(input: &[u8]) -> ValidateResult {
    let total = C::unit_count(input);
    let mut unit = 0usize;
    while unit < total {
        let run = ascii_run::<C>(input, unit);
        if run > 0 {
            unit += run;
            continue;
        }
        let step = C::decode_one(input, unit, true);
        if step.error != ErrorKind::None {
            return ValidateResult::err(step.error, unit);
        }
        unit += step.advance;
    }
    ValidateResult::ok(unit)
}

/// Count the code units `Out` would need to hold the same text as `input`,
/// which must already be well-formed `In`. Behaviour is unspecified (but
/// memory-safe) if it is not.
pub(crate) fn length<In: Codec, Out: Codec>(input: &[u8]) -> usize {
    let total = In::unit_count(input);
    let mut unit = 0usize;
    let mut out_units = 0usize;
    while unit < total {
        let run = ascii_run::<In>(input, unit);
        if run > 0 {
            unit += run;
            out_units += run;
            continue;
        }
        let step = In::decode_one(input, unit, false);
        if step.error != ErrorKind::None {
            // Malformed input under a length query with no way to report
            // it: stop counting at the failure, same as validate would.
            break;
        }
        unit += step.advance.max(1);
        out_units += Out::encoded_units(step.cp).max(1);
    }
    out_units
}

/// Convert `input` (encoded as `In`) into `output` (encoded as `Out`)
/// according to `policy`.
pub(crate) fn convert<In: Codec, Out: Codec>(
    policy: Policy,
    input: &[u8],
    output: &mut [u8],
) -> ConvertResult {
    let checked = policy != Policy::AssumeValid;
    let total = In::unit_count(input);
    let mut in_unit = 0usize;
    let mut out_unit = 0usize;

    while in_unit < total {
        let run = ascii_run::<In>(input, in_unit);
        if run > 0 {
            if out_unit + run > Out::unit_count(output) {
                return fail(policy, ErrorKind::TooShort, in_unit, out_unit);
            }
            for i in 0..run {
                // ASCII is representable identically in every destination
                // encoding with a one-unit write; read the source unit
                // through In::decode_one so In's own code-unit width and
                // byte order apply (a raw byte index would be wrong for
                // any In wider than one byte), then encode_one does the
                // bounds-checked byte placement for Out's width.
                let cp = In::decode_one(input, in_unit + i, false).cp;
                let step = Out::encode_one(cp, output, out_unit + i);
                debug_assert_eq!(step.error, ErrorKind::None);
            }
            in_unit += run;
            out_unit += run;
            continue;
        }

        let decoded = In::decode_one(input, in_unit, checked);
        if decoded.error != ErrorKind::None {
            return fail(policy, decoded.error, in_unit, out_unit);
        }

        let encoded = Out::encode_one(decoded.cp, output, out_unit);
        if encoded.error != ErrorKind::None {
            return fail(policy, encoded.error, in_unit, out_unit);
        }

        in_unit += decoded.advance;
        out_unit += encoded.units;
    }

    ConvertResult {
        error: ErrorKind::None,
        input_consumed: in_unit,
        output_written: out_unit,
    }
}

#[inline]
fn fail(policy: Policy, error: ErrorKind, input_consumed: usize, output_written: usize) -> ConvertResult {
    let output_written = if policy == Policy::ZeroOrProcessed {
        0
    } else {
        output_written
    };
    ConvertResult {
        error,
        input_consumed,
        output_written,
    }
}
