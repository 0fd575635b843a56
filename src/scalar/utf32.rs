//! Scalar UTF-32 decode/encode rules. Every code unit is a full code
//! point; there is no multi-unit sequence, so the only possible errors are
//! truncation (a dangling partial unit at the end of the buffer),
//! too-large (above `0x10FFFF`), and surrogate (in `0xD800..=0xDFFF`).
//! Units are read and written in host-native byte order: this crate has no
//! separate UTF-32LE/BE tag.

use crate::codec::{Codec, DecodeStep, EncodeStep};
use crate::error::ErrorKind;

pub(crate) struct Utf32;

impl Codec for Utf32 {
    const UNIT_BYTES: usize = 4;
    const MAX_UNITS_PER_CODEPOINT: usize = 1;

    fn decode_one(input: &[u8], unit: usize, checked: bool) -> DecodeStep {
        let offset = unit * 4;
        if offset + 4 > input.len() {
            return DecodeStep::err(ErrorKind::TooShort);
        }
        let cp = u32::from_ne_bytes(input[offset..offset + 4].try_into().unwrap());
        if checked {
            if cp > 0x10FFFF {
                return DecodeStep::err(ErrorKind::TooLarge);
            }
            if (0xD800..=0xDFFF).contains(&cp) {
                return DecodeStep::err(ErrorKind::Surrogate);
            }
        }
        DecodeStep::ok(cp, 1)
    }

    fn encode_one(cp: u32, output: &mut [u8], unit: usize) -> EncodeStep {
        if cp > 0x10FFFF {
            return EncodeStep::err(ErrorKind::TooLarge);
        }
        if (0xD800..=0xDFFF).contains(&cp) {
            return EncodeStep::err(ErrorKind::Surrogate);
        }
        let offset = unit * 4;
        if offset + 4 > output.len() {
            return EncodeStep::err(ErrorKind::TooShort);
        }
        output[offset..offset + 4].copy_from_slice(&cp.to_ne_bytes());
        EncodeStep::ok(1)
    }

    #[inline]
    fn encoded_units(_cp: u32) -> usize {
        1
    }

    #[inline]
    fn is_ascii_unit(input: &[u8], unit: usize) -> bool {
        let offset = unit * 4;
        offset + 4 <= input.len()
            && u32::from_ne_bytes(input[offset..offset + 4].try_into().unwrap()) < 0x80
    }
}
