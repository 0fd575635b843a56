//! Latin-1 (ISO-8859-1): every byte is a valid code point equal to its own
//! value, so this codec never reports an error decoding, and only
//! [`crate::error::ErrorKind::TooLarge`] encoding a code point above
//! `0xFF`.

use crate::codec::{Codec, DecodeStep, EncodeStep};
use crate::error::ErrorKind;

pub(crate) struct Latin1;

impl Codec for Latin1 {
    const UNIT_BYTES: usize = 1;
    const MAX_UNITS_PER_CODEPOINT: usize = 1;

    #[inline]
    fn decode_one(input: &[u8], unit: usize, _checked: bool) -> DecodeStep {
        DecodeStep::ok(input[unit] as u32, 1)
    }

    #[inline]
    fn encode_one(cp: u32, output: &mut [u8], unit: usize) -> EncodeStep {
        if cp > 0xFF {
            return EncodeStep::err(ErrorKind::TooLarge);
        }
        output[unit] = cp as u8;
        EncodeStep::ok(1)
    }

    #[inline]
    fn encoded_units(_cp: u32) -> usize {
        1
    }

    #[inline]
    fn is_ascii_unit(input: &[u8], unit: usize) -> bool {
        input[unit] < 0x80
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_every_byte_value() {
        for b in 0u8..=255 {
            let step = Latin1::decode_one(&[b], 0, true);
            assert_eq!(step.error, ErrorKind::None);
            assert_eq!(step.cp, b as u32);
        }
    }

    #[test]
    fn encode_rejects_above_0xff() {
        let mut out = [0u8; 1];
        assert_eq!(
            Latin1::encode_one(0x100, &mut out, 0).error,
            ErrorKind::TooLarge
        );
    }
}
