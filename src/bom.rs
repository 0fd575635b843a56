//! Byte-order-mark sniffing.
//!
//! A BOM is a convention of the *source*, not something this crate's codecs
//! produce or expect on their own: [`sniff`] is an opt-in helper a caller
//! can run over raw bytes before picking an [`crate::tags::EncodingTag`],
//! modelled on the `Encoding` auto-detection step other text-encoding
//! crates in this ecosystem provide alongside their core codec API.

use crate::tags::EncodingTag;

/// Inspect the leading bytes of `input` for a recognised byte-order mark.
///
/// Checks the 4-byte UTF-32 marks before the 2-byte UTF-16 ones, since the
/// UTF-32LE mark (`FF FE 00 00`) has the UTF-16LE mark (`FF FE`) as a
/// prefix. Returns the detected tag and the number of leading bytes the
/// mark itself occupies, which the caller should skip before decoding.
pub fn sniff(input: &[u8]) -> Option<(EncodingTag, usize)> {
    if input.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return Some((EncodingTag::Utf8, 3));
    }
    if input.starts_with(&[0xFF, 0xFE, 0x00, 0x00]) {
        return Some((EncodingTag::Utf32, 4));
    }
    if input.starts_with(&[0x00, 0x00, 0xFE, 0xFF]) {
        return Some((EncodingTag::Utf32, 4));
    }
    if input.starts_with(&[0xFF, 0xFE]) {
        return Some((EncodingTag::Utf16Le, 2));
    }
    if input.starts_with(&[0xFE, 0xFF]) {
        return Some((EncodingTag::Utf16Be, 2));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_utf8_bom() {
        assert_eq!(sniff(&[0xEF, 0xBB, 0xBF, b'A']), Some((EncodingTag::Utf8, 3)));
    }

    #[test]
    fn detects_utf16_le_and_be() {
        assert_eq!(sniff(&[0xFF, 0xFE, b'A', 0]), Some((EncodingTag::Utf16Le, 2)));
        assert_eq!(sniff(&[0xFE, 0xFF, 0, b'A']), Some((EncodingTag::Utf16Be, 2)));
    }

    #[test]
    fn prefers_utf32_le_over_utf16_le_prefix() {
        assert_eq!(sniff(&[0xFF, 0xFE, 0x00, 0x00]), Some((EncodingTag::Utf32, 4)));
    }

    #[test]
    fn detects_utf32_be() {
        assert_eq!(sniff(&[0x00, 0x00, 0xFE, 0xFF]), Some((EncodingTag::Utf32, 4)));
    }

    #[test]
    fn no_mark_returns_none() {
        assert_eq!(sniff(b"hello"), None);
        assert_eq!(sniff(&[]), None);
    }
}
