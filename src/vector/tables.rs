//! Keiser-Lemire lookup table for AVX-512 UTF-8 structural validation,
//! widened from a 16-entry-per-nibble pattern to the 64 lanes an
//! `__m512i` holds by repeating the pattern four times.
//!
//! The vector block validator only needs to be conservative, not exact: it
//! may classify a block as "uncertain" and hand the whole input back to
//! the scalar validator, but it must never call a block valid when the
//! scalar validator would reject it. That lets this table stop at
//! continuation-byte structure and invalid leads; the overlong/surrogate
//! second-byte-range refinements for `E0`, `ED`, `F0`, `F4` leads are left
//! to the scalar fallback the vector path takes whenever one of those four
//! bytes appears in a block (see [`crate::vector::utf8`]).

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// One 16-entry table (indexed by a 4-bit nibble), replicated four times to
/// fill a 64-byte vector register.
const fn widen(nibble_table: [i8; 16]) -> [i8; 64] {
    let mut out = [0i8; 64];
    let mut lane = 0;
    while lane < 4 {
        let mut i = 0;
        while i < 16 {
            out[lane * 16 + i] = nibble_table[i];
            i += 1;
        }
        lane += 1;
    }
    out
}

// For each leading-byte high nibble, how many continuation bytes follow.
const FIRST_LEN: [i8; 16] = [
    0, 0, 0, 0, 0, 0, 0, 0, // 0x0-0x7: ASCII
    0, 0, 0, 0, // 0x8-0xB: continuation bytes, never a valid lead
    1, 1, // 0xC-0xD: two-byte lead
    2, // 0xE: three-byte lead
    3, // 0xF: four-byte lead (0xF5-0xFF are invalid, caught separately)
];

#[cfg(target_arch = "x86_64")]
pub(crate) struct Utf8Tables {
    pub first_len: __m512i,
    pub nibble_mask: __m512i,
    pub continuation_tag: __m512i,
    pub cont_class_mask: __m512i,
    pub lead_c0: __m512i,
    pub lead_c1: __m512i,
    pub lead_e0: __m512i,
    pub lead_ed: __m512i,
    pub lead_f0: __m512i,
    pub lead_f4: __m512i,
    pub sign_flip: __m512i,
    pub f4_unsigned: __m512i,
}

#[cfg(target_arch = "x86_64")]
impl Utf8Tables {
    /// # Safety
    /// Caller must have verified `avx512f` and `avx512bw` support.
    #[target_feature(enable = "avx512f,avx512bw")]
    pub(crate) unsafe fn new() -> Self {
        unsafe {
            let first_len_arr = widen(FIRST_LEN);
            Self {
                first_len: _mm512_loadu_si512(first_len_arr.as_ptr() as *const i32),
                nibble_mask: _mm512_set1_epi8(0x0F),
                continuation_tag: _mm512_set1_epi8(0x80u8 as i8),
                cont_class_mask: _mm512_set1_epi8(0xC0u8 as i8),
                lead_c0: _mm512_set1_epi8(0xC0u8 as i8),
                lead_c1: _mm512_set1_epi8(0xC1u8 as i8),
                lead_e0: _mm512_set1_epi8(0xE0u8 as i8),
                lead_ed: _mm512_set1_epi8(0xEDu8 as i8),
                lead_f0: _mm512_set1_epi8(0xF0u8 as i8),
                lead_f4: _mm512_set1_epi8(0xF4u8 as i8),
                sign_flip: _mm512_set1_epi8(0x80u8 as i8),
                f4_unsigned: _mm512_set1_epi8((0xF4u8 ^ 0x80u8) as i8),
            }
        }
    }
}
