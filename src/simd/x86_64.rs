//! AVX2 decoder: one lane group per step as two 256-bit halves.
//!
//! The payload stays resident in two ymm registers across the slices of a
//! block; each step ANDs out the low `width` bits of every lane and shifts
//! the registers right by the same amount. `_mm256_srl_epi32` takes its
//! count from an xmm register because the width is only known at run time,
//! and a count of 32 or more yields zero, exactly what a fully consumed
//! block needs.

use crate::bits::lowest_set_bit;
use crate::codec::{BLOCK_BYTES, DecodeError, LANES, SELECTOR_BYTES};
use crate::masks::MASK_SET;

/// AVX2 implementation of the block decode loop.
///
/// # Safety
///
/// The caller must have verified AVX2 support at runtime. `source` has
/// already been validated to be a whole number of blocks.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn decode_avx2(
    destination: &mut [u32],
    source: &[u8],
) -> Result<usize, DecodeError> {
    unsafe {
        use std::arch::x86_64::*;

        let capacity = destination.len();
        let into = destination.as_mut_ptr();
        let bytes = source.as_ptr();

        let mut selector: u64 = 0;
        let mut payload1 = _mm256_setzero_si256();
        let mut payload2 = _mm256_setzero_si256();
        let mut cursor = 0usize;
        let mut out = 0usize;

        loop {
            if selector == 0 {
                if cursor >= source.len() {
                    return Ok(out);
                }
                selector = u64::from(u32::from_le_bytes([
                    source[cursor],
                    source[cursor + 1],
                    source[cursor + 2],
                    source[cursor + 3],
                ]));
                payload1 =
                    _mm256_loadu_si256(bytes.add(cursor + SELECTOR_BYTES) as *const __m256i);
                payload2 =
                    _mm256_loadu_si256(bytes.add(cursor + SELECTOR_BYTES + 32) as *const __m256i);
                cursor += BLOCK_BYTES;
            }

            if out + LANES > capacity {
                return Err(DecodeError::OutputTooSmall {
                    needed: out + LANES,
                    capacity,
                });
            }

            let width = lowest_set_bit(selector);
            let mask = _mm256_loadu_si256(MASK_SET[width as usize].as_ptr() as *const __m256i);
            _mm256_storeu_si256(into.add(out) as *mut __m256i, _mm256_and_si256(payload1, mask));
            _mm256_storeu_si256(
                into.add(out + 8) as *mut __m256i,
                _mm256_and_si256(payload2, mask),
            );

            let count = _mm_cvtsi32_si128(width as i32);
            payload1 = _mm256_srl_epi32(payload1, count);
            payload2 = _mm256_srl_epi32(payload2, count);

            out += LANES;
            selector >>= width;
        }
    }
}
