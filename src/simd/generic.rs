//! Scalar reference decoder: 16 parallel u32 accumulators in plain loops.
//!
//! Valid on every target and kept simple enough for the compiler to
//! auto-vectorize. The AVX2 path must match this output bit for bit.

use crate::bits::lowest_set_bit;
use crate::codec::{BLOCK_BYTES, DecodeError, LANES, SELECTOR_BYTES};
use crate::masks::MASK_SET;

#[inline]
fn read_u32_le(source: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([source[at], source[at + 1], source[at + 2], source[at + 3]])
}

/// Decode every block of `source` into `destination`, one lane group per
/// selector field. Returns the number of integers written.
///
/// `source` has already been validated to be whole blocks; the only check
/// left in the loop is per-group destination capacity.
pub(crate) fn decode_lanes(destination: &mut [u32], source: &[u8]) -> Result<usize, DecodeError> {
    let capacity = destination.len();
    let mut selector: u64 = 0;
    let mut payload = [0u32; LANES];
    let mut cursor = 0usize;
    let mut out = 0usize;

    loop {
        if selector == 0 {
            if cursor >= source.len() {
                return Ok(out);
            }
            selector = u64::from(read_u32_le(source, cursor));
            for lane in 0..LANES {
                payload[lane] = read_u32_le(source, cursor + SELECTOR_BYTES + lane * 4);
            }
            cursor += BLOCK_BYTES;
        }

        if out + LANES > capacity {
            return Err(DecodeError::OutputTooSmall {
                needed: out + LANES,
                capacity,
            });
        }

        let width = lowest_set_bit(selector);
        let mask = MASK_SET[width as usize][0];
        let group = &mut destination[out..out + LANES];
        for lane in 0..LANES {
            group[lane] = payload[lane] & mask;
        }
        // A width-32 shift would be out of range for u32, but it also means
        // the lanes are fully consumed.
        if width >= 32 {
            payload = [0u32; LANES];
        } else {
            for lane in 0..LANES {
                payload[lane] >>= width;
            }
        }

        out += LANES;
        selector >>= width;
    }
}
