//! Block-structured postings codec.
//!
//! The wire format is a sequence of 68-byte blocks: one little-endian u32
//! selector followed by sixteen little-endian u32 payload lanes. Every
//! slice packed into a block covers one group of 16 consecutive source
//! integers at an adaptively chosen bit width; the widths of a block's
//! slices always sum to at most 32, and the selector records them.
//!
//! A byte range does not describe how many integers it holds. Callers
//! record the count out of band (an index's segment header, for example)
//! and hand it back to [`decode`].

use crate::bits::bits_needed;
use crate::selector::compute_selector;
use crate::simd;

/// Number of integers packed side by side in one slice.
pub const LANES: usize = 16;

/// Bytes occupied by the selector word at the front of each block.
pub const SELECTOR_BYTES: usize = 4;

/// Size of one wire block: selector word plus 16 payload words.
pub const BLOCK_BYTES: usize = SELECTOR_BYTES + LANES * 4;

/// Bit budget shared by the slices of one block.
const BLOCK_BITS: u32 = 32;

/// Errors raised while packing integers into an output buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The output buffer cannot hold another whole block. Encoding has no
    /// partial-resume: grow the buffer and encode again from the start.
    OutputFull { needed: usize, capacity: usize },
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeError::OutputFull { needed, capacity } => write!(
                f,
                "output buffer full: need {} bytes for the next block, have {}",
                needed, capacity
            ),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Errors raised while unpacking a compressed byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The source is not a whole number of 68-byte blocks.
    TruncatedInput { length: usize },
    /// The destination cannot hold the next whole 16-integer lane group.
    OutputTooSmall { needed: usize, capacity: usize },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::TruncatedInput { length } => write!(
                f,
                "source length {} is not a multiple of the {}-byte block size",
                length, BLOCK_BYTES
            ),
            DecodeError::OutputTooSmall { needed, capacity } => write!(
                f,
                "destination too small: need {} integers, have room for {}",
                needed, capacity
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Destination slots required to decode `count` integers.
///
/// The decoder materializes whole lane groups, so the destination must be
/// sized to the next multiple of 16.
#[inline]
pub fn decoded_capacity(count: usize) -> usize {
    count.next_multiple_of(LANES)
}

/// Worst-case encoded size for `count` integers.
///
/// Every lane group degenerating to a full 32-bit slice costs one block per
/// group; an empty input still emits one block.
#[inline]
pub fn encoded_upper_bound(count: usize) -> usize {
    count.div_ceil(LANES).max(1) * BLOCK_BYTES
}

/// Pack `source` into `destination`, returning the bytes written.
///
/// Each block is filled slice by slice: the width of the next 16-integer
/// column is the bit width of the largest value in it (absent lanes past
/// the end of `source` count as 1, never 0), and the column is packed only
/// if that width still fits the block's 32-bit budget. The final slice's
/// stated width absorbs any unused bits so the selector fields tile the
/// word exactly.
pub fn encode(destination: &mut [u8], source: &[u32]) -> Result<usize, EncodeError> {
    let mut encodings = [0u8; 33];
    let mut source = source;
    let mut written = 0usize;

    loop {
        if written + BLOCK_BYTES > destination.len() {
            return Err(EncodeError::OutputFull {
                needed: written + BLOCK_BYTES,
                capacity: destination.len(),
            });
        }

        let mut payload = [0u32; LANES];
        let mut remaining = BLOCK_BITS;
        let mut cumulative_shift = 0u32;
        let mut slice = 0usize;

        while slice < 32 {
            // Width of this column: OR the lanes together rather than
            // tracking a running maximum, then take the bit width once.
            let mut column = 1u32;
            for lane in 0..LANES {
                column |= source.get(lane).copied().unwrap_or(1);
            }
            let max_width = bits_needed(column);

            if max_width > remaining {
                break; // no room in this block, retry as slice 0 of the next
            }

            encodings[slice] = max_width as u8;
            for lane in 0..LANES {
                payload[lane] |= source.get(lane).copied().unwrap_or(0) << cumulative_shift;
            }
            cumulative_shift += max_width;
            remaining -= max_width;

            if source.len() <= LANES {
                // Final slice of the final block: the spare bits pad this
                // slice's stated width so the selector still tiles 32 bits.
                encodings[slice] += remaining as u8;
                encodings[slice + 1] = 0;
                write_block(
                    &mut destination[written..],
                    compute_selector(&encodings),
                    &payload,
                );
                return Ok(written + BLOCK_BYTES);
            }
            source = &source[LANES..];
            slice += 1;
        }

        // The next column did not fit; its bits go unused in this block and
        // pad the last packed slice's width instead.
        encodings[slice - 1] += remaining as u8;
        encodings[slice] = 0;
        write_block(
            &mut destination[written..],
            compute_selector(&encodings),
            &payload,
        );
        written += BLOCK_BYTES;
    }
}

fn write_block(block: &mut [u8], selector: u32, payload: &[u32; LANES]) {
    block[..SELECTOR_BYTES].copy_from_slice(&selector.to_le_bytes());
    for (lane, value) in payload.iter().enumerate() {
        let at = SELECTOR_BYTES + lane * 4;
        block[at..at + 4].copy_from_slice(&value.to_le_bytes());
    }
}

/// Unpack `source` into `destination`, returning the integers materialized.
///
/// Exactly [`decoded_capacity`]`(count)` integers are written for a
/// well-formed stream — whole lane groups, the trailing ones containing
/// padding zeros past `count`. Decoding is driven to completion by
/// exhausting `source`; `count` only sizes the up-front capacity check.
/// The AVX2 path is used when the CPU supports it and the `simd` feature
/// is on; it is bit-identical to the scalar path.
pub fn decode(destination: &mut [u32], count: usize, source: &[u8]) -> Result<usize, DecodeError> {
    if !source.len().is_multiple_of(BLOCK_BYTES) {
        return Err(DecodeError::TruncatedInput {
            length: source.len(),
        });
    }
    let needed = decoded_capacity(count);
    if destination.len() < needed {
        return Err(DecodeError::OutputTooSmall {
            needed,
            capacity: destination.len(),
        });
    }

    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    if simd::has_avx2() {
        // SAFETY: AVX2 support was verified at runtime.
        return unsafe { simd::x86_64::decode_avx2(destination, source) };
    }

    simd::generic::decode_lanes(destination, source)
}
