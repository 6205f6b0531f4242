//! Selector construction and parsing.
//!
//! A selector is the first word of every block. It records, low bit first,
//! the bit width of every slice packed into the block: a width-`w` slice
//! contributes a `w`-bit field whose top bit is 1 and remaining `w-1` bits
//! are 0. The fields always tile the word exactly — the encoder pads the
//! final slice's stated width with any unused bits.

use crate::bits::lowest_set_bit;

/// Build one selector word from a zero-terminated width sequence.
///
/// Widths are consumed last-to-first so the first slice's field ends up in
/// the lowest bits. The used widths must sum to exactly 32; the 64-bit
/// accumulator makes the final (possibly width-32) shift well defined.
pub(crate) fn compute_selector(encodings: &[u8; 33]) -> u32 {
    let used = encodings.iter().position(|&w| w == 0).unwrap_or(32);

    let mut value: u64 = 0;
    for &width in encodings[..used].iter().rev() {
        value <<= width;
        value |= 1 << (width - 1);
    }
    value as u32
}

/// Iterator over the bit widths stored in one selector word, in slice order.
#[derive(Debug, Clone)]
pub struct SelectorWidths {
    selector: u64,
}

impl SelectorWidths {
    /// Walk the width fields of `selector`, first slice first.
    pub fn new(selector: u32) -> Self {
        SelectorWidths {
            selector: u64::from(selector),
        }
    }
}

impl Iterator for SelectorWidths {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.selector == 0 {
            return None;
        }
        let width = lowest_set_bit(self.selector);
        self.selector >>= width;
        Some(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector_of(widths: &[u8]) -> u32 {
        let mut encodings = [0u8; 33];
        encodings[..widths.len()].copy_from_slice(widths);
        compute_selector(&encodings)
    }

    fn round_trip(widths: &[u8]) {
        assert_eq!(
            widths.iter().map(|&w| u32::from(w)).sum::<u32>(),
            32,
            "test widths must tile the selector"
        );
        let decoded: Vec<u32> = SelectorWidths::new(selector_of(widths)).collect();
        let expected: Vec<u32> = widths.iter().map(|&w| u32::from(w)).collect();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_single_full_width_field() {
        assert_eq!(selector_of(&[32]), 1 << 31);
        round_trip(&[32]);
    }

    #[test]
    fn test_all_one_bit_fields() {
        assert_eq!(selector_of(&[1; 32]), u32::MAX);
        round_trip(&[1; 32]);
    }

    #[test]
    fn test_mixed_fields_keep_order() {
        round_trip(&[2, 30]);
        round_trip(&[30, 2]);
        round_trip(&[4, 4, 4, 4, 16]);
        round_trip(&[7, 6, 5, 4, 3, 2, 1, 4]);
    }

    #[test]
    fn test_first_slice_sits_in_low_bits() {
        // Width 3 then width 29: low field is 0b100.
        let selector = selector_of(&[3, 29]);
        assert_eq!(selector & 0b111, 0b100);
    }

    #[test]
    fn test_stale_entries_after_terminator_ignored() {
        let mut encodings = [0u8; 33];
        encodings[0] = 32;
        // Leftovers from a previous block beyond the terminator.
        encodings[2] = 9;
        encodings[3] = 9;
        assert_eq!(compute_selector(&encodings), 1 << 31);
    }
}
