//! Bit-width arithmetic shared by the encoder and decoder.

/// Smallest number of bits needed to represent `value`.
///
/// Zero still occupies one bit — a packed field can never be 0 bits wide,
/// so `bits_needed(0) == 1`.
#[inline]
pub fn bits_needed(value: u32) -> u32 {
    32 - (value | 1).leading_zeros()
}

/// 1-indexed position of the least-significant set bit of `mask`.
///
/// A mask with bit 0 set returns 1, matching a 1-bit selector field.
/// Callers must not pass 0; the decode loop refills the selector before
/// this is ever reached.
#[inline]
pub fn lowest_set_bit(mask: u64) -> u32 {
    debug_assert!(mask != 0, "lowest_set_bit is undefined for 0");
    mask.trailing_zeros() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_needed_small_values() {
        assert_eq!(bits_needed(0), 1);
        assert_eq!(bits_needed(1), 1);
        assert_eq!(bits_needed(2), 2);
        assert_eq!(bits_needed(3), 2);
        assert_eq!(bits_needed(4), 3);
    }

    #[test]
    fn test_bits_needed_power_boundaries() {
        for k in 1..=32u32 {
            let all_ones = if k == 32 { u32::MAX } else { (1 << k) - 1 };
            assert_eq!(bits_needed(all_ones), k);
        }
        for k in 1..=31u32 {
            assert_eq!(bits_needed(1 << k), k + 1);
        }
    }

    #[test]
    fn test_lowest_set_bit_is_one_indexed() {
        assert_eq!(lowest_set_bit(1), 1);
        assert_eq!(lowest_set_bit(0b1000), 4);
        assert_eq!(lowest_set_bit(1 << 31), 32);
        assert_eq!(lowest_set_bit(u64::MAX), 1);
    }
}
