//! AND-mask lookup table for lane-parallel bit extraction.
//!
//! One row per bit width 0..=32. Each row holds the same mask replicated
//! across all 16 lanes so a single 256-bit load covers half a lane group.
//! Row 0 is never used for real data: a selector of 0 means "no more
//! blocks", so no field can be 0 bits wide.

/// AND masks indexed by bit width, replicated across 16 lanes.
pub(crate) const MASK_SET: [[u32; 16]; 33] = build_mask_set();

const fn build_mask_set() -> [[u32; 16]; 33] {
    let mut table = [[0u32; 16]; 33];
    let mut width = 1;
    while width <= 32 {
        let mask = if width == 32 {
            u32::MAX
        } else {
            (1u32 << width) - 1
        };
        let mut lane = 0;
        while lane < 16 {
            table[width][lane] = mask;
            lane += 1;
        }
        width += 1;
    }
    table
}
