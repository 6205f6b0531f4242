//! Lane-parallel decode implementations.
//!
//! The scalar 16-lane loop in [`generic`] is the reference on every target;
//! [`x86_64`] carries an AVX2 version selected by runtime CPU detection.
//! Both produce bit-identical output, so the vector path is purely a
//! performance optimization.

pub(crate) mod generic;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub(crate) mod x86_64;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
use std::sync::OnceLock;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
static HAS_AVX2: OnceLock<bool> = OnceLock::new();

/// Check if AVX2 is available (cached after first call)
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub(crate) fn has_avx2() -> bool {
    *HAS_AVX2.get_or_init(|| is_x86_feature_detected!("avx2"))
}
