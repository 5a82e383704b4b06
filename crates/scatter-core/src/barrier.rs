//! Optimisation barrier for benchmark results.
//!
//! A scan whose result is never used can be deleted outright by the
//! optimiser, leaving nothing to time. [`observe`] hands the value to an
//! opaque sink the compiler must assume reads it, so the loop that
//! produced it survives. The sink is `std::hint::black_box`, which costs
//! a register spill at most and is negligible next to a full scan.

/// Mark `value` as observed and return it unchanged.
///
/// ```
/// use scatter_core::observe;
///
/// let sum: f32 = (0..1000).map(|i| i as f32).sum();
/// assert_eq!(observe(sum), sum);
/// ```
#[inline(always)]
pub fn observe<T>(value: T) -> T {
    std::hint::black_box(value)
}
