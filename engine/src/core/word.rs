//! 32-bit word arithmetic
//!
//! Every generator in this crate works on unsigned 32-bit words. Intermediate
//! products are formed in a wider type and folded back with [`truncate32`],
//! which emulates fixed-width unsigned overflow.

/// Mask selecting the low 32 bits of a wider integer.
pub const WORD_MASK: i128 = 0xFFFF_FFFF;

/// Return the low 32 bits of `value`, read as unsigned (`value mod 2^32`).
///
/// Negative inputs follow two's complement, so the result is always the
/// non-negative residue modulo 2^32.
///
/// # Example
/// ```
/// use pseudo_random_core_rs::truncate32;
///
/// assert_eq!(truncate32(0x1_0000_0005u64), 5);
/// assert_eq!(truncate32(-1i64), u32::MAX);
/// ```
pub fn truncate32<T: Into<i128>>(value: T) -> u32 {
    (value.into() & WORD_MASK) as u32
}
