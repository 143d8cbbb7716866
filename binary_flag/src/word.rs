//! Single-bit arithmetic on the physical word types.

use bytemuck::{Pod, Zeroable};
use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, Not, Shl};

/// Bits per word in a [`WordArray`](crate::backing::WordArray).
pub const ARRAY_WORD_BITS: u64 = u64::BITS as u64;

pub trait Word:
    Pod
    + Debug
    + Eq
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Shl<u32, Output = Self>
{
    const BITS: u32;
    const ONE: Self;

    /// Word with the `n` low bits set. `n` may equal `BITS`.
    fn low_mask(n: u32) -> Self;

    #[inline]
    fn bit(self, i: u32) -> bool {
        self & (Self::ONE << i) != <Self as Zeroable>::zeroed()
    }

    #[inline]
    fn with_bit(self, i: u32) -> Self {
        self | (Self::ONE << i)
    }

    #[inline]
    fn without_bit(self, i: u32) -> Self {
        self & !(Self::ONE << i)
    }
}

impl Word for u32 {
    const BITS: u32 = u32::BITS;
    const ONE: Self = 1;

    #[inline]
    fn low_mask(n: u32) -> Self {
        debug_assert!(n <= Self::BITS);
        if n >= Self::BITS { u32::MAX } else { (1 << n) - 1 }
    }
}

impl Word for u64 {
    const BITS: u32 = u64::BITS;
    const ONE: Self = 1;

    #[inline]
    fn low_mask(n: u32) -> Self {
        debug_assert!(n <= Self::BITS);
        if n >= Self::BITS { u64::MAX } else { (1 << n) - 1 }
    }
}

/// Splits a flag position into (word index, offset within the word).
#[inline(always)]
pub const fn split(position: u64) -> (u64, u32) {
    (position / ARRAY_WORD_BITS, (position % ARRAY_WORD_BITS) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_masks() {
        assert_eq!(u32::low_mask(0), 0);
        assert_eq!(u32::low_mask(2), 0b11);
        assert_eq!(u32::low_mask(32), u32::MAX);
        assert_eq!(u64::low_mask(33), (1u64 << 33) - 1);
        assert_eq!(u64::low_mask(64), u64::MAX);
    }

    #[test]
    fn single_bits() {
        let w = 0u64.with_bit(0).with_bit(63);
        assert!(w.bit(0));
        assert!(w.bit(63));
        assert!(!w.bit(1));
        assert_eq!(w.without_bit(63), 1);
    }

    #[test]
    fn split_positions() {
        assert_eq!(split(0), (0, 0));
        assert_eq!(split(63), (0, 63));
        assert_eq!(split(64), (1, 0));
        assert_eq!(split(4095), (63, 63));
    }
}
