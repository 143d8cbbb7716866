//! One-word storage: bit `i` of the flags is bit `i` of the word.

use crate::backing::BitStore;
use crate::word::Word;

/// Flags packed into a single `W`. Bits at or above `len` stay zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleWord<W: Word> {
    word: W,
    len: u32,
}

impl<W: Word> SingleWord<W> {
    /// `length` must be in `2..=W::BITS`.
    pub fn new(length: u64, initial_value: bool) -> Self {
        debug_assert!(length <= u64::from(W::BITS));
        let len = length as u32;
        let word = if initial_value {
            W::low_mask(len)
        } else {
            W::zeroed()
        };
        Self { word, len }
    }

    #[inline]
    fn mask(&self) -> W {
        W::low_mask(self.len)
    }
}

impl<W: Word> BitStore for SingleWord<W> {
    #[inline]
    fn len(&self) -> u64 {
        u64::from(self.len)
    }

    #[inline]
    fn get(&self, position: u64) -> bool {
        self.word.bit(position as u32)
    }

    #[inline]
    fn write(&mut self, position: u64, value: bool) {
        let i = position as u32;
        self.word = if value {
            self.word.with_bit(i)
        } else {
            self.word.without_bit(i)
        };
    }

    #[inline]
    fn all(&self) -> bool {
        self.word == self.mask()
    }

    fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_word_initial_values() {
        let zeros = SingleWord::<u32>::new(32, false);
        let ones = SingleWord::<u32>::new(32, true);
        assert!(!zeros.all());
        assert!(ones.all());
        assert!((0..32).all(|i| ones.get(i)));
    }

    #[test]
    fn padding_is_not_observable() {
        let mut w = SingleWord::<u64>::new(33, true);
        assert_eq!(bytemuck::pod_read_unaligned::<u64>(w.as_bytes()), (1u64 << 33) - 1);
        w.write(32, false);
        assert!(!w.all());
        w.write(32, true);
        assert!(w.all());
    }

    #[test]
    fn write_is_idempotent() {
        let mut w = SingleWord::<u32>::new(2, false);
        w.write(1, true);
        w.write(1, true);
        assert!(w.get(1));
        assert!(!w.get(0));
        w.write(0, false);
        assert!(!w.get(0));
        w.write(0, true);
        assert!(w.all());
    }
}
