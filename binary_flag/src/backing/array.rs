//! Multi-word storage for lengths above 64.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::backing::BitStore;
use crate::error::FlagError;
use crate::word::{ARRAY_WORD_BITS, Word, split};

/// Flag `i` lives in `words[i / 64]` at offset `i % 64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordArray {
    words: Vec<u64>,
    len: u64,
}

impl WordArray {
    pub fn new(length: u64, initial_value: bool) -> Result<Self, FlagError> {
        let count = usize::try_from(length.div_ceil(ARRAY_WORD_BITS))
            .map_err(|_| FlagError::LengthOutOfRange(length))?;
        let mut words = Vec::new();
        words
            .try_reserve_exact(count)
            .map_err(|_| FlagError::LengthOutOfRange(length))?;
        words.resize(count, if initial_value { u64::MAX } else { 0 });

        let mut array = Self { words, len: length };
        if initial_value {
            array.clear_padding();
        }
        Ok(array)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Bits used in the last word, in `1..=64`.
    fn tail_bits(&self) -> u32 {
        match (self.len % ARRAY_WORD_BITS) as u32 {
            0 => u64::BITS,
            n => n,
        }
    }

    fn clear_padding(&mut self) {
        let mask = u64::low_mask(self.tail_bits());
        if let Some(last) = self.words.last_mut() {
            *last &= mask;
        }
    }
}

impl BitStore for WordArray {
    #[inline]
    fn len(&self) -> u64 {
        self.len
    }

    #[inline]
    fn get(&self, position: u64) -> bool {
        let (word, offset) = split(position);
        self.words[word as usize].bit(offset)
    }

    #[inline]
    fn write(&mut self, position: u64, value: bool) {
        let (word, offset) = split(position);
        let slot = &mut self.words[word as usize];
        *slot = if value {
            slot.with_bit(offset)
        } else {
            slot.without_bit(offset)
        };
    }

    fn all(&self) -> bool {
        match self.words.split_last() {
            Some((last, full)) => {
                full.iter().all(|&w| w == u64::MAX) && *last == u64::low_mask(self.tail_bits())
            }
            None => false,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.words)
    }
}
