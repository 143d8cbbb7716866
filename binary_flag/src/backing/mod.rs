//! Packed representations behind [`MultipleBinaryFlag`](crate::MultipleBinaryFlag).
//!
//! The representation is picked once from the flag count:
//!
//! | length      | tier                 | storage            |
//! |-------------|----------------------|--------------------|
//! | 2..=32      | [`Tier::SmallWord`]  | one `u32`          |
//! | 33..=64     | [`Tier::WideWord`]   | one `u64`          |
//! | 65..        | [`Tier::WordArray`]  | `ceil(len/64)` `u64` |

pub mod array;
pub mod single;

pub use array::WordArray;
pub use single::SingleWord;

use core::fmt;

use crate::error::FlagError;

type Result<T> = core::result::Result<T, FlagError>;

/// Common capability set of every backing representation.
///
/// Positions passed in are already bounds-checked against [`len`](Self::len).
pub trait BitStore {
    fn len(&self) -> u64;
    fn get(&self, position: u64) -> bool;
    fn write(&mut self, position: u64, value: bool);
    /// True iff every one of the `len()` bits is set.
    fn all(&self) -> bool;
    /// Raw bytes of the backing words, padding included.
    fn as_bytes(&self) -> &[u8];

    fn render_into<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for position in 0..self.len() {
            out.write_char(if self.get(position) { 'T' } else { 'F' })?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    SmallWord,
    WideWord,
    WordArray,
}

impl Tier {
    /// Selection table for a length already validated by the caller.
    pub const fn for_length(length: u64) -> Self {
        if length <= u32::BITS as u64 {
            Tier::SmallWord
        } else if length <= u64::BITS as u64 {
            Tier::WideWord
        } else {
            Tier::WordArray
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Tier::SmallWord => "small-word",
            Tier::WideWord => "wide-word",
            Tier::WordArray => "word-array",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backing {
    Small(SingleWord<u32>),
    Wide(SingleWord<u64>),
    Array(WordArray),
}

impl Backing {
    pub fn new(length: u64, initial_value: bool) -> Result<Self> {
        Ok(match Tier::for_length(length) {
            Tier::SmallWord => Backing::Small(SingleWord::new(length, initial_value)),
            Tier::WideWord => Backing::Wide(SingleWord::new(length, initial_value)),
            Tier::WordArray => Backing::Array(WordArray::new(length, initial_value)?),
        })
    }

    pub fn tier(&self) -> Tier {
        match self {
            Backing::Small(_) => Tier::SmallWord,
            Backing::Wide(_) => Tier::WideWord,
            Backing::Array(_) => Tier::WordArray,
        }
    }
}

impl BitStore for Backing {
    fn len(&self) -> u64 {
        match self {
            Backing::Small(s) => s.len(),
            Backing::Wide(w) => w.len(),
            Backing::Array(a) => a.len(),
        }
    }

    fn get(&self, position: u64) -> bool {
        match self {
            Backing::Small(s) => s.get(position),
            Backing::Wide(w) => w.get(position),
            Backing::Array(a) => a.get(position),
        }
    }

    fn write(&mut self, position: u64, value: bool) {
        match self {
            Backing::Small(s) => s.write(position, value),
            Backing::Wide(w) => w.write(position, value),
            Backing::Array(a) => a.write(position, value),
        }
    }

    fn all(&self) -> bool {
        match self {
            Backing::Small(s) => s.all(),
            Backing::Wide(w) => w.all(),
            Backing::Array(a) => a.all(),
        }
    }

    fn as_bytes(&self) -> &[u8] {
        match self {
            Backing::Small(s) => s.as_bytes(),
            Backing::Wide(w) => w.as_bytes(),
            Backing::Array(a) => a.as_bytes(),
        }
    }
}
