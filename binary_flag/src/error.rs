#[cfg(feature = "std")]
use thiserror::Error;

use crate::{MAX_ALLOWED_SIZE, MIN_LENGTH};

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagError {
    #[cfg_attr(
        feature = "std",
        error("Length must be in the range {min}..={max}, got {0}", min = MIN_LENGTH, max = MAX_ALLOWED_SIZE)
    )]
    LengthOutOfRange(u64),

    #[cfg_attr(
        feature = "std",
        error("Position {position} is out of range for length {length}")
    )]
    PositionOutOfRange { position: u64, length: u64 },

    #[cfg_attr(feature = "std", error("flag container has been disposed"))]
    Disposed,
}

impl FlagError {
    /// True for both the construction and the position range errors.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            FlagError::LengthOutOfRange(_) | FlagError::PositionOutOfRange { .. }
        )
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for FlagError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FlagError::LengthOutOfRange(n) => {
                write!(
                    f,
                    "Length must be in the range {}..={}, got {}",
                    MIN_LENGTH, MAX_ALLOWED_SIZE, n
                )
            }
            FlagError::PositionOutOfRange { position, length } => {
                write!(f, "Position {} is out of range for length {}", position, length)
            }
            FlagError::Disposed => write!(f, "flag container has been disposed"),
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::error::Error for FlagError {}
