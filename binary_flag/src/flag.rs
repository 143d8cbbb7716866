//! A fixed-length set of boolean flags with an "all set" query.
//!
//! # Examples
//!
//! ```rust
//! use binary_flag::MultipleBinaryFlag;
//!
//! let mut flags = MultipleBinaryFlag::new(4, true).expect("valid length");
//! assert!(flags.get_flag().unwrap());
//!
//! flags.reset_flag(2).unwrap();
//! assert!(!flags.get_flag().unwrap());
//! assert_eq!(flags.render().unwrap(), "TTFT");
//!
//! flags.dispose();
//! assert!(flags.set_flag(0).is_err());
//! ```

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

use tracing::{debug, trace};

use crate::backing::{Backing, BitStore, Tier};
use crate::error::FlagError;

type Result<T> = core::result::Result<T, FlagError>;

/// Smallest accepted flag count.
pub const MIN_LENGTH: u64 = 2;

/// Largest accepted flag count.
pub const MAX_ALLOWED_SIZE: u64 = 17_179_868_704;

/// `length` boolean flags packed into the narrowest fitting representation.
///
/// The representation ([`Tier`]) is chosen once from `length` and never
/// changes. After [`dispose`](Self::dispose) every operation other than
/// `dispose` itself fails with [`FlagError::Disposed`].
#[allow(clippy::len_without_is_empty)]
pub struct MultipleBinaryFlag {
    length: u64,
    backing: Option<Backing>,
}

impl MultipleBinaryFlag {
    /// Creates a container of `length` flags, each set to `initial_value`.
    ///
    /// # Errors
    ///
    /// [`FlagError::LengthOutOfRange`] unless `MIN_LENGTH <= length <= MAX_ALLOWED_SIZE`.
    ///
    /// ```
    /// use binary_flag::{FlagError, MultipleBinaryFlag};
    ///
    /// assert!(matches!(
    ///     MultipleBinaryFlag::new(1, false),
    ///     Err(FlagError::LengthOutOfRange(1))
    /// ));
    /// ```
    pub fn new(length: u64, initial_value: bool) -> Result<Self> {
        if !(MIN_LENGTH..=MAX_ALLOWED_SIZE).contains(&length) {
            return Err(FlagError::LengthOutOfRange(length));
        }
        let backing = Backing::new(length, initial_value)?;
        debug!(length, initial_value, tier = backing.tier().name(), "created flag container");
        Ok(Self {
            length,
            backing: Some(backing),
        })
    }

    /// Same as [`new`](Self::new) with every flag cleared.
    pub fn with_length(length: u64) -> Result<Self> {
        Self::new(length, false)
    }

    pub fn len(&self) -> u64 {
        self.length
    }

    pub fn is_disposed(&self) -> bool {
        self.backing.is_none()
    }

    /// Backing representation, or `None` once disposed.
    pub fn tier(&self) -> Option<Tier> {
        self.backing.as_ref().map(Backing::tier)
    }

    /// Bytes held by the backing words, or 0 once disposed.
    pub fn storage_bytes(&self) -> usize {
        self.backing.as_ref().map_or(0, |b| b.as_bytes().len())
    }

    /// True iff every flag is set.
    pub fn get_flag(&self) -> Result<bool> {
        Ok(self.backing()?.all())
    }

    pub fn get(&self, position: u64) -> Result<bool> {
        let backing = self.backing()?;
        check_position(position, self.length)?;
        Ok(backing.get(position))
    }

    pub fn set_flag(&mut self, position: u64) -> Result<()> {
        self.write(position, true)
    }

    pub fn reset_flag(&mut self, position: u64) -> Result<()> {
        self.write(position, false)
    }

    /// One `'T'` or `'F'` per flag, in position order.
    pub fn render(&self) -> Result<String> {
        let backing = self.backing()?;
        let mut out = String::new();
        // fmt::Write for String never fails.
        let _ = backing.render_into(&mut out);
        Ok(out)
    }

    /// Releases the backing storage. Calling it again is a no-op.
    pub fn dispose(&mut self) {
        if let Some(backing) = self.backing.take() {
            debug!(length = self.length, tier = backing.tier().name(), "disposed flag container");
        }
    }

    fn backing(&self) -> Result<&Backing> {
        self.backing.as_ref().ok_or(FlagError::Disposed)
    }

    fn write(&mut self, position: u64, value: bool) -> Result<()> {
        let length = self.length;
        let backing = self.backing.as_mut().ok_or(FlagError::Disposed)?;
        check_position(position, length)?;
        trace!(position, value, "write flag");
        backing.write(position, value);
        Ok(())
    }
}

#[inline]
fn check_position(position: u64, length: u64) -> Result<()> {
    if position < length {
        Ok(())
    } else {
        Err(FlagError::PositionOutOfRange { position, length })
    }
}

/// Marker written by `Display` for a disposed container.
pub const DISPOSED_MARKER: &str = "<disposed>";

/// Renders like [`MultipleBinaryFlag::render`]. A disposed container is
/// written as [`DISPOSED_MARKER`]; use `render()` to get [`FlagError::Disposed`].
impl fmt::Display for MultipleBinaryFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.backing {
            Some(backing) => backing.render_into(f),
            None => f.write_str(DISPOSED_MARKER),
        }
    }
}

impl fmt::Debug for MultipleBinaryFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultipleBinaryFlag")
            .field("length", &self.length)
            .field("tier", &self.tier())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_lengths_outside_range() {
        for length in [0, 1, MAX_ALLOWED_SIZE + 1, u64::MAX] {
            assert_eq!(
                MultipleBinaryFlag::new(length, true).unwrap_err(),
                FlagError::LengthOutOfRange(length)
            );
        }
    }

    #[test]
    fn default_initial_value_is_false() -> Result<()> {
        let flags = MultipleBinaryFlag::with_length(3)?;
        assert!(!flags.get_flag()?);
        assert_eq!(flags.render()?, "FFF");
        Ok(())
    }

    #[test]
    fn tier_follows_length() -> Result<()> {
        assert_eq!(MultipleBinaryFlag::new(32, false)?.tier(), Some(Tier::SmallWord));
        assert_eq!(MultipleBinaryFlag::new(33, false)?.tier(), Some(Tier::WideWord));
        assert_eq!(MultipleBinaryFlag::new(65, false)?.tier(), Some(Tier::WordArray));
        Ok(())
    }

    #[test]
    fn out_of_range_write_leaves_flags_untouched() -> Result<()> {
        let mut flags = MultipleBinaryFlag::new(8, true)?;
        let err = flags.reset_flag(8).unwrap_err();
        assert_eq!(
            err,
            FlagError::PositionOutOfRange {
                position: 8,
                length: 8
            }
        );
        assert!(flags.get_flag()?);
        assert!(flags.get(8).unwrap_err().is_out_of_range());
        Ok(())
    }

    #[test]
    fn disposed_reports_disposed_before_bounds() -> Result<()> {
        let mut flags = MultipleBinaryFlag::new(40, false)?;
        flags.dispose();
        flags.dispose();
        assert!(flags.is_disposed());
        assert_eq!(flags.tier(), None);
        assert_eq!(flags.storage_bytes(), 0);
        assert_eq!(flags.set_flag(1000), Err(FlagError::Disposed));
        assert_eq!(flags.reset_flag(0), Err(FlagError::Disposed));
        assert_eq!(flags.get(0), Err(FlagError::Disposed));
        assert_eq!(flags.get_flag(), Err(FlagError::Disposed));
        assert_eq!(flags.render(), Err(FlagError::Disposed));
        Ok(())
    }

    #[test]
    fn display_matches_render() -> Result<()> {
        let mut flags = MultipleBinaryFlag::new(70, false)?;
        flags.set_flag(0)?;
        flags.set_flag(69)?;
        assert_eq!(format!("{flags}"), flags.render()?);

        flags.dispose();
        assert_eq!(flags.to_string(), DISPOSED_MARKER);
        assert_eq!(format!("{flags}"), "<disposed>");
        assert_eq!(flags.render(), Err(FlagError::Disposed));
        Ok(())
    }

    #[test]
    fn debug_hides_bits() -> Result<()> {
        let flags = MultipleBinaryFlag::new(2, true)?;
        assert_eq!(
            format!("{flags:?}"),
            "MultipleBinaryFlag { length: 2, tier: Some(SmallWord), disposed: false }"
        );
        Ok(())
    }
}
