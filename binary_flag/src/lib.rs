//! # binary_flag
//!
//! A `no_std` compatible container of boolean flags that packs them into the
//! narrowest word representation for their count.
//!
//! ```rust
//! use binary_flag::{MultipleBinaryFlag, Tier};
//!
//! let mut flags = MultipleBinaryFlag::new(65, false).expect("valid length");
//! assert_eq!(flags.tier(), Some(Tier::WordArray));
//!
//! for i in 0..65 {
//!     flags.set_flag(i).unwrap();
//! }
//! assert!(flags.get_flag().unwrap());
//! ```
//!
//! ## Tiers
//!
//! | length  | storage          |
//! |---------|------------------|
//! | 2..=32  | one `u32`        |
//! | 33..=64 | one `u64`        |
//! | 65..    | `u64` array      |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::FlagError;

pub mod word;

pub mod backing;
pub use backing::{BitStore, Tier};

pub mod flag;
pub use flag::{DISPOSED_MARKER, MAX_ALLOWED_SIZE, MIN_LENGTH, MultipleBinaryFlag};
