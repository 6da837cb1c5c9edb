//! RAID5 striping, rotating parity and the hex framing used for disk images.
#![allow(clippy::cargo_common_metadata)]

pub mod codec;
pub mod error;
pub mod layout;
pub mod retention;

pub use error::{RaidError, Result};
pub use retention::volume::{EncodeSummary, encode_hex};
