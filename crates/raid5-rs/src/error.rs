//! Error types for parameter validation, stream decoding and disk allocation.

use std::io;

/// Result type alias using [`RaidError`].
pub type Result<T> = std::result::Result<T, RaidError>;

/// Errors raised while validating, decoding or encoding a RAID5 run.
#[derive(Debug, thiserror::Error)]
pub enum RaidError {
    /// Block size, stream length, disk size or disk count are inconsistent.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The input text does not hold the expected number of hex digits.
    #[error("malformed input at byte {index}: {reason}")]
    MalformedInput { index: usize, reason: String },

    /// The writer receiving an encoded disk image failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A buffer could not be reserved.
    #[error("failed to allocate {bytes} bytes")]
    AllocationFailure { bytes: usize },

    /// A block would land past the end of its disk.
    #[error("block {block} at offset {offset} does not fit a disk of {disk_len} bytes")]
    CapacityExceeded {
        block: usize,
        offset: usize,
        disk_len: usize,
    },
}

impl RaidError {
    pub(crate) fn invalid(msg: impl ToString) -> Self {
        Self::InvalidParameters(msg.to_string())
    }

    pub(crate) fn malformed(index: usize, reason: impl ToString) -> Self {
        Self::MalformedInput {
            index,
            reason: reason.to_string(),
        }
    }
}
