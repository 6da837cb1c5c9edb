
use std::fmt::Write;

use tracing::debug;

use crate::error::{RaidError, Result};
use crate::layout::block::MAX_BLOCK_SIZE;
use crate::layout::stripe::raid5::RAID5;
use crate::retention::disk::Disk;

/// Caller-supplied sizes for one encoding run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ArrayParams {
    /// Block size in bytes.
    pub block_size: usize,
    /// Length of the decoded input stream in bytes.
    pub input_len: usize,
    /// Length of every disk in bytes.
    pub disk_len: usize,
    /// Number of disks in the array.
    pub disks: usize,
}

impl ArrayParams {
    /// `validate` checks the sizes against each other and returns the matching layout.
    ///
    /// # Errors
    /// Returns [`RaidError::InvalidParameters`] describing the first violated constraint.
    pub fn validate(&self) -> Result<RAID5> {
        let Self {
            block_size,
            input_len,
            disk_len,
            disks,
        } = *self;

        if !(1..=MAX_BLOCK_SIZE).contains(&block_size) {
            return Err(RaidError::invalid(format!(
                "block size {block_size} must be within 1..={MAX_BLOCK_SIZE}"
            )));
        }
        if input_len == 0 || !input_len.is_multiple_of(block_size) {
            return Err(RaidError::invalid(format!(
                "input length {input_len} must be a positive multiple of block size {block_size}"
            )));
        }
        if disk_len == 0 || !disk_len.is_multiple_of(block_size) {
            return Err(RaidError::invalid(format!(
                "disk size {disk_len} must be a positive multiple of block size {block_size}"
            )));
        }
        if disks < RAID5::MIN_DISKS {
            return Err(RaidError::invalid(format!(
                "at least {} disks are required, got {disks}",
                RAID5::MIN_DISKS
            )));
        }
        if let Some(capacity) = disk_len.checked_mul(disks - 1)
            && capacity < input_len
        {
            return Err(RaidError::invalid(format!(
                "{disks} disks of {disk_len} bytes hold {capacity} data bytes, input needs {input_len}"
            )));
        }

        let layout = RAID5::new(block_size, disks);
        let required = layout.required_disk_len(self.data_blocks());
        if required > disk_len {
            return Err(RaidError::invalid(format!(
                "rotating parity needs {required} bytes per disk, disk size is {disk_len}"
            )));
        }
        Ok(layout)
    }

    #[must_use]
    pub const fn data_blocks(&self) -> usize {
        if self.block_size == 0 {
            0
        } else {
            self.input_len / self.block_size
        }
    }
}

/// The disks of one run, indexed by disk number.
pub struct Array(Vec<Disk>);

impl Array {
    /// `init_array` validates `params` and allocates every disk, zero-filled.
    ///
    /// # Errors
    /// Returns [`RaidError::InvalidParameters`] before any allocation when validation
    /// fails, or [`RaidError::AllocationFailure`] if a disk cannot be reserved.
    pub fn init_array(params: &ArrayParams) -> Result<Self> {
        params.validate()?;
        Self::allocate(params.disks, params.disk_len)
    }

    pub(crate) fn allocate(disks: usize, disk_len: usize) -> Result<Self> {
        let mut out = Vec::new();
        out.try_reserve_exact(disks)
            .map_err(|_| RaidError::AllocationFailure {
                bytes: disks.saturating_mul(size_of::<Disk>()),
            })?;
        for _ in 0..disks {
            out.push(Disk::zeroed(disk_len)?);
        }
        debug!(disks, disk_len, "allocated disk array");
        Ok(Self(out))
    }

    #[must_use]
    pub fn disk_count(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn disk_len(&self) -> usize {
        self.0.first().map_or(0, Disk::len)
    }

    /// # Panics
    /// Panics if `i` is not a disk index.
    #[must_use]
    pub fn disk(&self, i: usize) -> &Disk {
        &self.0[i]
    }

    pub(crate) fn disk_mut(&mut self, i: usize) -> &mut Disk {
        &mut self.0[i]
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Disk> {
        self.0.iter()
    }

    /// One line per disk with its length and the number of non-zero bytes.
    #[must_use]
    pub fn status_string(&self) -> String {
        let mut out = String::new();
        for (i, d) in self.0.iter().enumerate() {
            let used = d.as_bytes().iter().filter(|&&b| b != 0).count();
            let _ = writeln!(out, "disk {i}: len={} nonzero={used}", d.len());
        }
        out
    }
}
