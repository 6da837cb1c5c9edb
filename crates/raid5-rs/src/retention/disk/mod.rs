
use crate::error::Result;
use crate::layout::block::zeroed;

/// A fixed-size, zero-initialized disk image held in memory.
pub struct Disk {
    data: Vec<u8>,
}

impl Disk {
    /// # Errors
    /// Returns [`crate::RaidError::AllocationFailure`] if the image cannot be reserved.
    pub fn zeroed(len: usize) -> Result<Self> {
        Ok(Self { data: zeroed(len)? })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Block of `len` bytes starting at `off`.
    ///
    /// # Panics
    /// Panics if the range runs past the end of the disk.
    #[must_use]
    pub fn block(&self, off: usize, len: usize) -> &[u8] {
        &self.data[off..off + len]
    }

    /// # Panics
    /// Panics if the range runs past the end of the disk.
    pub fn block_mut(&mut self, off: usize, len: usize) -> &mut [u8] {
        &mut self.data[off..off + len]
    }

    /// Copies as much of `data` as fits at `off` and returns the number of bytes written.
    pub fn write_at(&mut self, off: usize, data: &[u8]) -> usize {
        if off >= self.data.len() {
            return 0;
        }
        let end = off.saturating_add(data.len()).min(self.data.len());
        let dst = &mut self.data[off..end];
        let n = dst.len();
        dst.copy_from_slice(&data[..n]);
        n
    }
}
