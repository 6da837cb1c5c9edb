
use tracing::{debug, info};

use crate::codec;
use crate::error::{RaidError, Result};
use crate::layout::block::{xor_blocks, zeroed};
use crate::layout::stripe::raid5::RAID5;
use crate::retention::array::{Array, ArrayParams};

/// Counters reported after a stream has been striped.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EncodeSummary {
    pub data_blocks: usize,
    pub stripes: usize,
    /// Whether the final stripe held fewer than `disks - 1` data blocks.
    pub partial_stripe: bool,
}

/// An [`Array`] addressed through a [`RAID5`] layout.
pub struct Volume {
    array: Array,
    layout: RAID5,
}

impl Volume {
    /// # Panics
    /// Panics if the array does not have one disk per layout member.
    #[must_use]
    pub fn new(array: Array, layout: RAID5) -> Self {
        assert_eq!(
            array.disk_count(),
            layout.disks(),
            "RAID5 layout expects {} disks.",
            layout.disks()
        );
        Self { array, layout }
    }

    #[must_use]
    pub const fn layout(&self) -> &RAID5 {
        &self.layout
    }

    #[must_use]
    pub const fn array(&self) -> &Array {
        &self.array
    }

    #[must_use]
    pub fn into_array(self) -> Array {
        self.array
    }

    /// Stripes `payload` across the array in one forward pass, closing each stripe's
    /// parity as its last data block lands.
    ///
    /// # Errors
    /// Returns [`RaidError::InvalidParameters`] if `payload` is not a whole number of
    /// blocks, and [`RaidError::CapacityExceeded`] if a block falls past the end of the
    /// disks. Blocks before the failing one stay written.
    pub fn write_stream(&mut self, payload: &[u8]) -> Result<EncodeSummary> {
        let block_size = self.layout.block_size();
        if !payload.len().is_multiple_of(block_size) {
            return Err(RaidError::invalid(format!(
                "payload of {} bytes is not a multiple of block size {block_size}",
                payload.len()
            )));
        }

        let blocks = payload.len() / block_size;
        let per_stripe = self.layout.data_per_stripe();
        let disk_len = self.array.disk_len();
        let mut parity = zeroed(block_size)?;
        let mut summary = EncodeSummary::default();

        for (index, block) in payload.chunks_exact(block_size).enumerate() {
            let loc = self.layout.locate(index);
            if loc.byte_offset.saturating_add(block_size) > disk_len {
                return Err(RaidError::CapacityExceeded {
                    block: index,
                    offset: loc.byte_offset,
                    disk_len,
                });
            }

            let written = self
                .array
                .disk_mut(loc.data_disk)
                .write_at(loc.byte_offset, block);
            debug_assert_eq!(written, block_size);
            summary.data_blocks += 1;

            if loc.offset_in_stripe == per_stripe - 1 || index == blocks - 1 {
                let members = self.close_stripe(loc.stripe, blocks, &mut parity);
                summary.stripes += 1;
                summary.partial_stripe = members < per_stripe;
            }
        }

        Ok(summary)
    }

    /// Recomputes every stripe holding part of the first `blocks` data blocks and
    /// returns the indices whose stored parity disagrees.
    ///
    /// Stripes past the end of the disks are not inspected.
    ///
    /// # Errors
    /// Returns [`RaidError::AllocationFailure`] if the scratch block cannot be reserved.
    pub fn scrub(&self, blocks: usize) -> Result<Vec<usize>> {
        let block_size = self.layout.block_size();
        let stripes = self
            .layout
            .stripes_for(blocks)
            .min(self.array.disk_len() / block_size);
        let mut expected = zeroed(block_size)?;

        let mut mismatched = Vec::new();
        for stripe in 0..stripes {
            let members = self.layout.members(stripe, blocks);
            self.stripe_parity(stripe, members, &mut expected);
            let off = self.layout.stripe_byte_offset(stripe);
            let stored = self
                .array
                .disk(self.layout.parity_disk(stripe))
                .block(off, block_size);
            if stored != expected.as_slice() {
                mismatched.push(stripe);
            }
        }
        Ok(mismatched)
    }

    fn close_stripe(&mut self, stripe: usize, blocks: usize, scratch: &mut [u8]) -> usize {
        let members = self.layout.members(stripe, blocks);
        self.stripe_parity(stripe, members, scratch);

        let parity_disk = self.layout.parity_disk(stripe);
        let off = self.layout.stripe_byte_offset(stripe);
        self.array
            .disk_mut(parity_disk)
            .block_mut(off, scratch.len())
            .copy_from_slice(scratch);

        debug!(stripe, parity_disk, members, "closed stripe");
        members
    }

    fn stripe_parity(&self, stripe: usize, members: usize, out: &mut [u8]) {
        let off = self.layout.stripe_byte_offset(stripe);
        let len = out.len();
        xor_blocks(
            out,
            (0..members).map(|slot| {
                self.array
                    .disk(self.layout.data_disk(stripe, slot))
                    .block(off, len)
            }),
        );
    }
}

/// `encode_hex` runs the whole pipeline: validate, decode, allocate, stripe.
///
/// Nothing is allocated for the disks until the parameters and the input text have
/// both been accepted.
///
/// # Errors
/// Returns the first validation, decoding, allocation or capacity error encountered.
pub fn encode_hex(params: &ArrayParams, text: &[u8]) -> Result<(Array, EncodeSummary)> {
    let layout = params.validate()?;
    let payload = codec::decode(text, params.input_len)?;
    let array = Array::allocate(params.disks, params.disk_len)?;

    let mut volume = Volume::new(array, layout);
    let summary = volume.write_stream(&payload)?;
    info!(
        data_blocks = summary.data_blocks,
        stripes = summary.stripes,
        partial_stripe = summary.partial_stripe,
        "striped input across {} disks",
        layout.disks()
    );
    Ok((volume.into_array(), summary))
}
