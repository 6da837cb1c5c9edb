//! RAID5 layout: N-1 data blocks per stripe plus one right-rotating parity block.


/// Location of a single data block inside the array.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Location {
    /// Stripe holding the block.
    pub stripe: usize,
    /// Data slot within the stripe, `0..disks - 1`.
    pub offset_in_stripe: usize,
    /// Disk carrying the stripe's parity block.
    pub parity_disk: usize,
    /// Disk the block itself is written to.
    pub data_disk: usize,
    /// Byte offset of the stripe on every disk.
    pub byte_offset: usize,
}

/// RAID5 geometry for a fixed block size and disk count.
///
/// Parity for stripe `s` lives on disk `N - 1 - (s mod N)`, so it walks backwards by one
/// disk per stripe. Data slots follow the parity disk and wrap around the array.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RAID5 {
    block_size: usize,
    disks: usize,
}

impl RAID5 {
    /// Two data disks and one parity disk.
    pub const MIN_DISKS: usize = 3;

    /// `new` builds the geometry for `disks` disks of `block_size`-byte blocks.
    ///
    /// # Panics
    /// Panics if `block_size` is zero or fewer than [`Self::MIN_DISKS`] disks are given.
    #[must_use]
    pub fn new(block_size: usize, disks: usize) -> Self {
        assert!(block_size > 0, "RAID5 block size must be non-zero.");
        assert!(
            disks >= Self::MIN_DISKS,
            "RAID5 needs at least {} disks, got {}.",
            Self::MIN_DISKS,
            disks
        );
        Self { block_size, disks }
    }

    #[must_use]
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    #[must_use]
    pub const fn disks(&self) -> usize {
        self.disks
    }

    /// Data blocks carried by one stripe.
    #[must_use]
    pub const fn data_per_stripe(&self) -> usize {
        self.disks - 1
    }

    #[must_use]
    pub const fn parity_disk(&self, stripe: usize) -> usize {
        let n = self.disks;
        (n - 1 - stripe % n + n) % n
    }

    /// `data_disk` returns the disk holding data slot `slot` of `stripe`.
    ///
    /// # Panics
    /// Panics if `slot` is not a data slot.
    #[must_use]
    pub fn data_disk(&self, stripe: usize, slot: usize) -> usize {
        assert!(
            slot < self.data_per_stripe(),
            "RAID5 stripe has {} data slots, {} is not valid.",
            self.data_per_stripe(),
            slot
        );
        (self.parity_disk(stripe) + 1 + slot) % self.disks
    }

    /// First global block index of `stripe`.
    #[must_use]
    pub fn stripe_start(&self, stripe: usize) -> usize {
        stripe
            .checked_mul(self.data_per_stripe())
            .expect("stripe start overflow")
    }

    /// Byte offset of `stripe` on every disk.
    #[must_use]
    pub fn stripe_byte_offset(&self, stripe: usize) -> usize {
        stripe
            .checked_mul(self.block_size)
            .expect("stripe offset overflow")
    }

    /// Stripes needed to hold `blocks` data blocks.
    #[must_use]
    pub const fn stripes_for(&self, blocks: usize) -> usize {
        blocks.div_ceil(self.data_per_stripe())
    }

    /// Bytes every disk must provide to hold `blocks` data blocks and their parity.
    #[must_use]
    pub fn required_disk_len(&self, blocks: usize) -> usize {
        self.stripe_byte_offset(self.stripes_for(blocks))
    }

    /// `locate` maps a global data-block index onto its stripe, disk and offset.
    #[must_use]
    pub fn locate(&self, block_index: usize) -> Location {
        let per_stripe = self.data_per_stripe();
        let stripe = block_index / per_stripe;
        let offset_in_stripe = block_index % per_stripe;
        let parity_disk = self.parity_disk(stripe);
        Location {
            stripe,
            offset_in_stripe,
            parity_disk,
            data_disk: (parity_disk + 1 + offset_in_stripe) % self.disks,
            byte_offset: self.stripe_byte_offset(stripe),
        }
    }

    /// Number of data slots of `stripe` that hold real blocks out of `blocks` in total.
    #[must_use]
    pub fn members(&self, stripe: usize, blocks: usize) -> usize {
        blocks
            .saturating_sub(self.stripe_start(stripe))
            .min(self.data_per_stripe())
    }
}
