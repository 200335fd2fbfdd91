//! The region handle: FIFO block allocation over caller-owned storage.
//!
//! [`RegionQueue`] binds a caller-supplied byte slice to an allocation
//! cursor and a queue of live [`BlockRecord`]s. The lifecycle is:
//!
//! 1. [`RegionQueue::new`] — bind a handle over the caller's region
//! 2. [`RegionQueue::alloc`] — append a block after the current tail
//! 3. [`RegionQueue::peek`] — inspect the oldest live block
//! 4. [`RegionQueue::release`] — pop the oldest live block
//!
//! Allocation is a monotonic bump over the tail: a new block always starts
//! exactly at the previous tail's end, and space freed by `release` behind
//! still-live blocks is never reclaimed. Dropping the handle releases all
//! record metadata; the caller's region is only ever borrowed.

use crate::config::RegionConfig;
use crate::error::RegionError;
use crate::record::{BlockRecord, RecordQueue};
use crate::stats::RegionStats;

/// FIFO block allocator over a borrowed byte region.
///
/// Carves non-overlapping extents out of `region` and tracks them in
/// strict allocation order. Blocks must be released oldest-first; there is
/// no way to release an arbitrary block. The handle never owns the region:
/// the caller's storage must outlive the handle, which the borrow enforces.
///
/// Multiple independent handles over independent regions may coexist.
/// A handle is not safe for concurrent mutation; callers needing shared
/// access must serialize externally.
pub struct RegionQueue<'r> {
    /// Caller-owned backing storage. Borrowed, never freed here.
    region: &'r mut [u8],
    /// Minimum allocation length in bytes, fixed at creation.
    min_block_size: usize,
    /// Live blocks in allocation order. Front is oldest, back is newest.
    records: RecordQueue,
}

impl<'r> RegionQueue<'r> {
    /// Bind a handle to caller-supplied storage.
    ///
    /// The region's length is the handle's capacity, fixed for the
    /// handle's lifetime. Returns [`RegionError::InvalidConfig`] if the
    /// region is empty or smaller than the configured minimum block size.
    pub fn new(region: &'r mut [u8], config: RegionConfig) -> Result<Self, RegionError> {
        if region.is_empty() {
            return Err(RegionError::InvalidConfig {
                reason: "region capacity must be at least 1 byte",
            });
        }
        if config.min_block_size == 0 {
            return Err(RegionError::InvalidConfig {
                reason: "minimum block size must be at least 1 byte",
            });
        }
        if config.min_block_size > region.len() {
            return Err(RegionError::InvalidConfig {
                reason: "minimum block size exceeds region capacity",
            });
        }
        Ok(Self {
            region,
            min_block_size: config.min_block_size,
            records: RecordQueue::new(),
        })
    }

    /// Allocate `len` bytes from the suffix after the current tail block.
    ///
    /// Placement starts at offset 0 when no blocks are live, otherwise
    /// exactly at the tail block's end. Returns the new block's extent.
    ///
    /// Fails with [`RegionError::BelowMinimumSize`] if `len` is under the
    /// configured minimum, and with [`RegionError::InsufficientSpace`] if
    /// the remaining suffix cannot hold `len` bytes. Neither failure
    /// mutates the handle.
    pub fn alloc(&mut self, len: usize) -> Result<BlockRecord, RegionError> {
        if len < self.min_block_size {
            return Err(RegionError::BelowMinimumSize {
                requested: len,
                min_block_size: self.min_block_size,
            });
        }

        let placement = self.records.back().map_or(0, |tail| tail.end);
        let remaining = self.region.len() - placement;
        if remaining < len {
            return Err(RegionError::InsufficientSpace {
                requested: len,
                remaining,
            });
        }

        let record = BlockRecord {
            start: placement,
            end: placement + len,
        };
        self.records.push_back(record);
        Ok(record)
    }

    /// The extent of the head (oldest live) block, or `None` if no blocks
    /// are live. Pure query.
    pub fn peek(&self) -> Option<BlockRecord> {
        self.records.front().copied()
    }

    /// Release the head (oldest live) block, returning its extent.
    ///
    /// Blocks are released in the exact order they were allocated; the
    /// caller cannot target any other block. Returns `None` as a no-op
    /// when no blocks are live — a normal emptiness signal, not an error.
    pub fn release(&mut self) -> Option<BlockRecord> {
        self.records.pop_front()
    }

    /// Get a shared slice over a live block's bytes.
    ///
    /// # Panics
    ///
    /// Panics if `block` is not a currently live record of this handle
    /// (e.g. it was already released).
    pub fn slice(&self, block: BlockRecord) -> &[u8] {
        assert!(self.is_live(block), "block {block:?} is not live");
        &self.region[block.start..block.end]
    }

    /// Get a mutable slice over a live block's bytes.
    ///
    /// # Panics
    ///
    /// Panics if `block` is not a currently live record of this handle.
    pub fn slice_mut(&mut self, block: BlockRecord) -> &mut [u8] {
        assert!(self.is_live(block), "block {block:?} is not live");
        &mut self.region[block.start..block.end]
    }

    /// Total byte length of the region.
    pub fn capacity(&self) -> usize {
        self.region.len()
    }

    /// Bytes consumed from offset 0 through the tail block's end.
    ///
    /// Includes any prefix freed by `release`: that space is never
    /// reclaimed for new placements.
    pub fn used(&self) -> usize {
        self.records.back().map_or(0, |tail| tail.end)
    }

    /// Bytes remaining in the suffix after the tail block.
    pub fn remaining(&self) -> usize {
        self.region.len() - self.used()
    }

    /// Number of live blocks.
    pub fn live_blocks(&self) -> usize {
        self.records.len()
    }

    /// Whether no blocks are live.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The configured minimum allocation length in bytes.
    pub fn min_block_size(&self) -> usize {
        self.min_block_size
    }

    /// Snapshot the current record state for diagnostics.
    pub fn stats(&self) -> RegionStats {
        RegionStats {
            base: self.region.as_ptr() as usize,
            capacity: self.region.len(),
            blocks: self.records.iter().copied().collect(),
        }
    }

    fn is_live(&self, block: BlockRecord) -> bool {
        self.records.iter().any(|r| *r == block)
    }
}
