//! Diagnostic snapshots of region-queue state.

use std::fmt;

use crate::record::BlockRecord;

/// A diagnostic snapshot of a [`RegionQueue`](crate::RegionQueue).
///
/// Captures the region's identity and every live block's extent in FIFO
/// order at the moment [`RegionQueue::stats`](crate::RegionQueue::stats)
/// was called. The `Display` rendering is for humans; it is not a stable
/// machine format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionStats {
    /// Address of the region's first byte, for identifying which region
    /// a report describes when several handles are live.
    pub base: usize,
    /// Total byte length of the region.
    pub capacity: usize,
    /// Live blocks in FIFO order (oldest first).
    pub blocks: Vec<BlockRecord>,
}

impl fmt::Display for RegionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "region base = {:#x}, capacity = {}",
            self.base, self.capacity
        )?;
        if self.blocks.is_empty() {
            return writeln!(f, "no blocks allocated");
        }
        for (i, block) in self.blocks.iter().enumerate() {
            writeln!(
                f,
                "block {i}: start = {}, end = {}, len = {}",
                block.start,
                block.end,
                block.len()
            )?;
        }
        Ok(())
    }
}
