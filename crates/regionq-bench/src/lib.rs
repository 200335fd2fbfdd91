//! Benchmark profiles for the regionq FIFO block allocator.
//!
//! Provides a shared region size and a pre-filled queue builder so bench
//! targets measure the same workload shape.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use regionq::{RegionConfig, RegionQueue};

/// Region size used by all bench profiles.
pub const REGION_BYTES: usize = 64 * 1024;

/// Block size used by all bench profiles.
pub const BLOCK_BYTES: usize = 64;

/// Build a queue over `storage` and fill it with `blocks` live blocks.
///
/// # Panics
///
/// Panics if `storage` cannot hold `blocks * BLOCK_BYTES` bytes.
pub fn filled_queue(storage: &mut [u8], blocks: usize) -> RegionQueue<'_> {
    let mut queue = RegionQueue::new(storage, RegionConfig::default()).unwrap();
    for _ in 0..blocks {
        queue.alloc(BLOCK_BYTES).unwrap();
    }
    queue
}
