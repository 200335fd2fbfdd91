//! FIFO block allocation over a caller-owned byte region.
//!
//! `regionq` carves non-overlapping blocks out of a contiguous byte region
//! the caller supplies, for embedded or resource-constrained contexts where
//! heap allocation is unavailable or undesirable. Blocks form a queue of
//! variable-length records packed into one buffer: allocation always
//! extends past the most recent block, and release always removes the
//! oldest.
//!
//! # Architecture
//!
//! ```text
//! RegionQueue<'r> (handle over &'r mut [u8])
//! ├── RecordQueue → BlockRecord[] (live extents, FIFO order)
//! ├── alloc()   — bump placement after the tail record
//! ├── peek()    — oldest live extent
//! ├── release() — pop the oldest live extent
//! └── stats()   — RegionStats diagnostic snapshot
//! ```
//!
//! # Not a ring buffer
//!
//! Placement is a monotonic bump from the tail. Space freed by `release`
//! behind still-live blocks is never reclaimed, and the write cursor never
//! wraps around the region's end. Once the suffix after the tail is
//! exhausted, allocation fails until the handle is discarded and a fresh
//! one is created over the region.
//!
//! # Example
//!
//! ```
//! use regionq::{RegionConfig, RegionQueue};
//!
//! let mut storage = [0u8; 512];
//! let mut queue = RegionQueue::new(&mut storage, RegionConfig::default())?;
//!
//! let first = queue.alloc(12)?;
//! let second = queue.alloc(18)?;
//! assert_eq!(queue.peek(), Some(first));
//!
//! queue.release();
//! assert_eq!(queue.peek(), Some(second));
//! # Ok::<(), regionq::RegionError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod record;
pub mod region;
pub mod stats;

// Public re-exports for the primary API surface.
pub use config::RegionConfig;
pub use error::RegionError;
pub use record::BlockRecord;
pub use region::RegionQueue;
pub use stats::RegionStats;
