//! Block records and the owned FIFO metadata queue.
//!
//! A [`BlockRecord`] describes one live allocation's extent within the
//! region. Records are owned by a [`RecordQueue`] in allocation order:
//! the front is the oldest live block, the back is the most recent.
//! Removal transfers the record out by value, so no reference to removed
//! metadata can survive — including when the last record is removed.

use smallvec::SmallVec;

/// Records kept inline before the queue spills to the heap.
///
/// Sized for embedded-style workloads where a handful of variable-length
/// messages are in flight at once.
const INLINE_RECORDS: usize = 8;

/// One live allocation's extent within the region.
///
/// The extent is the half-open byte range `[start, end)`, relative to the
/// region base. Live records always have `start < end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockRecord {
    /// First byte of the extent, relative to the region base.
    pub start: usize,
    /// One past the last byte of the extent.
    pub end: usize,
}

impl BlockRecord {
    /// Length of the extent in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the extent is empty. Never true for a live record.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// An owned FIFO queue of [`BlockRecord`]s.
///
/// Insertion order is allocation order; records are only ever removed from
/// the front. Backed by a [`SmallVec`] so queues of up to
/// `INLINE_RECORDS` live blocks never touch the heap.
#[derive(Debug, Default)]
pub struct RecordQueue {
    records: SmallVec<[BlockRecord; INLINE_RECORDS]>,
}

impl RecordQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the tail (most recent position).
    pub fn push_back(&mut self, record: BlockRecord) {
        self.records.push(record);
    }

    /// Remove and return the head (oldest) record, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<BlockRecord> {
        if self.records.is_empty() {
            return None;
        }
        // O(live records); the queue is small by construction.
        Some(self.records.remove(0))
    }

    /// The head (oldest) record, if any.
    pub fn front(&self) -> Option<&BlockRecord> {
        self.records.first()
    }

    /// The tail (most recently appended) record, if any.
    pub fn back(&self) -> Option<&BlockRecord> {
        self.records.last()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the queue holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over live records in FIFO order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &BlockRecord> {
        self.records.iter()
    }

    /// Remove all records, leaving the queue empty and reusable.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
