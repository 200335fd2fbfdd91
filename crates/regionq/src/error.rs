//! Region-queue error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during region-queue operations.
///
/// Queue emptiness is not an error: [`RegionQueue::peek`] and
/// [`RegionQueue::release`] signal it with `None`.
///
/// [`RegionQueue::peek`]: crate::RegionQueue::peek
/// [`RegionQueue::release`]: crate::RegionQueue::release
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionError {
    /// The requested length is below the configured minimum block size.
    ///
    /// A caller error; the request is rejected regardless of how much
    /// space remains in the region.
    BelowMinimumSize {
        /// Number of bytes requested.
        requested: usize,
        /// The configured minimum allocation granularity.
        min_block_size: usize,
    },
    /// The suffix of the region after the tail block cannot satisfy the
    /// request.
    ///
    /// An expected, recoverable condition — the caller decides whether to
    /// release blocks, wait, or fail upward. Space freed behind still-live
    /// blocks does not count towards `remaining` (no wraparound reuse).
    InsufficientSpace {
        /// Number of bytes requested.
        requested: usize,
        /// Bytes remaining after the tail block's end.
        remaining: usize,
    },
    /// The handle or its configuration was constructed with invalid
    /// parameters (zero capacity, zero minimum block size, or a minimum
    /// block size larger than the region).
    InvalidConfig {
        /// Human-readable description of the rejected parameter.
        reason: &'static str,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowMinimumSize {
                requested,
                min_block_size,
            } => {
                write!(
                    f,
                    "requested {requested} bytes, below minimum block size {min_block_size}"
                )
            }
            Self::InsufficientSpace {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "insufficient space: requested {requested} bytes, {remaining} bytes remaining"
                )
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
        }
    }
}

impl Error for RegionError {}
