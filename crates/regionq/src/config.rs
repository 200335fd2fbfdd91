//! Region-queue configuration parameters.

use crate::error::RegionError;

/// Configuration for a [`RegionQueue`](crate::RegionQueue).
///
/// Holds the minimum allocation granularity. Validated at construction;
/// immutable afterwards. The region's capacity is not part of the config —
/// it is the length of the caller-supplied byte slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionConfig {
    /// Minimum allocation length in bytes. Requests below this are
    /// rejected with [`RegionError::BelowMinimumSize`].
    pub min_block_size: usize,
}

impl RegionConfig {
    /// Default minimum block size in bytes.
    pub const DEFAULT_MIN_BLOCK_SIZE: usize = 8;

    /// Create a config with the given minimum block size.
    ///
    /// Returns [`RegionError::InvalidConfig`] if `min_block_size` is zero.
    pub fn new(min_block_size: usize) -> Result<Self, RegionError> {
        if min_block_size == 0 {
            return Err(RegionError::InvalidConfig {
                reason: "minimum block size must be at least 1 byte",
            });
        }
        Ok(Self { min_block_size })
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            min_block_size: Self::DEFAULT_MIN_BLOCK_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_minimum_is_eight_bytes() {
        assert_eq!(RegionConfig::default().min_block_size, 8);
    }

    #[test]
    fn zero_minimum_rejected() {
        assert!(matches!(
            RegionConfig::new(0),
            Err(RegionError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn one_byte_minimum_accepted() {
        assert_eq!(RegionConfig::new(1).unwrap().min_block_size, 1);
    }
}
