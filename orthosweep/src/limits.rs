use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The largest absolute coordinate accepted by default.
pub const MAX_ABSOLUTE_COORD: i64 = 1_000_000;

/// The largest number of segments accepted by default.
pub const MAX_SEGMENTS: usize = 100_000;

/// The largest `max_abs_coord` any [`Limits`] may have.
///
/// The sweep allocates a tree over the whole coordinate domain, so the bound caps its
/// size: at this ceiling the tree takes 128 MiB.
pub const MAX_DOMAIN_BOUND: i64 = 1 << 22;

/// Bounds on the input accepted by a sweep.
///
/// Every coordinate must satisfy `|c| <= max_abs_coord`, and there can be at most
/// `max_segments` segments. Exceeding either bound fails the computation up front.
///
/// A negative `max_abs_coord` behaves like zero, and one above [`MAX_DOMAIN_BOUND`] is
/// rejected by [`Limits::check`] before anything is allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub max_abs_coord: i64,
    pub max_segments: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_abs_coord: MAX_ABSOLUTE_COORD,
            max_segments: MAX_SEGMENTS,
        }
    }
}

impl Limits {
    /// Limits with the given coordinate bound and the default segment capacity.
    pub fn with_max_abs_coord(max_abs_coord: i64) -> Self {
        Self {
            max_abs_coord,
            ..Self::default()
        }
    }

    /// Fails if the coordinate bound is too large to sweep over.
    pub fn check(&self) -> Result<()> {
        if self.max_abs_coord > MAX_DOMAIN_BOUND {
            return Err(Error::DomainTooLarge {
                bound: self.max_abs_coord,
                max: MAX_DOMAIN_BOUND,
            });
        }
        Ok(())
    }

    /// The bound that coordinates are actually checked against.
    ///
    /// This is `max_abs_coord`, clamped to `0..=MAX_DOMAIN_BOUND`.
    pub fn offset(&self) -> i64 {
        self.max_abs_coord.clamp(0, MAX_DOMAIN_BOUND)
    }

    /// The number of distinct coordinates, `2 * offset() + 1`.
    ///
    /// Translated coordinates live in `0..domain_size()`.
    pub fn domain_size(&self) -> usize {
        (2 * self.offset() + 1) as usize
    }

    pub fn contains(&self, coord: i64) -> bool {
        coord.unsigned_abs() <= self.offset() as u64
    }

    /// Shifts a coordinate into `0..domain_size()`.
    ///
    /// Only meaningful for coordinates that pass [`Limits::contains`].
    pub fn translate(&self, coord: i64) -> usize {
        debug_assert!(self.contains(coord));
        (coord + self.offset()) as usize
    }
}
