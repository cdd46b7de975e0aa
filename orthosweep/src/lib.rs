//! Counting the interior crossings of horizontal and vertical line segments.
//!
//! ```
//! use orthosweep::{count_intersections, Segment};
//!
//! let segments = [
//!     Segment::new((5, 0), (5, 10)),
//!     Segment::new((0, 5), (10, 5)),
//!     // Touches the vertical segment at its endpoint, which doesn't count.
//!     Segment::new((5, 10), (9, 10)),
//! ];
//! assert_eq!(count_intersections(&segments), Ok(1));
//! ```

mod error;
mod event;
mod geom;
mod limits;
mod naive;
mod range_tree;
mod sweep;

pub mod input;

pub use error::{Error, Result};
pub use event::{Event, EventKind};
pub use geom::{Orientation, Point, Segment};
pub use limits::{Limits, MAX_ABSOLUTE_COORD, MAX_DOMAIN_BOUND, MAX_SEGMENTS};
pub use naive::count_intersections_naive;
pub use range_tree::RangeTree;
pub use sweep::{count_intersections, count_intersections_with_limits, sweep_events};
