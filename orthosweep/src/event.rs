use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{
    geom::{Orientation, Segment},
    limits::Limits,
};

/// The kinds of things that can happen as the sweep line moves up.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A vertical segment becomes active in column `x_begin` (which equals `x_end`).
    StartVertical,
    /// Count the active verticals in columns `x_begin..=x_end`.
    Horizontal,
    /// A vertical segment in column `x_begin` stops being active.
    EndVertical,
}

impl EventKind {
    /// The order in which events at the same height are processed.
    ///
    /// Verticals that start at a height are active for horizontals at that height, and
    /// verticals that end at a height are still active for them. So starts go first,
    /// then queries, then ends.
    pub fn priority(self) -> u8 {
        match self {
            EventKind::StartVertical => 0,
            EventKind::Horizontal => 1,
            EventKind::EndVertical => 2,
        }
    }
}

impl std::fmt::Debug for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::StartVertical => write!(f, "start"),
            EventKind::Horizontal => write!(f, "horizontal"),
            EventKind::EndVertical => write!(f, "end"),
        }
    }
}

/// A single sweep event, in translated coordinates.
///
/// Vertical events have `x_begin == x_end`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub height: usize,
    pub kind: EventKind,
    pub x_begin: usize,
    pub x_end: usize,
}

impl Event {
    pub fn start_vertical(height: usize, x: usize) -> Self {
        Event {
            height,
            kind: EventKind::StartVertical,
            x_begin: x,
            x_end: x,
        }
    }

    pub fn end_vertical(height: usize, x: usize) -> Self {
        Event {
            height,
            kind: EventKind::EndVertical,
            x_begin: x,
            x_end: x,
        }
    }

    pub fn horizontal(height: usize, x_begin: usize, x_end: usize) -> Self {
        Event {
            height,
            kind: EventKind::Horizontal,
            x_begin,
            x_end,
        }
    }

    /// Appends the events for a segment to `out`.
    ///
    /// Endpoints never count as intersections, so a segment's extent is trimmed by one
    /// unit at each end before it becomes events. A segment with nothing left after
    /// trimming produces no events.
    ///
    /// The segment must already be validated against `limits` and have the given
    /// orientation.
    pub fn push_from_segment(
        segment: &Segment,
        orientation: Orientation,
        limits: &Limits,
        out: &mut Vec<Event>,
    ) {
        match orientation {
            Orientation::Vertical => {
                let x = limits.translate(segment.start.x);
                let (y_lo, y_hi) = segment.y_range();
                let (y_lo, y_hi) = (limits.translate(y_lo), limits.translate(y_hi));
                // Translated coordinates are non-negative, so compare before subtracting.
                if y_lo + 2 <= y_hi {
                    out.push(Event::start_vertical(y_lo + 1, x));
                    out.push(Event::end_vertical(y_hi - 1, x));
                }
            }
            Orientation::Horizontal => {
                let y = limits.translate(segment.start.y);
                let (x_lo, x_hi) = segment.x_range();
                let (x_lo, x_hi) = (limits.translate(x_lo), limits.translate(x_hi));
                if x_lo + 2 <= x_hi {
                    out.push(Event::horizontal(y, x_lo + 1, x_hi - 1));
                }
            }
        }
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.height
            .cmp(&other.height)
            .then_with(|| self.kind.priority().cmp(&other.kind.priority()))
            .then_with(|| self.x_begin.cmp(&other.x_begin))
            .then_with(|| self.x_end.cmp(&other.x_end))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind == EventKind::Horizontal {
            write!(
                f,
                "{:?} -> horizontal({:?}..={:?})",
                self.height, self.x_begin, self.x_end
            )
        } else {
            write!(f, "{:?} -> {:?}({:?})", self.height, self.kind, self.x_begin)
        }
    }
}
