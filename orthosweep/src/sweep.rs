//! Counting interior intersections by sweeping a horizontal line upwards.
//!
//! Vertical segments become "start" and "end" events, and horizontal segments become
//! queries. As the sweep line moves up, a [`RangeTree`] keeps track of how many vertical
//! segments are active in each column, and each horizontal segment asks for the number
//! of active verticals strictly between its endpoints.

use crate::{
    error::{Error, Result},
    event::{Event, EventKind},
    geom::{Orientation, Segment},
    limits::Limits,
    range_tree::RangeTree,
};

/// Checks the input against `limits`, returning the orientation of every segment.
///
/// The limits themselves are checked first, then the capacity; after that, segments
/// are checked in order and the first bad one is reported.
pub(crate) fn validate(segments: &[Segment], limits: &Limits) -> Result<Vec<Orientation>> {
    limits.check()?;
    if segments.len() > limits.max_segments {
        return Err(Error::CapacityExceeded {
            count: segments.len(),
            max: limits.max_segments,
        });
    }

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            if let Some(&value) = segment.coords().iter().find(|&&c| !limits.contains(c)) {
                return Err(Error::CoordinateOutOfRange {
                    index,
                    value,
                    bound: limits.offset(),
                });
            }
            segment.orientation().ok_or(Error::InvalidGeometry {
                index,
                segment: *segment,
            })
        })
        .collect()
}

/// Validates the segments and returns their events in processing order.
///
/// Events are sorted by height; at equal heights vertical starts come first, then
/// horizontals, then vertical ends (see [`EventKind::priority`]).
pub fn sweep_events(segments: &[Segment], limits: &Limits) -> Result<Vec<Event>> {
    let orientations = validate(segments, limits)?;

    let mut events = Vec::with_capacity(segments.len() * 2);
    for (segment, orientation) in segments.iter().zip(orientations) {
        Event::push_from_segment(segment, orientation, limits, &mut events);
    }
    events.sort_unstable();

    log::debug!(
        "{} segments produced {} sweep events",
        segments.len(),
        events.len()
    );
    Ok(events)
}

/// Counts the points where a horizontal segment crosses a vertical segment strictly
/// inside both of them, using the default [`Limits`].
///
/// Touching at an endpoint doesn't count, and neither do overlaps between parallel
/// segments.
pub fn count_intersections(segments: &[Segment]) -> Result<u64> {
    count_intersections_with_limits(segments, &Limits::default())
}

/// Like [`count_intersections`], but with explicit limits.
pub fn count_intersections_with_limits(segments: &[Segment], limits: &Limits) -> Result<u64> {
    let events = sweep_events(segments, limits)?;
    // Without a query there is nothing to count, so skip allocating the tree.
    if !events.iter().any(|e| e.kind == EventKind::Horizontal) {
        log::debug!("no horizontal events, found 0 intersections");
        return Ok(0);
    }

    let mut tree = RangeTree::new(limits.domain_size());
    let mut total = 0u64;
    for event in &events {
        log::trace!("{event:?}");
        match event.kind {
            EventKind::StartVertical => tree.update(event.x_begin, 1),
            EventKind::EndVertical => tree.update(event.x_begin, -1),
            EventKind::Horizontal => {
                let active = tree.query(event.x_begin, event.x_end);
                // Every vertical starts before it ends, so no column goes negative.
                debug_assert!(active >= 0);
                total += active as u64;
            }
        }
    }

    log::debug!("found {total} intersections");
    Ok(total)
}
