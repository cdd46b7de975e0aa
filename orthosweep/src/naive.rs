//! A quadratic intersection counter, for checking the sweep.

use crate::{
    error::Result,
    geom::{Orientation, Segment},
    limits::Limits,
    sweep::validate,
};

/// Does the horizontal segment `h` cross the vertical segment `v` strictly inside both?
fn crosses(v: &Segment, h: &Segment) -> bool {
    let x = v.start.x;
    let y = h.start.y;
    let (x_lo, x_hi) = h.x_range();
    let (y_lo, y_hi) = v.y_range();
    x_lo < x && x < x_hi && y_lo < y && y < y_hi
}

/// Counts intersections by checking every vertical against every horizontal.
///
/// This accepts and rejects exactly the same inputs as
/// [`count_intersections_with_limits`](crate::count_intersections_with_limits), and
/// agrees with it on the count. It takes time proportional to the product of the
/// number of vertical and horizontal segments.
pub fn count_intersections_naive(segments: &[Segment], limits: &Limits) -> Result<u64> {
    let orientations = validate(segments, limits)?;

    let (verticals, horizontals): (Vec<_>, Vec<_>) = segments
        .iter()
        .zip(orientations)
        .partition(|(_, orientation)| *orientation == Orientation::Vertical);

    let mut total = 0;
    for (v, _) in &verticals {
        total += horizontals.iter().filter(|(h, _)| crosses(v, h)).count() as u64;
    }
    Ok(total)
}
