use serde::{Deserialize, Serialize};

// Points are sorted by `y` and then by `x`
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub y: i64,
    pub x: i64,
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Which axis a segment runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// A line segment between two integer points, in input order.
///
/// Unlike the sweep's internal representation, the endpoints are not normalized: `start`
/// may be above or to the right of `end`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl std::fmt::Debug for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -- {:?}", self.start, self.end)
    }
}

impl Segment {
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Segment {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Classifies this segment, or returns `None` if it is neither horizontal nor vertical.
    ///
    /// The vertical check comes first, so a segment whose endpoints coincide counts as
    /// vertical. Such a segment has no interior and never contributes an intersection.
    pub fn orientation(&self) -> Option<Orientation> {
        if self.start.x == self.end.x {
            Some(Orientation::Vertical)
        } else if self.start.y == self.end.y {
            Some(Orientation::Horizontal)
        } else {
            None
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.orientation() == Some(Orientation::Vertical)
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation() == Some(Orientation::Horizontal)
    }

    /// The smallest and largest `x` coordinate.
    pub fn x_range(&self) -> (i64, i64) {
        (
            self.start.x.min(self.end.x),
            self.start.x.max(self.end.x),
        )
    }

    /// The smallest and largest `y` coordinate.
    pub fn y_range(&self) -> (i64, i64) {
        (
            self.start.y.min(self.end.y),
            self.start.y.max(self.end.y),
        )
    }

    pub fn coords(&self) -> [i64; 4] {
        [self.start.x, self.start.y, self.end.x, self.end.y]
    }
}
