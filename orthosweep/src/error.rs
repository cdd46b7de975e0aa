use thiserror::Error;

use crate::geom::Segment;

/// Reasons a set of segments can be rejected before sweeping.
///
/// All of these are detected while validating the input, so when one of them is
/// returned no events were generated and no partial count exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("segment {index} ({segment:?}) is neither horizontal nor vertical")]
    InvalidGeometry { index: usize, segment: Segment },

    #[error("segment {index} has coordinate {value}, but coordinates must be at most {bound} in absolute value")]
    CoordinateOutOfRange { index: usize, value: i64, bound: i64 },

    #[error("coordinate bound {bound} is too large; at most {max} is supported")]
    DomainTooLarge { bound: i64, max: i64 },

    #[error("{count} segments given, but at most {max} are supported")]
    CapacityExceeded { count: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = Error::InvalidGeometry {
            index: 2,
            segment: Segment::new((0, 0), (1, 1)),
        };
        assert_eq!(
            err.to_string(),
            "segment 2 ((0, 0) -- (1, 1)) is neither horizontal nor vertical"
        );

        let err = Error::CoordinateOutOfRange {
            index: 0,
            value: -12,
            bound: 10,
        };
        assert_eq!(
            err.to_string(),
            "segment 0 has coordinate -12, but coordinates must be at most 10 in absolute value"
        );

        let err = Error::DomainTooLarge {
            bound: 1 << 40,
            max: 1 << 22,
        };
        assert_eq!(
            err.to_string(),
            "coordinate bound 1099511627776 is too large; at most 4194304 is supported"
        );
    }
}
