//! Reading segments from the whitespace-separated text format.
//!
//! The input is a segment count `n`, followed by `n` groups of four integers
//! `x_a y_a x_b y_b`. Anything after the last segment is ignored.

use thiserror::Error;

use crate::geom::Segment;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input is empty, expected a segment count")]
    MissingCount,

    #[error("token {position} ({token:?}) is not an integer")]
    InvalidInteger { position: usize, token: String },

    #[error("segment count {0} is negative")]
    NegativeCount(i64),

    #[error("expected {expected} segments, but the input ends after {found}")]
    Truncated { expected: usize, found: usize },
}

struct Tokens<'a> {
    inner: std::iter::Enumerate<std::str::SplitAsciiWhitespace<'a>>,
}

impl Tokens<'_> {
    fn next_int(&mut self) -> Option<Result<i64, ParseError>> {
        let (position, token) = self.inner.next()?;
        Some(token.parse().map_err(|_| ParseError::InvalidInteger {
            position,
            token: token.to_owned(),
        }))
    }
}

pub fn parse_segments(input: &str) -> Result<Vec<Segment>, ParseError> {
    let mut tokens = Tokens {
        inner: input.split_ascii_whitespace().enumerate(),
    };

    let count = tokens.next_int().ok_or(ParseError::MissingCount)??;
    let expected = usize::try_from(count).map_err(|_| ParseError::NegativeCount(count))?;

    // Don't trust the count for preallocation; it could be huge.
    let mut segments = Vec::with_capacity(expected.min(1024));
    while segments.len() < expected {
        let mut coords = [0i64; 4];
        for c in &mut coords {
            *c = tokens.next_int().ok_or(ParseError::Truncated {
                expected,
                found: segments.len(),
            })??;
        }
        let [xa, ya, xb, yb] = coords;
        segments.push(Segment::new((xa, ya), (xb, yb)));
    }

    log::debug!("parsed {} segments", segments.len());
    Ok(segments)
}
