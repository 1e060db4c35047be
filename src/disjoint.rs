//! # Disjoint
//!
//! A non-contiguous span: an ordered collection of [`Interval`]s.
//!
//! The collection trusts its caller to supply genuinely disjoint
//! intervals; no overlap or ordering validation is performed among
//! them. Bounds are the minimum begin and maximum end, and the
//! duration is the true sum over the parts rather than the enclosing
//! span.

use crate::duration::Duration;
use crate::error::Result;
use crate::interval::Interval;
use crate::point::Point;
use crate::scalar::Scalar;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// An ordered collection of intervals forming one non-contiguous span
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Disjoint {
    intervals: Vec<Interval>,
}

impl Disjoint {
    /// An empty disjoint span
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of intervals, kept in the given order
    pub fn from_intervals(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }

    /// Append an interval at the end of the collection
    pub fn append_interval(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    /// The constituent intervals, in insertion order
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Replace the whole collection
    pub fn set_intervals(&mut self, intervals: Vec<Interval>) {
        self.intervals = intervals;
    }

    /// Number of constituent intervals
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// True when no interval has been appended yet
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterate over the constituent intervals
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Earliest begin over all intervals, `None` when empty
    pub fn begin(&self) -> Option<Point> {
        self.intervals
            .iter()
            .map(Interval::begin)
            .reduce(|best, p| if p < best { p } else { best })
    }

    /// Latest end over all intervals, `None` when empty
    pub fn end(&self) -> Option<Point> {
        self.intervals
            .iter()
            .map(Interval::end)
            .reduce(|best, p| if p > best { p } else { best })
    }

    /// The enclosing `[begin, end]` interval, `None` when empty
    pub fn span(&self) -> Option<Interval> {
        match (self.begin(), self.end()) {
            (Some(b), Some(e)) => Interval::new(b, e).ok(),
            _ => None,
        }
    }

    /// Summed elapsed time over the parts, gaps excluded
    pub fn duration(&self) -> Duration {
        self.intervals
            .iter()
            .map(Interval::duration)
            .fold(Duration::new(0.0, 0.0), |acc, d| acc + d)
    }

    /// True when the point is a bound of any constituent interval
    pub fn is_bound(&self, point: &Point) -> bool {
        self.intervals.iter().any(|i| i.is_bound(point))
    }

    /// Move every interval along the timeline
    pub fn shift(&mut self, delay: Scalar) -> Result<()> {
        for interval in &mut self.intervals {
            interval.shift(delay)?;
        }
        Ok(())
    }

    /// Set the same radius on every bound of every interval
    pub fn set_radius(&mut self, radius: Option<Scalar>) -> Result<()> {
        for interval in &mut self.intervals {
            interval.set_radius(radius)?;
        }
        Ok(())
    }
}

// Same length, pairwise tolerant equality.
impl PartialEq for Disjoint {
    fn eq(&self, other: &Self) -> bool {
        self.intervals.len() == other.intervals.len()
            && self.intervals.iter().zip(&other.intervals).all(|(a, b)| a == b)
    }
}

// Ordered by earliest begin; empty collections are unordered.
impl PartialOrd for Disjoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match (self.begin(), other.begin()) {
            (Some(a), Some(b)) => match a.partial_cmp(&b) {
                Some(Ordering::Less) => Some(Ordering::Less),
                Some(Ordering::Greater) => Some(Ordering::Greater),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for Disjoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (n, interval) in self.intervals.iter().enumerate() {
            if n > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}
