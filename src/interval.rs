//! # Interval
//!
//! A span between two fuzzy [`Point`]s, begin before end.
//!
//! Bound ordering is validated on construction and on every endpoint
//! mutation. Construction alone tolerates a degenerate `begin >= end`
//! pair with a warning, because decades-old annotation files contain
//! them and still need to load; mutating an interval into that state
//! is rejected.

use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::point::Point;
use crate::scalar::Scalar;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tracing::warn;

/// An ordered pair of fuzzy points on one timeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interval {
    begin: Point,
    end: Point,
}

impl Interval {
    /// Create an interval with bound validation
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] when begin and end live on
    /// timelines of different numeric kinds, and
    /// [`Error::BoundsViolation`] when both bounds carry radii and the
    /// radius-adjusted lower edges are out of order. A degenerate
    /// `begin >= end` pair is accepted with a warning.
    pub fn new(begin: Point, end: Point) -> Result<Self> {
        if begin.kind() != end.kind() {
            return Err(Error::TypeMismatch {
                expected: begin.kind(),
                found: end.kind(),
            });
        }
        if !radius_consistent(&begin, &end) {
            return Err(Error::BoundsViolation {
                begin: begin.to_string(),
                end: end.to_string(),
            });
        }
        if begin.midpoint() >= end.midpoint() {
            warn!("degenerate interval [{}, {}]", begin, end);
        }
        Ok(Self { begin, end })
    }

    /// The begin bound
    pub fn begin(&self) -> Point {
        self.begin
    }

    /// The end bound
    pub fn end(&self) -> Point {
        self.end
    }

    /// Replace the begin bound, re-validating against the current end
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] on a kind change and
    /// [`Error::BoundsViolation`] when the new begin does not precede
    /// the current end.
    pub fn set_begin(&mut self, begin: Point) -> Result<()> {
        check_interval_bounds(&begin, &self.end)?;
        self.begin = begin;
        Ok(())
    }

    /// Replace the end bound, re-validating against the current begin
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] on a kind change and
    /// [`Error::BoundsViolation`] when the current begin does not
    /// precede the new end.
    pub fn set_end(&mut self, end: Point) -> Result<()> {
        check_interval_bounds(&self.begin, &end)?;
        self.end = end;
        Ok(())
    }

    /// Elapsed time between the bounds, vagueness of both radii summed
    pub fn duration(&self) -> Duration {
        let value = self.end.midpoint().as_f64() - self.begin.midpoint().as_f64();
        let margin = self.begin.tolerance() + self.end.tolerance();
        Duration::new(value, margin)
    }

    /// The midpoint of the span, always float
    pub fn middle_value(&self) -> f64 {
        let b = self.begin.midpoint().as_f64();
        let e = self.end.midpoint().as_f64();
        b + (e - b) / 2.0
    }

    /// Merge with another interval, ordered by begin
    ///
    /// Non-overlapping intervals are bridged from the earlier begin to
    /// the later end; overlapping ones span from the overlap's start
    /// to the later end.
    pub fn combine(&self, other: &Interval) -> Result<Interval> {
        let (first, second) = if self > other {
            (other, self)
        } else {
            (self, other)
        };
        if first.end <= second.begin {
            return Interval::new(first.begin, second.end);
        }
        let end = if first.end > second.end {
            first.end
        } else {
            second.end
        };
        Interval::new(second.begin, end)
    }

    /// The enclosing span `[min begin, max end]`, overlap or not
    pub fn union(&self, other: &Interval) -> Result<Interval> {
        let begin = if other.begin < self.begin {
            other.begin
        } else {
            self.begin
        };
        let end = if other.end > self.end {
            other.end
        } else {
            self.end
        };
        Interval::new(begin, end)
    }

    /// True when the point falls within the bounds, tolerance-aware
    pub fn contains(&self, point: &Point) -> bool {
        self.begin <= *point && *point <= self.end
    }

    /// True when the bare value falls within the bounds
    pub fn contains_value(&self, value: Scalar) -> bool {
        self.contains(&Point::exact(value))
    }

    /// True when `inner` is entirely within this interval
    pub fn encloses(&self, inner: &Interval) -> bool {
        self.begin <= inner.begin && inner.end <= self.end
    }

    /// True when the point equals either bound
    pub fn is_bound(&self, point: &Point) -> bool {
        self.begin == *point || self.end == *point
    }

    /// Move both bounds along the timeline
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] when the delay kind differs
    /// from the interval's timeline kind.
    pub fn shift(&mut self, delay: Scalar) -> Result<()> {
        self.begin.shift(delay)?;
        self.end.shift(delay)?;
        Ok(())
    }

    /// Set the same radius on both bounds
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] when the radius kind differs
    /// from the interval's timeline kind.
    pub fn set_radius(&mut self, radius: Option<Scalar>) -> Result<()> {
        self.begin.set_radius(radius)?;
        self.end.set_radius(radius)?;
        Ok(())
    }
}

// Strict bound check used by endpoint mutation: the construction-time
// leniency for degenerate pairs does not apply here.
fn check_interval_bounds(begin: &Point, end: &Point) -> Result<()> {
    if begin.kind() != end.kind() {
        return Err(Error::TypeMismatch {
            expected: begin.kind(),
            found: end.kind(),
        });
    }
    if begin.midpoint() >= end.midpoint() || !radius_consistent(begin, end) {
        return Err(Error::BoundsViolation {
            begin: begin.to_string(),
            end: end.to_string(),
        });
    }
    Ok(())
}

// With both radii present the lower edges must stay ordered too.
fn radius_consistent(begin: &Point, end: &Point) -> bool {
    match (begin.radius(), end.radius()) {
        (Some(rb), Some(re)) => {
            begin.midpoint().as_f64() - rb.as_f64() <= end.midpoint().as_f64() - re.as_f64()
        }
        _ => true,
    }
}

// Tolerant equality of both bounds.
impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.begin == other.begin && self.end == other.end
    }
}

// Ordered by begin. Two intervals whose begins sit within tolerance
// but whose ends differ are unordered: neither <, nor >, nor ==.
impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.begin.partial_cmp(&other.begin) {
            Some(Ordering::Less) => Some(Ordering::Less),
            Some(Ordering::Greater) => Some(Ordering::Greater),
            _ => None,
        }
    }
}

/// An interval never equals a bare point
impl PartialEq<Point> for Interval {
    fn eq(&self, _other: &Point) -> bool {
        false
    }
}

/// Against a bare point an interval is below it when its end is, and
/// above it when its begin is
impl PartialOrd<Point> for Interval {
    fn partial_cmp(&self, other: &Point) -> Option<Ordering> {
        if self.end < *other {
            Some(Ordering::Less)
        } else if self.begin > *other {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.begin, self.end)
    }
}
