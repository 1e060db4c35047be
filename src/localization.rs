//! # Localization
//!
//! The closed set of ways an annotation can sit on a timeline: a
//! single [`Point`], an [`Interval`], or a [`Disjoint`] sequence of
//! intervals.
//!
//! Higher layers dispatch over the variant with an exhaustive match,
//! so the kind tag can never disagree with the payload.

use crate::disjoint::Disjoint;
use crate::duration::Duration;
use crate::error::Result;
use crate::interval::Interval;
use crate::point::Point;
use crate::scalar::Scalar;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Kind tag for a [`Localization`], used for invariant checks and
/// error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalizationKind {
    /// A single fuzzy point
    Point,
    /// A contiguous interval
    Interval,
    /// A non-contiguous sequence of intervals
    Disjoint,
}

impl fmt::Display for LocalizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalizationKind::Point => write!(f, "point"),
            LocalizationKind::Interval => write!(f, "interval"),
            LocalizationKind::Disjoint => write!(f, "disjoint"),
        }
    }
}

/// Where an annotation occurs on the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Localization {
    /// A single fuzzy point
    Point(Point),
    /// A contiguous interval
    Interval(Interval),
    /// A non-contiguous sequence of intervals
    Disjoint(Disjoint),
}

impl Localization {
    /// The kind tag of this localization
    pub fn kind(&self) -> LocalizationKind {
        match self {
            Localization::Point(_) => LocalizationKind::Point,
            Localization::Interval(_) => LocalizationKind::Interval,
            Localization::Disjoint(_) => LocalizationKind::Disjoint,
        }
    }

    /// True for the point variant
    pub fn is_point(&self) -> bool {
        self.kind() == LocalizationKind::Point
    }

    /// True for the interval variant
    pub fn is_interval(&self) -> bool {
        self.kind() == LocalizationKind::Interval
    }

    /// True for the disjoint variant
    pub fn is_disjoint(&self) -> bool {
        self.kind() == LocalizationKind::Disjoint
    }

    /// The span this localization occupies
    pub fn duration(&self) -> Duration {
        match self {
            Localization::Point(p) => p.duration(),
            Localization::Interval(i) => i.duration(),
            Localization::Disjoint(d) => d.duration(),
        }
    }

    /// Earliest bound; a point is its own begin. `None` only for an
    /// empty disjoint span.
    pub fn begin(&self) -> Option<Point> {
        match self {
            Localization::Point(p) => Some(*p),
            Localization::Interval(i) => Some(i.begin()),
            Localization::Disjoint(d) => d.begin(),
        }
    }

    /// Latest bound; a point is its own end. `None` only for an empty
    /// disjoint span.
    pub fn end(&self) -> Option<Point> {
        match self {
            Localization::Point(p) => Some(*p),
            Localization::Interval(i) => Some(i.end()),
            Localization::Disjoint(d) => d.end(),
        }
    }

    /// Both bounds at once, the comparators' uniform extraction
    pub fn bounds(&self) -> Option<(Point, Point)> {
        match (self.begin(), self.end()) {
            (Some(b), Some(e)) => Some((b, e)),
            _ => None,
        }
    }

    /// Move the localization along its timeline
    pub fn shift(&mut self, delay: Scalar) -> Result<()> {
        match self {
            Localization::Point(p) => p.shift(delay),
            Localization::Interval(i) => i.shift(delay),
            Localization::Disjoint(d) => d.shift(delay),
        }
    }

    /// Set the uncertainty radius on every bound
    pub fn set_radius(&mut self, radius: Option<Scalar>) -> Result<()> {
        match self {
            Localization::Point(p) => p.set_radius(radius),
            Localization::Interval(i) => i.set_radius(radius),
            Localization::Disjoint(d) => d.set_radius(radius),
        }
    }
}

impl From<Point> for Localization {
    fn from(point: Point) -> Self {
        Localization::Point(point)
    }
}

impl From<Interval> for Localization {
    fn from(interval: Interval) -> Self {
        Localization::Interval(interval)
    }
}

impl From<Disjoint> for Localization {
    fn from(disjoint: Disjoint) -> Self {
        Localization::Disjoint(disjoint)
    }
}

// Ordered by begin across kinds; cross-kind equality is handled by the
// `equals` relation in the comparators, not here.
impl PartialOrd for Localization {
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

impl fmt::Display for Localization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Localization::Point(p) => write!(f, "{}", p),
            Localization::Interval(i) => write!(f, "{}", i),
            Localization::Disjoint(d) => write!(f, "{}", d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(begin: f64, end: f64) -> Interval {
        Interval::new(Point::from(begin), Point::from(end)).unwrap()
    }

    #[test]
    fn test_kind_tags_are_exclusive() {
        let locs = [
            Localization::from(Point::from(1.0)),
            Localization::from(span(0.0, 1.0)),
            Localization::from(Disjoint::from_intervals(vec![span(0.0, 1.0)])),
        ];
        for loc in &locs {
            let tags = [loc.is_point(), loc.is_interval(), loc.is_disjoint()];
            assert_eq!(tags.iter().filter(|t| **t).count(), 1);
        }
    }

    #[test]
    fn test_point_is_its_own_bounds() {
        let loc = Localization::from(Point::from(2.5));
        assert_eq!(loc.begin().unwrap(), Point::from(2.5));
        assert_eq!(loc.end().unwrap(), Point::from(2.5));
    }

    #[test]
    fn test_empty_disjoint_has_no_bounds() {
        let loc = Localization::from(Disjoint::new());
        assert!(loc.bounds().is_none());
    }

    #[test]
    fn test_duration_dispatch() {
        assert_eq!(Localization::from(span(0.0, 5.0)).duration().value(), 5.0);
        assert_eq!(Localization::from(Point::from(1.0)).duration().value(), 0.0);
        let d = Disjoint::from_intervals(vec![span(0.0, 1.0), span(3.0, 5.0)]);
        assert_eq!(Localization::from(d).duration().value(), 3.0);
    }

    #[test]
    fn test_equality_requires_same_variant() {
        let p = Localization::from(Point::from(1.0));
        let i = Localization::from(span(1.0, 2.0));
        assert_ne!(p, i);
        assert_eq!(p, Localization::from(Point::from(1.0)));
    }

    #[test]
    fn test_ordering_crosses_kinds() {
        let p = Localization::from(Point::from(0.5));
        let i = Localization::from(span(1.0, 2.0));
        assert!(p < i);
        assert!(i > p);
    }

    #[test]
    fn test_shift_dispatch() {
        let mut loc = Localization::from(span(1.0, 2.0));
        loc.shift(Scalar::Float(1.0)).unwrap();
        assert_eq!(loc, Localization::from(span(2.0, 3.0)));
    }
}
