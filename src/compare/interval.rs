//! Allen's interval algebra and its INDU duration refinements.
//!
//! The thirteen base relations are mutually exclusive and exhaustive
//! over crisp bounds; with fuzzy points the bound comparisons inherit
//! the points' tolerances. The INDU variants conjoin a base relation
//! with a tolerant duration comparison (`equal`, `greater`, `lower`)
//! and pass the base relation's options through unchanged.

use crate::compare::{bounds2, span_duration, OverlapMin, RelationOptions};
use crate::duration::Duration;
use crate::error::Error;
use crate::localization::Localization;
use std::fmt;
use std::str::FromStr;

/// `i1` ends before `i2` begins; with `max_delay`, the gap must stay
/// below it
pub fn before(i1: &Localization, i2: &Localization, options: &RelationOptions) -> bool {
    let Some(((_, x2), (y1, _))) = bounds2(i1, i2) else {
        return false;
    };
    if !(x2 < y1) {
        return false;
    }
    match options.max_delay() {
        Some(max_delay) => span_duration(&x2, &y1) < *max_delay,
        None => true,
    }
}

/// `i2` ends before `i1` begins; mirror of [`before`]
pub fn after(i1: &Localization, i2: &Localization, options: &RelationOptions) -> bool {
    let Some(((x1, _), (_, y2))) = bounds2(i1, i2) else {
        return false;
    };
    if !(y2 < x1) {
        return false;
    }
    match options.max_delay() {
        Some(max_delay) => span_duration(&y2, &x1) < *max_delay,
        None => true,
    }
}

/// `i1`'s end is `i2`'s begin: adjacency without overlap
pub fn meets(i1: &Localization, i2: &Localization, _options: &RelationOptions) -> bool {
    let Some(((x1, x2), (y1, y2))) = bounds2(i1, i2) else {
        return false;
    };
    !(x1 == y1 && x2 == y2) && x2 == y1
}

/// `i2`'s end is `i1`'s begin; mirror of [`meets`]
pub fn metby(i1: &Localization, i2: &Localization, _options: &RelationOptions) -> bool {
    let Some(((x1, x2), (y1, y2))) = bounds2(i1, i2) else {
        return false;
    };
    !(x1 == y1 && x2 == y2) && x1 == y2
}

/// `i1` begins first and ends inside `i2`; with `overlap_min`, the
/// overlap span must last at least that long
pub fn overlaps(i1: &Localization, i2: &Localization, options: &RelationOptions) -> bool {
    let Some(((x1, x2), (y1, y2))) = bounds2(i1, i2) else {
        return false;
    };
    if !(x1 < y1 && y1 < x2 && x2 < y2) {
        return false;
    }
    overlap_accepted(span_duration(&y1, &x2), i1, options)
}

/// `i2` begins first and ends inside `i1`; the overlap span runs from
/// `i1`'s begin to `i2`'s end
pub fn overlappedby(i1: &Localization, i2: &Localization, options: &RelationOptions) -> bool {
    let Some(((x1, x2), (y1, y2))) = bounds2(i1, i2) else {
        return false;
    };
    if !(y1 < x1 && x1 < y2 && y2 < x2) {
        return false;
    }
    overlap_accepted(span_duration(&x1, &y2), i1, options)
}

/// Same begin, `i1` ends earlier
pub fn starts(i1: &Localization, i2: &Localization, _options: &RelationOptions) -> bool {
    let Some(((x1, x2), (y1, y2))) = bounds2(i1, i2) else {
        return false;
    };
    x1 == y1 && x2 < y2
}

/// Same begin, `i1` ends later
pub fn startedby(i1: &Localization, i2: &Localization, _options: &RelationOptions) -> bool {
    let Some(((x1, x2), (y1, y2))) = bounds2(i1, i2) else {
        return false;
    };
    x1 == y1 && y2 < x2
}

/// Same end, `i1` begins later
pub fn finishes(i1: &Localization, i2: &Localization, _options: &RelationOptions) -> bool {
    let Some(((x1, x2), (y1, y2))) = bounds2(i1, i2) else {
        return false;
    };
    x2 == y2 && y1 < x1
}

/// Same end, `i1` begins earlier
pub fn finishedby(i1: &Localization, i2: &Localization, _options: &RelationOptions) -> bool {
    let Some(((x1, x2), (y1, y2))) = bounds2(i1, i2) else {
        return false;
    };
    x2 == y2 && x1 < y1
}

/// `i1` is strictly nested inside `i2`
pub fn during(i1: &Localization, i2: &Localization, _options: &RelationOptions) -> bool {
    let Some(((x1, x2), (y1, y2))) = bounds2(i1, i2) else {
        return false;
    };
    y1 < x1 && x2 < y2
}

/// `i2` is strictly nested inside `i1`
pub fn contains(i1: &Localization, i2: &Localization, _options: &RelationOptions) -> bool {
    let Some(((x1, x2), (y1, y2))) = bounds2(i1, i2) else {
        return false;
    };
    x1 < y1 && y2 < x2
}

/// Both bounds coincide, tolerance-aware
pub fn equals(i1: &Localization, i2: &Localization, _options: &RelationOptions) -> bool {
    let Some(((x1, x2), (y1, y2))) = bounds2(i1, i2) else {
        return false;
    };
    x1 == y1 && x2 == y2
}

// Minimum-overlap gate shared by overlaps/overlappedby. The percent
// form scales against i1's duration value.
fn overlap_accepted(overlap: Duration, i1: &Localization, options: &RelationOptions) -> bool {
    match options.overlap_min() {
        None => true,
        Some(OverlapMin::Absolute(value)) => overlap >= *value,
        Some(OverlapMin::Percent(percent)) => {
            overlap >= i1.duration().value() * percent / 100.0
        }
    }
}

fn duration_equal(i1: &Localization, i2: &Localization) -> bool {
    i1.duration() == i2.duration()
}

fn duration_greater(i1: &Localization, i2: &Localization) -> bool {
    i1.duration() > i2.duration()
}

fn duration_lower(i1: &Localization, i2: &Localization) -> bool {
    i1.duration() < i2.duration()
}

// INDU refinements: base relation AND a tolerant duration comparison,
// with the base relation's options passed through positionally.
macro_rules! indu {
    ($base:ident, $eq:ident, $gt:ident, $lt:ident) => {
        /// INDU: base relation with equal durations
        pub fn $eq(i1: &Localization, i2: &Localization, options: &RelationOptions) -> bool {
            $base(i1, i2, options) && duration_equal(i1, i2)
        }

        /// INDU: base relation with `i1` lasting longer
        pub fn $gt(i1: &Localization, i2: &Localization, options: &RelationOptions) -> bool {
            $base(i1, i2, options) && duration_greater(i1, i2)
        }

        /// INDU: base relation with `i1` lasting shorter
        pub fn $lt(i1: &Localization, i2: &Localization, options: &RelationOptions) -> bool {
            $base(i1, i2, options) && duration_lower(i1, i2)
        }
    };
}

indu!(before, before_equal, before_greater, before_lower);
indu!(after, after_equal, after_greater, after_lower);
indu!(meets, meets_equal, meets_greater, meets_lower);
indu!(metby, metby_equal, metby_greater, metby_lower);
indu!(overlaps, overlaps_equal, overlaps_greater, overlaps_lower);
indu!(
    overlappedby,
    overlappedby_equal,
    overlappedby_greater,
    overlappedby_lower
);

/// The full relation set, addressable by wire name
///
/// Thirteen Allen relations plus the INDU refinements of the six
/// relations where relative duration is informative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalRelation {
    /// `before`
    Before,
    /// `before_equal`
    BeforeEqual,
    /// `before_greater`
    BeforeGreater,
    /// `before_lower`
    BeforeLower,
    /// `after`
    After,
    /// `after_equal`
    AfterEqual,
    /// `after_greater`
    AfterGreater,
    /// `after_lower`
    AfterLower,
    /// `meets`
    Meets,
    /// `meets_equal`
    MeetsEqual,
    /// `meets_greater`
    MeetsGreater,
    /// `meets_lower`
    MeetsLower,
    /// `metby`
    MetBy,
    /// `metby_equal`
    MetByEqual,
    /// `metby_greater`
    MetByGreater,
    /// `metby_lower`
    MetByLower,
    /// `overlaps`
    Overlaps,
    /// `overlaps_equal`
    OverlapsEqual,
    /// `overlaps_greater`
    OverlapsGreater,
    /// `overlaps_lower`
    OverlapsLower,
    /// `overlappedby`
    OverlappedBy,
    /// `overlappedby_equal`
    OverlappedByEqual,
    /// `overlappedby_greater`
    OverlappedByGreater,
    /// `overlappedby_lower`
    OverlappedByLower,
    /// `starts`
    Starts,
    /// `startedby`
    StartedBy,
    /// `finishes`
    Finishes,
    /// `finishedby`
    FinishedBy,
    /// `during`
    During,
    /// `contains`
    Contains,
    /// `equals`
    Equals,
}

impl IntervalRelation {
    /// Every relation, in table order, for UI enumeration
    pub const ALL: [IntervalRelation; 31] = [
        IntervalRelation::Before,
        IntervalRelation::BeforeEqual,
        IntervalRelation::BeforeGreater,
        IntervalRelation::BeforeLower,
        IntervalRelation::After,
        IntervalRelation::AfterEqual,
        IntervalRelation::AfterGreater,
        IntervalRelation::AfterLower,
        IntervalRelation::Meets,
        IntervalRelation::MeetsEqual,
        IntervalRelation::MeetsGreater,
        IntervalRelation::MeetsLower,
        IntervalRelation::MetBy,
        IntervalRelation::MetByEqual,
        IntervalRelation::MetByGreater,
        IntervalRelation::MetByLower,
        IntervalRelation::Overlaps,
        IntervalRelation::OverlapsEqual,
        IntervalRelation::OverlapsGreater,
        IntervalRelation::OverlapsLower,
        IntervalRelation::OverlappedBy,
        IntervalRelation::OverlappedByEqual,
        IntervalRelation::OverlappedByGreater,
        IntervalRelation::OverlappedByLower,
        IntervalRelation::Starts,
        IntervalRelation::StartedBy,
        IntervalRelation::Finishes,
        IntervalRelation::FinishedBy,
        IntervalRelation::During,
        IntervalRelation::Contains,
        IntervalRelation::Equals,
    ];

    /// The wire name a filter UI uses for this relation
    pub fn name(&self) -> &'static str {
        match self {
            IntervalRelation::Before => "before",
            IntervalRelation::BeforeEqual => "before_equal",
            IntervalRelation::BeforeGreater => "before_greater",
            IntervalRelation::BeforeLower => "before_lower",
            IntervalRelation::After => "after",
            IntervalRelation::AfterEqual => "after_equal",
            IntervalRelation::AfterGreater => "after_greater",
            IntervalRelation::AfterLower => "after_lower",
            IntervalRelation::Meets => "meets",
            IntervalRelation::MeetsEqual => "meets_equal",
            IntervalRelation::MeetsGreater => "meets_greater",
            IntervalRelation::MeetsLower => "meets_lower",
            IntervalRelation::MetBy => "metby",
            IntervalRelation::MetByEqual => "metby_equal",
            IntervalRelation::MetByGreater => "metby_greater",
            IntervalRelation::MetByLower => "metby_lower",
            IntervalRelation::Overlaps => "overlaps",
            IntervalRelation::OverlapsEqual => "overlaps_equal",
            IntervalRelation::OverlapsGreater => "overlaps_greater",
            IntervalRelation::OverlapsLower => "overlaps_lower",
            IntervalRelation::OverlappedBy => "overlappedby",
            IntervalRelation::OverlappedByEqual => "overlappedby_equal",
            IntervalRelation::OverlappedByGreater => "overlappedby_greater",
            IntervalRelation::OverlappedByLower => "overlappedby_lower",
            IntervalRelation::Starts => "starts",
            IntervalRelation::StartedBy => "startedby",
            IntervalRelation::Finishes => "finishes",
            IntervalRelation::FinishedBy => "finishedby",
            IntervalRelation::During => "during",
            IntervalRelation::Contains => "contains",
            IntervalRelation::Equals => "equals",
        }
    }

    /// Evaluate this relation between two localizations
    pub fn eval(
        &self,
        i1: &Localization,
        i2: &Localization,
        options: &RelationOptions,
    ) -> bool {
        match self {
            IntervalRelation::Before => before(i1, i2, options),
            IntervalRelation::BeforeEqual => before_equal(i1, i2, options),
            IntervalRelation::BeforeGreater => before_greater(i1, i2, options),
            IntervalRelation::BeforeLower => before_lower(i1, i2, options),
            IntervalRelation::After => after(i1, i2, options),
            IntervalRelation::AfterEqual => after_equal(i1, i2, options),
            IntervalRelation::AfterGreater => after_greater(i1, i2, options),
            IntervalRelation::AfterLower => after_lower(i1, i2, options),
            IntervalRelation::Meets => meets(i1, i2, options),
            IntervalRelation::MeetsEqual => meets_equal(i1, i2, options),
            IntervalRelation::MeetsGreater => meets_greater(i1, i2, options),
            IntervalRelation::MeetsLower => meets_lower(i1, i2, options),
            IntervalRelation::MetBy => metby(i1, i2, options),
            IntervalRelation::MetByEqual => metby_equal(i1, i2, options),
            IntervalRelation::MetByGreater => metby_greater(i1, i2, options),
            IntervalRelation::MetByLower => metby_lower(i1, i2, options),
            IntervalRelation::Overlaps => overlaps(i1, i2, options),
            IntervalRelation::OverlapsEqual => overlaps_equal(i1, i2, options),
            IntervalRelation::OverlapsGreater => overlaps_greater(i1, i2, options),
            IntervalRelation::OverlapsLower => overlaps_lower(i1, i2, options),
            IntervalRelation::OverlappedBy => overlappedby(i1, i2, options),
            IntervalRelation::OverlappedByEqual => overlappedby_equal(i1, i2, options),
            IntervalRelation::OverlappedByGreater => overlappedby_greater(i1, i2, options),
            IntervalRelation::OverlappedByLower => overlappedby_lower(i1, i2, options),
            IntervalRelation::Starts => starts(i1, i2, options),
            IntervalRelation::StartedBy => startedby(i1, i2, options),
            IntervalRelation::Finishes => finishes(i1, i2, options),
            IntervalRelation::FinishedBy => finishedby(i1, i2, options),
            IntervalRelation::During => during(i1, i2, options),
            IntervalRelation::Contains => contains(i1, i2, options),
            IntervalRelation::Equals => equals(i1, i2, options),
        }
    }
}

impl FromStr for IntervalRelation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        IntervalRelation::ALL
            .iter()
            .find(|relation| relation.name() == s)
            .copied()
            .ok_or_else(|| Error::ValueRange(format!("unknown interval relation '{}'", s)))
    }
}

impl fmt::Display for IntervalRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::Duration;
    use crate::interval::Interval;
    use crate::point::Point;

    fn span(begin: f64, end: f64) -> Localization {
        Localization::from(Interval::new(Point::from(begin), Point::from(end)).unwrap())
    }

    fn none() -> RelationOptions {
        RelationOptions::new()
    }

    #[test]
    fn test_before_and_after() {
        let a = span(0.0, 2.0);
        let b = span(5.0, 7.0);
        assert!(before(&a, &b, &none()));
        assert!(!before(&b, &a, &none()));
        assert!(after(&b, &a, &none()));
        assert!(!after(&a, &b, &none()));
    }

    #[test]
    fn test_before_with_max_delay() {
        // gap between [0,2] and [5,7] is 3.0
        let a = span(0.0, 2.0);
        let b = span(5.0, 7.0);
        let wide = none().with_max_delay(Duration::from(4.0));
        let tight = none().with_max_delay(Duration::from(1.0));
        assert!(before(&a, &b, &wide));
        assert!(!before(&a, &b, &tight));
    }

    #[test]
    fn test_meets_and_metby() {
        let a = span(0.0, 2.0);
        let b = span(2.0, 4.0);
        assert!(meets(&a, &b, &none()));
        assert!(!meets(&b, &a, &none()));
        assert!(metby(&b, &a, &none()));
        // adjacency is not overlap
        assert!(!overlaps(&a, &b, &none()));
        // an interval never meets itself
        assert!(!meets(&a, &a, &none()));
    }

    #[test]
    fn test_overlaps_and_overlap_min() {
        // [0,5] against [3,8]: the overlap span lasts 2.0
        let a = span(0.0, 5.0);
        let b = span(3.0, 8.0);
        assert!(overlaps(&a, &b, &none()));
        assert!(overlappedby(&b, &a, &none()));

        let min_ok = none().with_min_overlap(2.0).unwrap();
        let min_high = none().with_min_overlap(3.0).unwrap();
        assert!(overlaps(&a, &b, &min_ok));
        assert!(!overlaps(&a, &b, &min_high));

        // 2.0 of 5.0 is 40 percent of i1
        let pct_ok = none().with_min_overlap_percent(40.0).unwrap();
        let pct_high = none().with_min_overlap_percent(50.0).unwrap();
        assert!(overlaps(&a, &b, &pct_ok));
        assert!(!overlaps(&a, &b, &pct_high));
    }

    #[test]
    fn test_starts_family() {
        assert!(starts(&span(0.0, 2.0), &span(0.0, 5.0), &none()));
        assert!(startedby(&span(0.0, 5.0), &span(0.0, 2.0), &none()));
        assert!(!starts(&span(0.0, 5.0), &span(0.0, 5.0), &none()));
    }

    #[test]
    fn test_finishes_family() {
        assert!(finishes(&span(3.0, 5.0), &span(0.0, 5.0), &none()));
        assert!(finishedby(&span(0.0, 5.0), &span(3.0, 5.0), &none()));
    }

    #[test]
    fn test_during_and_contains() {
        assert!(during(&span(2.0, 3.0), &span(0.0, 5.0), &none()));
        assert!(contains(&span(0.0, 5.0), &span(2.0, 3.0), &none()));
        assert!(!during(&span(0.0, 5.0), &span(2.0, 3.0), &none()));
    }

    #[test]
    fn test_equals_is_tolerance_aware() {
        assert!(equals(&span(1.0, 5.0), &span(1.0, 5.0), &none()));

        let fuzzy_begin = Point::new(1.01f64.into(), Some(0.05f64.into())).unwrap();
        let fuzzy = Localization::from(
            Interval::new(fuzzy_begin, Point::from(5.0)).unwrap(),
        );
        assert!(equals(&span(1.0, 5.0), &fuzzy, &none()));
    }

    #[test]
    fn test_point_is_a_degenerate_interval() {
        let p = Localization::from(Point::from(1.0));
        let i = span(3.0, 5.0);
        assert!(before(&p, &i, &none()));
        assert!(after(&i, &p, &none()));

        let boundary = Localization::from(Point::from(3.0));
        assert!(meets(&boundary, &i, &none()));
    }

    #[test]
    fn test_crisp_exclusivity() {
        // two separated crisp intervals: exactly one of before/after,
        // nothing else
        let a = span(0.0, 2.0);
        let b = span(5.0, 7.0);
        let held: Vec<&str> = IntervalRelation::ALL
            .iter()
            .filter(|r| r.eval(&a, &b, &none()))
            .map(|r| r.name())
            .collect();
        assert_eq!(held, vec!["before", "before_equal"]);
    }

    #[test]
    fn test_indu_conjunction() {
        let a = span(0.0, 2.0);
        let b = span(5.0, 7.0);
        let c = span(5.0, 6.0);

        // same durations
        assert!(before_equal(&a, &b, &none()));
        assert!(!before_greater(&a, &b, &none()));
        assert!(!before_lower(&a, &b, &none()));

        // i1 lasts longer than i2
        assert!(before_greater(&a, &c, &none()));
        assert!(!before_equal(&a, &c, &none()));

        // i1 lasts shorter than i2
        assert!(after_lower(&c, &a, &none()));
    }

    #[test]
    fn test_indu_reuses_base_options() {
        let a = span(0.0, 2.0);
        let b = span(5.0, 7.0);
        let tight = none().with_max_delay(Duration::from(1.0));
        // durations match, but the base relation fails its max_delay
        assert!(!before_equal(&a, &b, &tight));
    }

    #[test]
    fn test_empty_disjoint_satisfies_nothing() {
        let empty = Localization::from(crate::disjoint::Disjoint::new());
        let i = span(0.0, 5.0);
        for relation in IntervalRelation::ALL {
            assert!(!relation.eval(&empty, &i, &none()), "{}", relation);
            assert!(!relation.eval(&i, &empty, &none()), "{}", relation);
        }
    }

    #[test]
    fn test_names_round_trip() {
        for relation in IntervalRelation::ALL {
            assert_eq!(relation.name().parse::<IntervalRelation>().unwrap(), relation);
        }
    }
}
