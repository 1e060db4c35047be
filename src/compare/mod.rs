//! # Comparators
//!
//! Pure, stateless predicates over localizations and durations.
//!
//! Every relation works on a uniform `(begin, end)` extraction: a
//! point is a degenerate interval whose begin and end coincide, while
//! intervals and disjoint spans use their natural bounds. Relations
//! are addressable by their wire name (`"before"`, `"overlaps_lower"`,
//! `"rangefrom"`, ...) so a filter UI can assemble predicate lists
//! from strings.

pub mod duration;
pub mod interval;
pub mod localization;

pub use self::duration::DurationRelation;
pub use self::interval::IntervalRelation;
pub use self::localization::RangeRelation;

use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::localization::Localization;
use crate::point::Point;
use std::fmt;
use std::str::FromStr;

/// Minimum-overlap requirement for `overlaps`/`overlappedby`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlapMin {
    /// The overlap span must last at least this long
    Absolute(f64),
    /// The overlap span must cover at least this percentage of the
    /// first localization's duration
    Percent(f64),
}

/// Optional refinements shared by the interval relations
///
/// `max_delay` bounds the gap accepted by `before`/`after`;
/// `overlap_min` sets the smallest overlap accepted by
/// `overlaps`/`overlappedby`. INDU refinements reuse whatever options
/// their base relation was given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationOptions {
    max_delay: Option<Duration>,
    overlap_min: Option<OverlapMin>,
}

impl RelationOptions {
    /// No refinements: the bare Allen relations
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the gap of `before`/`after` to stay below `max_delay`
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = Some(max_delay);
        self
    }

    /// Require an overlap of at least `value` (absolute duration)
    ///
    /// # Errors
    /// Returns [`Error::ValueRange`] for a negative value.
    pub fn with_min_overlap(mut self, value: f64) -> Result<Self> {
        if value < 0.0 {
            return Err(Error::ValueRange(format!(
                "minimum overlap must be non-negative, got {}",
                value
            )));
        }
        self.overlap_min = Some(OverlapMin::Absolute(value));
        Ok(self)
    }

    /// Require an overlap of at least `percent` percent of the first
    /// localization's duration
    ///
    /// # Errors
    /// Returns [`Error::ValueRange`] when `percent` is outside
    /// `(0, 100]`.
    pub fn with_min_overlap_percent(mut self, percent: f64) -> Result<Self> {
        if percent <= 0.0 || percent > 100.0 {
            return Err(Error::ValueRange(format!(
                "overlap percentage must be in (0, 100], got {}",
                percent
            )));
        }
        self.overlap_min = Some(OverlapMin::Percent(percent));
        Ok(self)
    }

    pub(crate) fn max_delay(&self) -> Option<&Duration> {
        self.max_delay.as_ref()
    }

    pub(crate) fn overlap_min(&self) -> Option<&OverlapMin> {
        self.overlap_min.as_ref()
    }
}

/// How a predicate list combines: all must hold, or any may
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLogic {
    /// Conjunction (`"and"`)
    All,
    /// Disjunction (`"or"`)
    Any,
}

impl FromStr for MatchLogic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "and" => Ok(MatchLogic::All),
            "or" => Ok(MatchLogic::Any),
            other => Err(Error::ValueRange(format!(
                "unknown match logic '{}', expected 'and' or 'or'",
                other
            ))),
        }
    }
}

/// Any relation a filter can name: an interval relation or a range
/// threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalizationRelation {
    /// One of the Allen/INDU interval relations
    Interval(IntervalRelation),
    /// A `rangefrom`/`rangeto` bound threshold
    Range(RangeRelation),
}

impl LocalizationRelation {
    /// Evaluate against another localization
    ///
    /// Range relations read their threshold point from `other`'s
    /// begin (`rangefrom`) or end (`rangeto`).
    pub fn eval(
        &self,
        loc: &Localization,
        other: &Localization,
        options: &RelationOptions,
    ) -> bool {
        match self {
            LocalizationRelation::Interval(relation) => relation.eval(loc, other, options),
            LocalizationRelation::Range(relation) => {
                let threshold = match relation {
                    RangeRelation::RangeFrom => other.begin(),
                    RangeRelation::RangeTo => other.end(),
                };
                match threshold {
                    Some(point) => relation.eval(loc, &point),
                    None => false,
                }
            }
        }
    }
}

impl FromStr for LocalizationRelation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(relation) = IntervalRelation::from_str(s) {
            return Ok(LocalizationRelation::Interval(relation));
        }
        if let Ok(relation) = RangeRelation::from_str(s) {
            return Ok(LocalizationRelation::Range(relation));
        }
        Err(Error::ValueRange(format!("unknown relation '{}'", s)))
    }
}

impl fmt::Display for LocalizationRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalizationRelation::Interval(relation) => write!(f, "{}", relation),
            LocalizationRelation::Range(relation) => write!(f, "{}", relation),
        }
    }
}

// Uniform bound extraction for the relation functions. A localization
// without bounds (empty disjoint) satisfies no relation.
pub(crate) fn bounds2(
    i1: &Localization,
    i2: &Localization,
) -> Option<((Point, Point), (Point, Point))> {
    match (i1.bounds(), i2.bounds()) {
        (Some(a), Some(b)) => Some((a, b)),
        _ => None,
    }
}

// Duration of the span from `a` to `b`, vagueness of both radii summed.
// Computed directly so cross-kind bounds never need an Interval.
pub(crate) fn span_duration(a: &Point, b: &Point) -> Duration {
    Duration::new(
        b.midpoint().as_f64() - a.midpoint().as_f64(),
        a.tolerance() + b.tolerance(),
    )
}
