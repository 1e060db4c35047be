//! Scalar comparators over [`Duration`]s.
//!
//! All six predicates go through the tolerant operators, so `gt`/`lt`
//! only hold once the two durations stop being tolerantly equal. A
//! bare number compares as `Duration::from(x)`, i.e. with margin 0.

use crate::duration::Duration;
use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// `d1 == d2` within the summed margins
pub fn eq(d1: &Duration, d2: &Duration) -> bool {
    d1 == d2
}

/// Negation of [`eq`]
pub fn ne(d1: &Duration, d2: &Duration) -> bool {
    d1 != d2
}

/// `d1` lasts longer, beyond tolerance
pub fn gt(d1: &Duration, d2: &Duration) -> bool {
    d1 > d2
}

/// `d1` lasts shorter, beyond tolerance
pub fn lt(d1: &Duration, d2: &Duration) -> bool {
    d1 < d2
}

/// [`gt`] or [`eq`]
pub fn ge(d1: &Duration, d2: &Duration) -> bool {
    d1 >= d2
}

/// [`lt`] or [`eq`]
pub fn le(d1: &Duration, d2: &Duration) -> bool {
    d1 <= d2
}

/// Duration predicates addressable by wire name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationRelation {
    /// `eq`
    Eq,
    /// `ne`
    Ne,
    /// `gt`
    Gt,
    /// `lt`
    Lt,
    /// `ge`
    Ge,
    /// `le`
    Le,
}

impl DurationRelation {
    /// Every predicate, for UI enumeration
    pub const ALL: [DurationRelation; 6] = [
        DurationRelation::Eq,
        DurationRelation::Ne,
        DurationRelation::Gt,
        DurationRelation::Lt,
        DurationRelation::Ge,
        DurationRelation::Le,
    ];

    /// The wire name a filter UI uses for this predicate
    pub fn name(&self) -> &'static str {
        match self {
            DurationRelation::Eq => "eq",
            DurationRelation::Ne => "ne",
            DurationRelation::Gt => "gt",
            DurationRelation::Lt => "lt",
            DurationRelation::Ge => "ge",
            DurationRelation::Le => "le",
        }
    }

    /// Evaluate this predicate between two durations
    pub fn eval(&self, d1: &Duration, d2: &Duration) -> bool {
        match self {
            DurationRelation::Eq => eq(d1, d2),
            DurationRelation::Ne => ne(d1, d2),
            DurationRelation::Gt => gt(d1, d2),
            DurationRelation::Lt => lt(d1, d2),
            DurationRelation::Ge => ge(d1, d2),
            DurationRelation::Le => le(d1, d2),
        }
    }
}

impl FromStr for DurationRelation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        DurationRelation::ALL
            .iter()
            .find(|relation| relation.name() == s)
            .copied()
            .ok_or_else(|| Error::ValueRange(format!("unknown duration relation '{}'", s)))
    }
}

impl fmt::Display for DurationRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
