//! Range comparators over localizations.
//!
//! `rangefrom` keeps localizations beginning at or after a threshold
//! point, `rangeto` those ending at or before one. Search UIs combine
//! the two to restrict a query to a timeline window.

use crate::error::Error;
use crate::localization::Localization;
use crate::point::Point;
use std::fmt;
use std::str::FromStr;

/// The localization begins at or after `x`
pub fn rangefrom(loc: &Localization, x: &Point) -> bool {
    match loc.begin() {
        Some(begin) => begin >= *x,
        None => false,
    }
}

/// The localization ends at or before `x`
pub fn rangeto(loc: &Localization, x: &Point) -> bool {
    match loc.end() {
        Some(end) => end <= *x,
        None => false,
    }
}

/// Range predicates addressable by wire name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeRelation {
    /// `rangefrom`
    RangeFrom,
    /// `rangeto`
    RangeTo,
}

impl RangeRelation {
    /// Both predicates, for UI enumeration
    pub const ALL: [RangeRelation; 2] = [RangeRelation::RangeFrom, RangeRelation::RangeTo];

    /// The wire name a filter UI uses for this predicate
    pub fn name(&self) -> &'static str {
        match self {
            RangeRelation::RangeFrom => "rangefrom",
            RangeRelation::RangeTo => "rangeto",
        }
    }

    /// Evaluate this predicate against a threshold point
    pub fn eval(&self, loc: &Localization, x: &Point) -> bool {
        match self {
            RangeRelation::RangeFrom => rangefrom(loc, x),
            RangeRelation::RangeTo => rangeto(loc, x),
        }
    }
}

impl FromStr for RangeRelation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        RangeRelation::ALL
            .iter()
            .find(|relation| relation.name() == s)
            .copied()
            .ok_or_else(|| Error::ValueRange(format!("unknown range relation '{}'", s)))
    }
}

impl fmt::Display for RangeRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
