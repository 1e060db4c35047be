//! # Duration
//!
//! Elapsed time with an explicit vagueness margin.
//!
//! Two durations are equal when their values sit within the sum of
//! both margins; ordering is derived from that equality, so values
//! within tolerance of each other are neither `<` nor `>`. This is the
//! comparison primitive every higher layer (intervals, the INDU
//! relations, duration filters) leans on.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign};
use tracing::warn;

/// A non-negative elapsed time plus a non-negative vagueness margin
///
/// Negative inputs are corrected to 0 and reported through a warning;
/// historically malformed annotation files carry them and rejecting
/// outright would make such files unreadable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Duration {
    value: f64,
    margin: f64,
}

impl Duration {
    /// Create a duration, clamping negative inputs to 0
    pub fn new(value: f64, margin: f64) -> Self {
        Self {
            value: clamp_non_negative(value, "duration value"),
            margin: clamp_non_negative(margin, "duration margin"),
        }
    }

    /// The elapsed time
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The vagueness margin
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Replace the elapsed time, clamping negatives to 0
    pub fn set_value(&mut self, value: f64) {
        self.value = clamp_non_negative(value, "duration value");
    }

    /// Replace the margin, clamping negatives to 0
    pub fn set_margin(&mut self, margin: f64) {
        self.margin = clamp_non_negative(margin, "duration margin");
    }
}

fn clamp_non_negative(value: f64, what: &str) -> f64 {
    if value < 0.0 {
        warn!("negative {} {} corrected to 0", what, value);
        0.0
    } else {
        value
    }
}

impl From<f64> for Duration {
    /// An exact duration: the given value with margin 0
    fn from(value: f64) -> Self {
        Duration::new(value, 0.0)
    }
}

/// Component-wise sum, used when accumulating over disjoint intervals
impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration::new(self.value + rhs.value, self.margin + rhs.margin)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

// Tolerant equality: values within the sum of both margins compare
// equal. Not transitive, hence no Eq/Hash.
impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        (self.value - other.value).abs() <= self.margin + other.margin
    }
}

/// Against a bare number only this duration's own margin applies
impl PartialEq<f64> for Duration {
    fn eq(&self, other: &f64) -> bool {
        (self.value - other).abs() <= self.margin
    }
}

// Ordering is gated on inequality: tolerantly equal values are Equal,
// everything else orders by raw value.
impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.value.partial_cmp(&other.value)
        }
    }
}

impl PartialOrd<f64> for Duration {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.value.partial_cmp(other)
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.margin == 0.0 {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{}~{}", self.value, self.margin)
        }
    }
}
