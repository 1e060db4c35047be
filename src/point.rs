//! # Point
//!
//! A fuzzy timeline position: a midpoint plus an optional symmetric
//! uncertainty radius.
//!
//! Forced alignments and hand-placed boundaries rarely agree to the
//! sample; the radius encodes how far a boundary may legitimately sit
//! from its nominal value. Two points are equal when their midpoints
//! fall within the sum of both radii, and every ordering decision is
//! derived from that equality.

use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::scalar::{Scalar, ScalarKind};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tracing::warn;

/// A fuzzy scalar position on an annotation timeline
///
/// The radius, when present, must carry the same numeric kind as the
/// midpoint and may not exceed it (a boundary cannot be vaguer than
/// its distance to the timeline origin). Negative midpoints are
/// accepted with a warning; mis-synchronized legacy recordings
/// produce them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    midpoint: Scalar,
    radius: Option<Scalar>,
}

impl Point {
    /// Create a point with an optional uncertainty radius
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] when the radius kind differs
    /// from the midpoint kind.
    pub fn new(midpoint: Scalar, radius: Option<Scalar>) -> Result<Self> {
        if midpoint.is_negative() {
            warn!("negative point midpoint {}", midpoint);
        }
        let radius = match radius {
            Some(r) => Some(checked_radius(&midpoint, r)?),
            None => None,
        };
        Ok(Self { midpoint, radius })
    }

    /// An exact point: no radius, degenerate duration
    pub fn exact(midpoint: Scalar) -> Self {
        if midpoint.is_negative() {
            warn!("negative point midpoint {}", midpoint);
        }
        Self {
            midpoint,
            radius: None,
        }
    }

    /// The nominal position
    pub fn midpoint(&self) -> Scalar {
        self.midpoint
    }

    /// The uncertainty radius, `None` for exact points
    pub fn radius(&self) -> Option<Scalar> {
        self.radius
    }

    /// The numeric kind of this point's timeline
    pub fn kind(&self) -> ScalarKind {
        self.midpoint.kind()
    }

    /// Replace the midpoint, keeping the radius
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] when the new midpoint's kind
    /// differs from the radius kind.
    pub fn set_midpoint(&mut self, midpoint: Scalar) -> Result<()> {
        if let Some(r) = self.radius {
            if !midpoint.same_kind(&r) {
                return Err(Error::TypeMismatch {
                    expected: r.kind(),
                    found: midpoint.kind(),
                });
            }
        }
        if midpoint.is_negative() {
            warn!("negative point midpoint {}", midpoint);
        }
        self.midpoint = midpoint;
        if let Some(r) = self.radius {
            self.radius = Some(checked_radius(&self.midpoint, r)?);
        }
        Ok(())
    }

    /// Replace the radius; `None` makes the point exact
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] when the radius kind differs
    /// from the midpoint kind.
    pub fn set_radius(&mut self, radius: Option<Scalar>) -> Result<()> {
        self.radius = match radius {
            Some(r) => Some(checked_radius(&self.midpoint, r)?),
            None => None,
        };
        Ok(())
    }

    /// Move the point along its timeline
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] when the delay kind differs
    /// from the midpoint kind.
    pub fn shift(&mut self, delay: Scalar) -> Result<()> {
        self.midpoint = self.midpoint.checked_add(&delay)?;
        if self.midpoint.is_negative() {
            warn!("negative point midpoint {} after shift", self.midpoint);
        }
        Ok(())
    }

    /// The span a point occupies: no extent, vagueness of twice the radius
    pub fn duration(&self) -> Duration {
        match self.radius {
            Some(r) => Duration::new(0.0, 2.0 * r.as_f64()),
            None => Duration::new(0.0, 0.0),
        }
    }

    /// The tolerance this point contributes to an equality test
    pub(crate) fn tolerance(&self) -> f64 {
        self.radius.map_or(0.0, |r| r.as_f64())
    }
}

// Radius kind must match the midpoint kind; a radius larger than the
// midpoint is clamped down to it.
fn checked_radius(midpoint: &Scalar, radius: Scalar) -> Result<Scalar> {
    if !midpoint.same_kind(&radius) {
        return Err(Error::TypeMismatch {
            expected: midpoint.kind(),
            found: radius.kind(),
        });
    }
    if radius.as_f64() > midpoint.as_f64() {
        warn!("radius {} exceeds midpoint {}, clamped", radius, midpoint);
        Ok(*midpoint)
    } else {
        Ok(radius)
    }
}

impl From<i64> for Point {
    fn from(value: i64) -> Self {
        Point::exact(Scalar::Int(value))
    }
}

impl From<f64> for Point {
    fn from(value: f64) -> Self {
        Point::exact(Scalar::Float(value))
    }
}

// Tolerant equality over the sum of both radii. Not transitive, so no
// Eq/Hash.
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.midpoint.abs_diff(&other.midpoint) <= self.tolerance() + other.tolerance()
    }
}

/// Against a bare scalar only this point's own radius applies
impl PartialEq<Scalar> for Point {
    fn eq(&self, other: &Scalar) -> bool {
        self.midpoint.abs_diff(other) <= self.tolerance()
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.midpoint.partial_cmp(&other.midpoint)
        }
    }
}

impl PartialOrd<Scalar> for Point {
    fn partial_cmp(&self, other: &Scalar) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.midpoint.partial_cmp(other)
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.radius {
            Some(r) => write!(f, "{}~{}", self.midpoint, r),
            None => write!(f, "{}", self.midpoint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fuzzy(midpoint: f64, radius: f64) -> Point {
        Point::new(Scalar::Float(midpoint), Some(Scalar::Float(radius))).unwrap()
    }

    #[test]
    fn test_radius_kind_must_match_midpoint() {
        let err = Point::new(Scalar::Float(1.0), Some(Scalar::Int(1))).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_radius_clamped_to_midpoint() {
        let p = Point::new(Scalar::Float(0.5), Some(Scalar::Float(2.0))).unwrap();
        assert_eq!(p.radius(), Some(Scalar::Float(0.5)));
    }

    #[test]
    fn test_tolerant_equality() {
        // 1.000 +/- 0.0005 against nearby midpoints
        assert_eq!(fuzzy(1.000, 0.0005), fuzzy(1.0004, 0.0005));
        assert_ne!(fuzzy(1.000, 0.0005), fuzzy(1.0012, 0.0005));
    }

    #[test]
    fn test_equality_is_reflexive_and_symmetric() {
        let p = fuzzy(2.0, 0.01);
        let q = fuzzy(2.015, 0.01);
        assert_eq!(p, p);
        assert_eq!(p == q, q == p);
    }

    #[test]
    fn test_equality_against_scalar_uses_own_radius() {
        let p = fuzzy(1.0, 0.05);
        assert!(p == Scalar::Float(1.04));
        assert!(p != Scalar::Float(1.06));

        let exact = Point::from(1.0);
        assert!(exact == Scalar::Float(1.0));
        assert!(exact != Scalar::Float(1.0000001));
    }

    #[test]
    fn test_ordering_gated_on_inequality() {
        let p = fuzzy(1.0, 0.05);
        let q = fuzzy(1.04, 0.05);
        assert!(!(p < q));
        assert!(!(p > q));

        let r = fuzzy(2.0, 0.05);
        assert!(p < r);
        assert!(r > p);
    }

    #[test]
    fn test_trichotomy() {
        let cases = [
            (fuzzy(1.0, 0.0), fuzzy(2.0, 0.0)),
            (fuzzy(1.0, 0.5), fuzzy(1.8, 0.5)),
            (fuzzy(3.0, 0.1), fuzzy(1.0, 0.1)),
            (Point::from(5i64), Point::from(5i64)),
        ];
        for (p, q) in cases {
            let flags = [p < q, p == q, p > q];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{} vs {}", p, q);
        }
    }

    #[test]
    fn test_duration() {
        assert_eq!(fuzzy(1.0, 0.005).duration(), Duration::new(0.0, 0.01));
        assert_eq!(Point::from(1.0).duration(), Duration::new(0.0, 0.0));
    }

    #[test]
    fn test_shift() {
        let mut p = fuzzy(1.0, 0.005);
        p.shift(Scalar::Float(0.5)).unwrap();
        assert_eq!(p.midpoint(), Scalar::Float(1.5));
        assert_eq!(p.radius(), Some(Scalar::Float(0.005)));

        let err = p.shift(Scalar::Int(1)).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_negative_midpoint_is_tolerated() {
        // legacy data: warn, do not reject
        let p = Point::exact(Scalar::Float(-0.2));
        assert_eq!(p.midpoint(), Scalar::Float(-0.2));
    }

    #[test]
    fn test_copies_are_independent() {
        let p = fuzzy(1.0, 0.005);
        let mut q = p;
        q.shift(Scalar::Float(1.0)).unwrap();
        assert_eq!(p.midpoint(), Scalar::Float(1.0));
        assert_eq!(q.midpoint(), Scalar::Float(2.0));
    }
}
