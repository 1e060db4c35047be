//! # Scalar
//!
//! Numeric kind shared by midpoints, radii and shift delays.
//!
//! Annotation timelines come in two flavours: rank-based (integer
//! sample or token indices) and time-based (float seconds). A `Scalar`
//! carries either, remembers which, and refuses to silently mix the
//! two: kind mixing is how mis-synchronized annotation files are
//! usually born.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Tag identifying the numeric kind of a [`Scalar`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    /// Integer timeline (ranks, sample indices)
    Int,
    /// Float timeline (seconds)
    Float,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Int => write!(f, "int"),
            ScalarKind::Float => write!(f, "float"),
        }
    }
}

/// An int-or-float timeline value
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Scalar {
    /// Integer value
    Int(i64),
    /// Float value
    Float(f64),
}

impl Scalar {
    /// The numeric kind of this value
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Int(_) => ScalarKind::Int,
            Scalar::Float(_) => ScalarKind::Float,
        }
    }

    /// View as f64, exact for integers up to 2^53
    pub fn as_f64(&self) -> f64 {
        match self {
            Scalar::Int(v) => *v as f64,
            Scalar::Float(v) => *v,
        }
    }

    /// True when `other` carries the same numeric kind
    pub fn same_kind(&self, other: &Scalar) -> bool {
        self.kind() == other.kind()
    }

    /// True for values below zero
    pub fn is_negative(&self) -> bool {
        match self {
            Scalar::Int(v) => *v < 0,
            Scalar::Float(v) => *v < 0.0,
        }
    }

    /// Absolute difference on the f64 view
    pub fn abs_diff(&self, other: &Scalar) -> f64 {
        (self.as_f64() - other.as_f64()).abs()
    }

    /// Kind-checked addition, used by timeline shifts
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] when the kinds differ.
    pub fn checked_add(&self, other: &Scalar) -> Result<Scalar> {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => Ok(Scalar::Int(a + b)),
            (Scalar::Float(a), Scalar::Float(b)) => Ok(Scalar::Float(a + b)),
            _ => Err(Error::TypeMismatch {
                expected: self.kind(),
                found: other.kind(),
            }),
        }
    }

}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

// Raw value comparison on the f64 view; kind is deliberately ignored
// here so an int timeline can be measured against a float threshold.
// Tolerant (radius-aware) comparison lives on Point, not here.
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.as_f64() == other.as_f64()
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_f64().partial_cmp(&other.as_f64())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Scalar::from(3i64).kind(), ScalarKind::Int);
        assert_eq!(Scalar::from(3.0).kind(), ScalarKind::Float);
    }

    #[test]
    fn test_checked_add_same_kind() {
        let sum = Scalar::Int(2).checked_add(&Scalar::Int(3)).unwrap();
        assert_eq!(sum, Scalar::Int(5));

        let sum = Scalar::Float(0.5).checked_add(&Scalar::Float(0.25)).unwrap();
        assert_eq!(sum, Scalar::Float(0.75));
    }

    #[test]
    fn test_checked_add_kind_mismatch() {
        let err = Scalar::Int(2).checked_add(&Scalar::Float(3.0)).unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                expected: ScalarKind::Int,
                found: ScalarKind::Float,
            }
        );
    }

    #[test]
    fn test_raw_comparison_crosses_kinds() {
        assert_eq!(Scalar::Int(1), Scalar::Float(1.0));
        assert!(Scalar::Int(1) < Scalar::Float(1.5));
    }

    #[test]
    fn test_is_negative() {
        assert!(Scalar::Int(-1).is_negative());
        assert!(Scalar::Float(-0.001).is_negative());
        assert!(!Scalar::Int(0).is_negative());
    }
}
