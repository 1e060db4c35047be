//! Common error types for annotime.

use crate::localization::LocalizationKind;
use crate::scalar::ScalarKind;
use thiserror::Error;

/// Common result type for annotime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by constructors, mutators and comparator options.
///
/// Each variant maps to one failure class callers are expected to
/// handle: numeric-kind mixing, interval bound ordering, out-of-range
/// values and localization kind mixing inside a `Location`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Two scalars of different numeric kinds were combined
    #[error("numeric kind mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Kind carried by the value that sets the contract
        expected: ScalarKind,
        /// Kind of the offending value
        found: ScalarKind,
    },

    /// An interval's begin/end ordering (radius-adjusted) is violated
    #[error("interval bounds violation: begin {begin} must precede end {end}")]
    BoundsViolation {
        /// Offending begin bound, rendered
        begin: String,
        /// Offending end bound, rendered
        end: String,
    },

    /// A value fell outside its documented range
    #[error("value out of range: {0}")]
    ValueRange(String),

    /// A localization of the wrong kind was appended to a `Location`
    #[error("localization kind mismatch: location holds {expected}, got {found}")]
    KindMismatch {
        /// Kind established by the location's first entry
        expected: LocalizationKind,
        /// Kind of the rejected localization
        found: LocalizationKind,
    },
}
