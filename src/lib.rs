//! # Annotime
//!
//! The temporal-location core of a speech/text annotation toolkit.
//!
//! This library provides the data model that says *when* an annotation
//! occurs on a timeline (fuzzy points, intervals and disjoint spans,
//! with scored alternatives per annotation) and the algebra used to
//! compare and filter such occurrences: Allen's thirteen interval
//! relations, their INDU duration refinements, and generic
//! duration/range predicates.
//!
//! Equality is tolerance-based throughout: two boundaries are the same
//! when their midpoints sit within the sum of their uncertainty radii,
//! and every ordering decision derives from that equality. File-format
//! readers, search UIs and alignment tools build on this surface; none
//! of their concerns (parsing, rendering, audio) live here.

pub mod compare;
pub mod disjoint;
pub mod duration;
pub mod error;
pub mod interval;
pub mod localization;
pub mod location;
pub mod point;
pub mod scalar;

// Re-export main types for convenience
pub use compare::{
    DurationRelation, IntervalRelation, LocalizationRelation, MatchLogic, OverlapMin,
    RangeRelation, RelationOptions,
};
pub use disjoint::Disjoint;
pub use duration::Duration;
pub use error::{Error, Result};
pub use interval::Interval;
pub use localization::{Localization, LocalizationKind};
pub use location::{DurationPredicate, Location, LocalizationPredicate};
pub use point::Point;
pub use scalar::{Scalar, ScalarKind};
