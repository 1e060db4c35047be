//! # Location
//!
//! The scored alternative localizations of one annotation.
//!
//! An aligner may propose several time spans for the same label; a
//! `Location` keeps them all, each with a confidence score, and every
//! entry must be of the same localization kind. Queries either pick
//! the best-scored alternative or ask whether any alternative passes a
//! predicate set.

use crate::compare::{DurationRelation, LocalizationRelation, MatchLogic, RelationOptions};
use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::localization::{Localization, LocalizationKind};
use crate::scalar::Scalar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One duration criterion of a filter: a predicate, the value to
/// compare against and an optional negation
#[derive(Debug, Clone)]
pub struct DurationPredicate {
    /// The comparison to run
    pub relation: DurationRelation,
    /// Right-hand side of the comparison
    pub value: Duration,
    /// Invert the outcome
    pub negate: bool,
}

/// One localization criterion of a filter: a relation, the
/// localization to compare against, its options and an optional
/// negation
#[derive(Debug, Clone)]
pub struct LocalizationPredicate {
    /// The relation to run
    pub relation: LocalizationRelation,
    /// Right-hand side of the relation
    pub value: Localization,
    /// Refinements forwarded to the relation
    pub options: RelationOptions,
    /// Invert the outcome
    pub negate: bool,
}

/// Scored alternative localizations for a single annotation
///
/// The first entry fixes the localization kind for the container's
/// lifetime; appending a different kind is rejected. Emptying the
/// container (via [`Location::remove`]) lets the next append choose a
/// kind again.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    localizations: Vec<(Localization, Option<f64>)>,
}

impl Location {
    /// A location holding one scored localization
    pub fn new(localization: Localization, score: Option<f64>) -> Self {
        Self {
            localizations: vec![(localization, score)],
        }
    }

    /// Build from alternatives with uniform `1/n` scores
    ///
    /// # Errors
    /// Returns [`Error::ValueRange`] for an empty list and
    /// [`Error::KindMismatch`] when the alternatives mix kinds.
    pub fn from_alternatives(localizations: Vec<Localization>) -> Result<Self> {
        if localizations.is_empty() {
            return Err(Error::ValueRange(
                "a location needs at least one localization".to_string(),
            ));
        }
        let score = 1.0 / localizations.len() as f64;
        let mut location = Self::default();
        for localization in localizations {
            location.append(localization, Some(score))?;
        }
        Ok(location)
    }

    /// Build from alternatives with explicit scores
    ///
    /// # Errors
    /// Returns [`Error::ValueRange`] when the lists differ in length,
    /// plus the [`Location::from_alternatives`] failure cases.
    pub fn with_scores(localizations: Vec<Localization>, scores: Vec<f64>) -> Result<Self> {
        if localizations.is_empty() {
            return Err(Error::ValueRange(
                "a location needs at least one localization".to_string(),
            ));
        }
        if localizations.len() != scores.len() {
            return Err(Error::ValueRange(format!(
                "{} localizations but {} scores",
                localizations.len(),
                scores.len()
            )));
        }
        let mut location = Self::default();
        for (localization, score) in localizations.into_iter().zip(scores) {
            location.append(localization, Some(score))?;
        }
        Ok(location)
    }

    /// The kind shared by every entry, `None` while empty
    pub fn kind(&self) -> Option<LocalizationKind> {
        self.localizations.first().map(|(loc, _)| loc.kind())
    }

    /// True when the entries are points
    pub fn is_point(&self) -> bool {
        self.kind() == Some(LocalizationKind::Point)
    }

    /// True when the entries are intervals
    pub fn is_interval(&self) -> bool {
        self.kind() == Some(LocalizationKind::Interval)
    }

    /// True when the entries are disjoint spans
    pub fn is_disjoint(&self) -> bool {
        self.kind() == Some(LocalizationKind::Disjoint)
    }

    /// Number of alternatives
    pub fn len(&self) -> usize {
        self.localizations.len()
    }

    /// True when no alternative is held
    pub fn is_empty(&self) -> bool {
        self.localizations.is_empty()
    }

    /// Iterate over `(localization, score)` pairs
    pub fn iter(&self) -> std::slice::Iter<'_, (Localization, Option<f64>)> {
        self.localizations.iter()
    }

    /// Add an alternative; duplicates (by tolerant value equality) are
    /// silently skipped
    ///
    /// # Errors
    /// Returns [`Error::KindMismatch`] when the localization's kind
    /// differs from the kind established by the first entry.
    pub fn append(&mut self, localization: Localization, score: Option<f64>) -> Result<()> {
        if let Some(kind) = self.kind() {
            if localization.kind() != kind {
                return Err(Error::KindMismatch {
                    expected: kind,
                    found: localization.kind(),
                });
            }
        }
        if self.localizations.iter().any(|(loc, _)| *loc == localization) {
            return Ok(());
        }
        self.localizations.push((localization, score));
        Ok(())
    }

    /// Remove every alternative equal to `localization`
    pub fn remove(&mut self, localization: &Localization) {
        self.localizations.retain(|(loc, _)| loc != localization);
    }

    /// The score of the first alternative equal to `localization`,
    /// `None` when absent or unscored
    pub fn get_score(&self, localization: &Localization) -> Option<f64> {
        self.localizations
            .iter()
            .find(|(loc, _)| loc == localization)
            .and_then(|(_, score)| *score)
    }

    /// Re-score the first alternative equal to `localization`; absent
    /// localizations are a no-op
    pub fn set_score(&mut self, localization: &Localization, score: f64) {
        if let Some(entry) = self
            .localizations
            .iter_mut()
            .find(|(loc, _)| loc == localization)
        {
            entry.1 = Some(score);
        }
    }

    /// A copy of the best-scored alternative
    ///
    /// Scanned in reverse with replace-on-equal, so tied scores
    /// resolve to the earliest-inserted entry. Unscored entries never
    /// beat scored ones. `None` only when the location is empty.
    pub fn get_best(&self) -> Option<Localization> {
        if self.localizations.len() == 1 {
            return self.localizations.first().map(|(loc, _)| loc.clone());
        }
        let mut best: Option<&(Localization, Option<f64>)> = None;
        for entry in self.localizations.iter().rev() {
            let replace = match best {
                None => true,
                Some((_, best_score)) => score_outranks(entry.1, *best_score),
            };
            if replace {
                best = Some(entry);
            }
        }
        best.map(|(loc, _)| loc.clone())
    }

    /// Move every alternative along the timeline
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] when the delay kind differs
    /// from an alternative's timeline kind.
    pub fn shift(&mut self, delay: Scalar) -> Result<()> {
        for (localization, _) in &mut self.localizations {
            localization.shift(delay)?;
        }
        Ok(())
    }

    /// True when any alternative's duration passes the combined
    /// predicate set; short-circuits on the first match
    pub fn match_duration(&self, predicates: &[DurationPredicate], logic: MatchLogic) -> bool {
        self.localizations.iter().any(|(localization, _)| {
            let duration = localization.duration();
            combine(
                predicates
                    .iter()
                    .map(|p| p.relation.eval(&duration, &p.value) != p.negate),
                logic,
            )
        })
    }

    /// True when any alternative passes the combined relation set;
    /// short-circuits on the first match
    pub fn match_localization(
        &self,
        predicates: &[LocalizationPredicate],
        logic: MatchLogic,
    ) -> bool {
        self.localizations.iter().any(|(localization, _)| {
            combine(
                predicates
                    .iter()
                    .map(|p| p.relation.eval(localization, &p.value, &p.options) != p.negate),
                logic,
            )
        })
    }
}

// Reverse-scan replacement rule: replace on >=, never let an unscored
// entry displace a scored one.
fn score_outranks(candidate: Option<f64>, best: Option<f64>) -> bool {
    match (candidate, best) {
        (Some(c), Some(b)) => c >= b,
        (Some(_), None) => true,
        (None, None) => true,
        (None, Some(_)) => false,
    }
}

fn combine<I>(mut outcomes: I, logic: MatchLogic) -> bool
where
    I: Iterator<Item = bool>,
{
    match logic {
        MatchLogic::All => outcomes.all(|b| b),
        MatchLogic::Any => outcomes.any(|b| b),
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, (localization, score)) in self.localizations.iter().enumerate() {
            if n > 0 {
                write!(f, " ")?;
            }
            match score {
                Some(s) => write!(f, "{}({})", localization, s)?,
                None => write!(f, "{}", localization)?,
            }
        }
        Ok(())
    }
}
