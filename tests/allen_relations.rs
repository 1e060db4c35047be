//! Cross-module scenarios for the interval relation set.

use annotime::compare::interval::{
    after, before, before_equal, before_greater, before_lower, during, equals, meets, metby,
    overlappedby, overlaps,
};
use annotime::{
    Disjoint, Duration, Interval, IntervalRelation, Localization, Point, RelationOptions, Scalar,
};

fn span(begin: f64, end: f64) -> Localization {
    Localization::from(Interval::new(Point::from(begin), Point::from(end)).unwrap())
}

fn fuzzy_span(begin: f64, radius_b: f64, end: f64, radius_e: f64) -> Localization {
    let b = Point::new(Scalar::Float(begin), Some(Scalar::Float(radius_b))).unwrap();
    let e = Point::new(Scalar::Float(end), Some(Scalar::Float(radius_e))).unwrap();
    Localization::from(Interval::new(b, e).unwrap())
}

fn no_options() -> RelationOptions {
    RelationOptions::new()
}

#[test]
fn separated_crisp_intervals_are_before_and_nothing_else() {
    let a = span(0.0, 2.0);
    let b = span(5.0, 7.0);

    assert!(before(&a, &b, &no_options()));
    assert!(after(&b, &a, &no_options()));
    assert!(!after(&a, &b, &no_options()));
    assert!(!before(&b, &a, &no_options()));

    for relation in [
        IntervalRelation::Meets,
        IntervalRelation::MetBy,
        IntervalRelation::Overlaps,
        IntervalRelation::OverlappedBy,
        IntervalRelation::Starts,
        IntervalRelation::StartedBy,
        IntervalRelation::Finishes,
        IntervalRelation::FinishedBy,
        IntervalRelation::During,
        IntervalRelation::Contains,
        IntervalRelation::Equals,
    ] {
        assert!(!relation.eval(&a, &b, &no_options()), "{}", relation);
        assert!(!relation.eval(&b, &a, &no_options()), "{}", relation);
    }
}

#[test]
fn max_delay_bounds_the_gap() {
    // the gap between [0,2] and [5,7] lasts 3.0
    let a = span(0.0, 2.0);
    let b = span(5.0, 7.0);

    assert!(before(&a, &b, &no_options()));
    let wide = no_options().with_max_delay(Duration::from(4.0));
    assert!(before(&a, &b, &wide));
    let tight = no_options().with_max_delay(Duration::from(2.0));
    assert!(!before(&a, &b, &tight));
    let tighter = no_options().with_max_delay(Duration::from(1.0));
    assert!(!before(&a, &b, &tighter));

    // mirrored for after
    let wide = no_options().with_max_delay(Duration::from(4.0));
    assert!(after(&b, &a, &wide));
    let tight = no_options().with_max_delay(Duration::from(1.0));
    assert!(!after(&b, &a, &tight));
}

#[test]
fn overlap_minimum_absolute_and_percent() {
    // [0,5] overlaps [3,8]; the overlap span lasts 2.0
    let a = span(0.0, 5.0);
    let b = span(3.0, 8.0);

    assert!(overlaps(&a, &b, &no_options()));
    assert!(overlappedby(&b, &a, &no_options()));

    let min_2 = no_options().with_min_overlap(2.0).unwrap();
    assert!(overlaps(&a, &b, &min_2));
    let min_3 = no_options().with_min_overlap(3.0).unwrap();
    assert!(!overlaps(&a, &b, &min_3));

    // 2.0 out of 5.0 is 40 percent of the first interval
    let pct_25 = no_options().with_min_overlap_percent(25.0).unwrap();
    assert!(overlaps(&a, &b, &pct_25));
    let pct_80 = no_options().with_min_overlap_percent(80.0).unwrap();
    assert!(!overlaps(&a, &b, &pct_80));
}

#[test]
fn fuzzy_bounds_make_adjacency_tolerant() {
    // ends at 2.0 +/- 0.1, begins at 2.05 +/- 0.1: meets within tolerance
    let a = fuzzy_span(0.0, 0.0, 2.0, 0.1);
    let b = fuzzy_span(2.05, 0.1, 4.0, 0.0);
    assert!(meets(&a, &b, &no_options()));
    assert!(metby(&b, &a, &no_options()));
    // and therefore not before
    assert!(!before(&a, &b, &no_options()));
}

#[test]
fn tolerant_equality_of_intervals() {
    let a = fuzzy_span(1.0, 0.05, 5.0, 0.05);
    let b = fuzzy_span(1.08, 0.05, 4.95, 0.05);
    assert!(equals(&a, &b, &no_options()));
    assert!(equals(&b, &a, &no_options()));
}

#[test]
fn indu_conjunction_property() {
    let a = span(0.0, 2.0);
    let same = span(5.0, 7.0);
    let longer = span(5.0, 9.0);
    let shorter = span(5.0, 6.0);

    // every *_equal/_greater/_lower implies the base plus the duration test
    assert!(before_equal(&a, &same, &no_options()));
    assert!(before(&a, &same, &no_options()));
    assert!(a.duration() == same.duration());

    assert!(before_lower(&a, &longer, &no_options()));
    assert!(!before_equal(&a, &longer, &no_options()));
    assert!(!before_greater(&a, &longer, &no_options()));

    assert!(before_greater(&a, &shorter, &no_options()));
    assert!(!before_lower(&a, &shorter, &no_options()));
}

#[test]
fn indu_over_the_registry_names() {
    let a = span(0.0, 2.0);
    let b = span(5.0, 7.0);
    let equal: IntervalRelation = "before_equal".parse().unwrap();
    let greater: IntervalRelation = "before_greater".parse().unwrap();
    assert!(equal.eval(&a, &b, &no_options()));
    assert!(!greater.eval(&a, &b, &no_options()));
}

#[test]
fn disjoint_localizations_use_their_outer_bounds() {
    let d = Disjoint::from_intervals(vec![
        Interval::new(Point::from(3.0), Point::from(4.0)).unwrap(),
        Interval::new(Point::from(6.0), Point::from(8.0)).unwrap(),
    ]);
    let d = Localization::from(d);
    let early = span(0.0, 2.0);

    assert!(before(&early, &d, &no_options()));
    assert!(after(&d, &early, &no_options()));
    // nesting compares against the [3,8] outer span
    let inner = span(4.5, 5.5);
    assert!(during(&inner, &d, &no_options()));
}

#[test]
fn points_are_degenerate_intervals() {
    let p = Localization::from(Point::from(2.0));
    let q = Localization::from(Point::from(2.0));
    let i = span(2.0, 4.0);

    assert!(equals(&p, &q, &no_options()));
    assert!(meets(&p, &i, &no_options()));
    assert!(!equals(&p, &i, &no_options()));
}
