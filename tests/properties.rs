//! Algebraic laws checked over generated composite sets and events.

use proptest::prelude::*;
use sigma_events::{
    BorderType, CompositeSet, Event, Interval, Set, SetAlgebra, SimpleEvent, SimpleInterval,
    Variable,
};

const DOMAIN_SIZE: usize = 4;

fn endpoint() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(f64::NEG_INFINITY),
        1 => Just(f64::INFINITY),
        8 => (-10i32..=10).prop_map(f64::from),
    ]
}

fn border() -> impl Strategy<Value = BorderType> {
    prop_oneof![Just(BorderType::Closed), Just(BorderType::Open)]
}

fn simple_interval() -> impl Strategy<Value = Option<SimpleInterval>> {
    (endpoint(), endpoint(), border(), border())
        .prop_map(|(a, b, left, right)| SimpleInterval::new(a.min(b), a.max(b), left, right))
}

fn interval() -> impl Strategy<Value = Interval> {
    prop::collection::vec(simple_interval(), 0..5)
        .prop_map(|members| members.into_iter().flatten().collect::<Interval>())
}

fn set() -> impl Strategy<Value = Set> {
    prop::collection::vec(0..DOMAIN_SIZE, 0..6)
        .prop_map(|indices| Set::new(DOMAIN_SIZE, indices).unwrap())
}

/// Probe points on a half-integer grid, so both endpoints and gaps are hit.
fn point() -> impl Strategy<Value = f64> {
    (-24i32..=24).prop_map(|n| f64::from(n) / 2.0)
}

fn x() -> Variable {
    Variable::continuous("x")
}

fn y() -> Variable {
    Variable::symbolic("y", DOMAIN_SIZE)
}

fn simple_event() -> impl Strategy<Value = SimpleEvent> {
    (prop::option::of(interval()), prop::option::of(set())).prop_map(|(xs, ys)| {
        let mut event = SimpleEvent::universe();
        if let Some(xs) = xs {
            event = event.with(x(), xs).unwrap();
        }
        if let Some(ys) = ys {
            event = event.with(y(), ys).unwrap();
        }
        event
    })
}

fn event() -> impl Strategy<Value = Event> {
    prop::collection::vec(simple_event(), 0..3).prop_map(Event::from)
}

proptest! {
    /// Members are strictly increasing and never mergeable.
    #[test]
    fn interval_is_canonical(a in interval(), b in interval()) {
        for candidate in [a.union(&b), a.intersection(&b), a.complement()] {
            for pair in candidate.windows(2) {
                let (prev, next) = (pair[0], pair[1]);
                prop_assert!(prev < next);
                let gap = prev.upper().value() < next.lower().value();
                let open_touch = prev.upper().value() == next.lower().value()
                    && prev.upper().border().is_open()
                    && next.lower().border().is_open();
                prop_assert!(gap || open_touch, "mergeable neighbours in {}", candidate);
            }
        }
    }

    #[test]
    fn interval_complement_is_involutive(a in interval()) {
        prop_assert_eq!(a.complement().complement(), a);
    }

    #[test]
    fn interval_complement_partitions_reals(a in interval()) {
        prop_assert!(a.intersection(&a.complement()).is_empty());
        prop_assert!(a.union(&a.complement()).is_reals());
    }

    #[test]
    fn interval_operations_commute(a in interval(), b in interval()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    #[test]
    fn interval_operations_associate(a in interval(), b in interval(), c in interval()) {
        prop_assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
        prop_assert_eq!(
            a.intersection(&b).intersection(&c),
            a.intersection(&b.intersection(&c))
        );
    }

    #[test]
    fn interval_operations_are_idempotent(a in interval()) {
        prop_assert_eq!(a.intersection(&a), a.clone());
        prop_assert_eq!(a.union(&a), a);
    }

    /// Set operations agree with pointwise membership.
    #[test]
    fn interval_membership_is_pointwise(a in interval(), b in interval(), p in point()) {
        prop_assert_eq!(a.union(&b).contains(p), a.contains(p) || b.contains(p));
        prop_assert_eq!(a.intersection(&b).contains(p), a.contains(p) && b.contains(p));
        prop_assert_eq!(a.complement().contains(p), !a.contains(p));
        prop_assert_eq!(a.difference(&b).contains(p), a.contains(p) && !b.contains(p));
    }

    #[test]
    fn set_laws(a in set(), b in set()) {
        prop_assert_eq!(a.complement().complement(), a.clone());
        prop_assert!(a.intersection(&a.complement()).unwrap().is_empty());
        prop_assert!(a.union(&a.complement()).unwrap().is_full());
        prop_assert_eq!(a.union(&b).unwrap(), b.union(&a).unwrap());
        prop_assert_eq!(a.intersection(&b).unwrap(), b.intersection(&a).unwrap());
        prop_assert_eq!(a.intersection(&a).unwrap(), a);
    }

    #[test]
    fn set_operations_associate(a in set(), b in set(), c in set()) {
        prop_assert_eq!(
            a.union(&b).unwrap().union(&c).unwrap(),
            a.union(&b.union(&c).unwrap()).unwrap()
        );
        prop_assert_eq!(
            a.intersection(&b).unwrap().intersection(&c).unwrap(),
            a.intersection(&b.intersection(&c).unwrap()).unwrap()
        );
    }

    #[test]
    fn composite_matches_concrete(a in interval(), b in interval()) {
        let (ca, cb) = (CompositeSet::from(a.clone()), CompositeSet::from(b.clone()));
        prop_assert_eq!(ca.union(&cb).unwrap(), CompositeSet::from(a.union(&b)));
        prop_assert_eq!(ca.complement(), CompositeSet::from(a.complement()));
    }

    #[test]
    fn simple_event_complement_is_disjoint(e in simple_event()) {
        let complement = e.complement();
        prop_assert!(complement.is_disjoint().unwrap());
        prop_assert!(Event::from(e.clone()).intersection(&complement).unwrap().is_empty());
        prop_assert!(Event::from(e).union(&complement).equivalent(&Event::universe()).unwrap());
    }

    #[test]
    fn event_complement_is_involutive(e in event()) {
        let double = e.complement().unwrap().complement().unwrap();
        prop_assert!(e.equivalent(&double).unwrap());
    }

    #[test]
    fn event_complement_partitions_universe(e in event()) {
        let complement = e.complement().unwrap();
        prop_assert!(e.intersection(&complement).unwrap().is_empty());
        prop_assert!(e.union(&complement).equivalent(&Event::universe()).unwrap());
    }

    #[test]
    fn event_intersection_commutes(a in event(), b in event()) {
        let ab = a.intersection(&b).unwrap();
        let ba = b.intersection(&a).unwrap();
        prop_assert!(ab.equivalent(&ba).unwrap());
    }

    #[test]
    fn event_intersection_associates(a in event(), b in event(), c in event()) {
        let left = a.intersection(&b).unwrap().intersection(&c).unwrap();
        let right = a.intersection(&b.intersection(&c).unwrap()).unwrap();
        prop_assert!(left.equivalent(&right).unwrap());
    }

    #[test]
    fn event_union_commutes_and_associates(a in event(), b in event(), c in event()) {
        prop_assert!(a.union(&b).equivalent(&b.union(&a)).unwrap());
        let left = a.union(&b).union(&c);
        let right = a.union(&b.union(&c));
        prop_assert!(left.equivalent(&right).unwrap());
    }

    #[test]
    fn event_intersection_is_idempotent(e in event()) {
        prop_assert!(e.intersection(&e).unwrap().equivalent(&e).unwrap());
    }

    #[test]
    fn make_disjoint_preserves_points(e in event()) {
        let disjoint = e.make_disjoint().unwrap();
        prop_assert!(disjoint.is_disjoint().unwrap());
        prop_assert!(disjoint.equivalent(&e).unwrap());
    }

    #[test]
    fn simplify_preserves_points(e in event()) {
        let simplified = e.simplify().unwrap();
        prop_assert!(simplified.len() <= e.len());
        prop_assert!(simplified.equivalent(&e).unwrap());
    }

    #[test]
    fn fill_missing_variables_is_idempotent(e in simple_event()) {
        let variables = [x(), y()];
        let mut once = e.clone();
        once.fill_missing_variables(&variables);
        let mut twice = once.clone();
        twice.fill_missing_variables(&variables);
        prop_assert_eq!(&once, &twice);
        prop_assert!(Event::from(once).equivalent(&Event::from(e)).unwrap());
    }
}
