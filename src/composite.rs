//! The closed sum of the two composite-set kinds.

use std::fmt::Display;

use crate::algebra::SetAlgebra;
use crate::error::{AlgebraError, Result};
use crate::interval::{Interval, SimpleInterval};
use crate::set::{Set, SetElement};

/// A composite set of either kind: continuous [`Interval`] or discrete [`Set`].
///
/// The product layer only ever talks to this type. Binary operations require
/// both operands to be of the same kind and, for sets, of the same domain.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompositeSet {
    Interval(Interval),
    Set(Set),
}

impl CompositeSet {
    /// Human-readable kind, used in error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            CompositeSet::Interval(_) => "an interval",
            CompositeSet::Set(_) => "a set",
        }
    }

    pub fn as_interval(&self) -> Option<&Interval> {
        match self {
            CompositeSet::Interval(interval) => Some(interval),
            CompositeSet::Set(_) => None,
        }
    }

    pub fn as_set(&self) -> Option<&Set> {
        match self {
            CompositeSet::Set(set) => Some(set),
            CompositeSet::Interval(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CompositeSet::Interval(interval) => interval.is_empty(),
            CompositeSet::Set(set) => set.is_empty(),
        }
    }

    /// Returns true if `self` is the whole domain of its kind.
    pub fn is_full(&self) -> bool {
        match self {
            CompositeSet::Interval(interval) => interval.is_reals(),
            CompositeSet::Set(set) => set.is_full(),
        }
    }

    pub fn complement(&self) -> CompositeSet {
        match self {
            CompositeSet::Interval(interval) => CompositeSet::Interval(interval.complement()),
            CompositeSet::Set(set) => CompositeSet::Set(set.complement()),
        }
    }

    pub fn union(&self, other: &CompositeSet) -> Result<CompositeSet> {
        match (self, other) {
            (CompositeSet::Interval(a), CompositeSet::Interval(b)) => {
                Ok(CompositeSet::Interval(a.union(b)))
            }
            (CompositeSet::Set(a), CompositeSet::Set(b)) => Ok(CompositeSet::Set(a.union(b)?)),
            _ => Err(self.kind_mismatch(other)),
        }
    }

    pub fn intersection(&self, other: &CompositeSet) -> Result<CompositeSet> {
        match (self, other) {
            (CompositeSet::Interval(a), CompositeSet::Interval(b)) => {
                Ok(CompositeSet::Interval(a.intersection(b)))
            }
            (CompositeSet::Set(a), CompositeSet::Set(b)) => {
                Ok(CompositeSet::Set(a.intersection(b)?))
            }
            _ => Err(self.kind_mismatch(other)),
        }
    }

    pub fn difference(&self, other: &CompositeSet) -> Result<CompositeSet> {
        match (self, other) {
            (CompositeSet::Interval(a), CompositeSet::Interval(b)) => {
                Ok(CompositeSet::Interval(a.difference(b)))
            }
            (CompositeSet::Set(a), CompositeSet::Set(b)) => Ok(CompositeSet::Set(a.difference(b)?)),
            _ => Err(self.kind_mismatch(other)),
        }
    }

    /// Checks that `other` can be combined with `self`: same kind and, for
    /// sets, the same domain size.
    pub fn check_compatible(&self, other: &CompositeSet) -> Result<()> {
        match (self, other) {
            (CompositeSet::Interval(_), CompositeSet::Interval(_)) => Ok(()),
            (CompositeSet::Set(a), CompositeSet::Set(b)) if a.domain_size() == b.domain_size() => {
                Ok(())
            }
            (CompositeSet::Set(a), CompositeSet::Set(b)) => Err(AlgebraError::DomainMismatch {
                left: a.domain_size(),
                right: b.domain_size(),
            }),
            _ => Err(self.kind_mismatch(other)),
        }
    }

    fn kind_mismatch(&self, other: &CompositeSet) -> AlgebraError {
        AlgebraError::KindMismatch {
            expected: self.kind_name(),
            found: other.kind_name(),
        }
    }
}

impl SetAlgebra for CompositeSet {
    fn union(&self, other: &Self) -> Result<Self> {
        CompositeSet::union(self, other)
    }

    fn intersection(&self, other: &Self) -> Result<Self> {
        CompositeSet::intersection(self, other)
    }

    fn complement(&self) -> Result<Self> {
        Ok(CompositeSet::complement(self))
    }

    fn is_empty(&self) -> bool {
        CompositeSet::is_empty(self)
    }

    fn difference(&self, other: &Self) -> Result<Self> {
        CompositeSet::difference(self, other)
    }
}

impl From<Interval> for CompositeSet {
    fn from(interval: Interval) -> Self {
        CompositeSet::Interval(interval)
    }
}

impl From<SimpleInterval> for CompositeSet {
    fn from(interval: SimpleInterval) -> Self {
        CompositeSet::Interval(Interval::from(interval))
    }
}

impl From<Set> for CompositeSet {
    fn from(set: Set) -> Self {
        CompositeSet::Set(set)
    }
}

impl From<SetElement> for CompositeSet {
    fn from(element: SetElement) -> Self {
        CompositeSet::Set(Set::from(element))
    }
}

impl Display for CompositeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompositeSet::Interval(interval) => write!(f, "{}", interval),
            CompositeSet::Set(set) => write!(f, "{}", set),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(domain_size: usize, indices: &[usize]) -> CompositeSet {
        CompositeSet::Set(Set::new(domain_size, indices.iter().copied()).unwrap())
    }

    #[test]
    fn operations_dispatch_by_kind() {
        let a = CompositeSet::from(Interval::closed(0.0, 2.0));
        let b = CompositeSet::from(Interval::closed(1.0, 3.0));
        assert_eq!(
            a.intersection(&b).unwrap(),
            CompositeSet::from(Interval::closed(1.0, 2.0))
        );
        assert_eq!(
            a.union(&b).unwrap(),
            CompositeSet::from(Interval::closed(0.0, 3.0))
        );

        let s = set(3, &[0, 1]);
        let t = set(3, &[1, 2]);
        assert_eq!(s.intersection(&t).unwrap(), set(3, &[1]));
        assert_eq!(s.difference(&t).unwrap(), set(3, &[0]));
    }

    #[test]
    fn mixing_kinds_fails() {
        let a = CompositeSet::from(Interval::reals());
        let s = set(3, &[0]);
        let expected = Err(AlgebraError::KindMismatch {
            expected: "an interval",
            found: "a set",
        });
        assert_eq!(a.union(&s), expected);
        assert_eq!(a.intersection(&s), expected);
        assert_eq!(a.check_compatible(&s), Err(AlgebraError::KindMismatch {
            expected: "an interval",
            found: "a set",
        }));
    }

    #[test]
    fn set_domain_mismatch_propagates() {
        let s = set(3, &[0]);
        let t = set(2, &[0]);
        assert_eq!(
            s.intersection(&t),
            Err(AlgebraError::DomainMismatch { left: 3, right: 2 })
        );
        assert_eq!(
            s.check_compatible(&t),
            Err(AlgebraError::DomainMismatch { left: 3, right: 2 })
        );
    }

    #[test]
    fn complement_and_fullness() {
        let a = CompositeSet::from(Interval::empty());
        assert!(a.is_empty());
        assert!(a.complement().is_full());
        assert_eq!(set(3, &[0, 1]).complement(), set(3, &[2]));
        assert!(set(3, &[0, 1, 2]).is_full());
    }

    #[test]
    fn ordering_puts_intervals_first() {
        assert!(CompositeSet::from(Interval::reals()) < set(1, &[0]));
    }

    #[test]
    fn display_delegates() {
        assert_eq!(
            CompositeSet::from(Interval::closed_open(3.0, 5.0)).to_string(),
            "[3, 5)"
        );
        assert_eq!(set(3, &[0, 1]).to_string(), "{0, 1}");
    }
}
