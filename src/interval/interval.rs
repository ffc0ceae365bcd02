//! A canonical union of simple intervals.
//!
//! [`Interval`] wraps a `Vec<SimpleInterval>` and guarantees the **canonical
//! invariant** at all times: members are strictly increasing and no two of
//! them overlap or touch in a way that would merge them. The same set of
//! points therefore always has the same member sequence, and structural
//! equality is semantic equality.
//!
//! Read access is fully transparent via `Deref<Target = [SimpleInterval]>`.

use std::fmt::Display;
use std::ops::{Deref, Index};

use super::bound::{BorderType, Bound};
use super::operations;
use super::simple_interval::SimpleInterval;
use crate::algebra::SetAlgebra;
use crate::error::Result;

/// A subset of the real line made of disjoint simple intervals.
///
/// The empty member sequence denotes the empty set; a single `(-inf, inf)`
/// member denotes the whole real line.
///
/// # Performance
///
/// - Construction from unsorted input: O(n log n) sort + O(n) merge.
/// - `union`: O((n+m) log(n+m)).
/// - `intersection`: O(n·m) pairwise, then a canonicalizing merge.
/// - `complement`: one intersection per member.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Interval(Vec<SimpleInterval>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl Interval {
    /// Creates an empty interval.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn empty() -> Self {
        Self::new()
    }

    /// The whole real line `(-inf, inf)`.
    pub fn reals() -> Self {
        Self(vec![SimpleInterval::reals()])
    }

    /// `[lower, upper]`, or empty if `lower > upper`.
    pub fn closed(lower: f64, upper: f64) -> Self {
        Self::from_simple(SimpleInterval::closed(lower, upper))
    }

    /// `(lower, upper)`, or empty if `lower >= upper`.
    pub fn open(lower: f64, upper: f64) -> Self {
        Self::from_simple(SimpleInterval::open(lower, upper))
    }

    /// `[lower, upper)`, or empty if `lower >= upper`.
    pub fn closed_open(lower: f64, upper: f64) -> Self {
        Self::from_simple(SimpleInterval::closed_open(lower, upper))
    }

    /// `(lower, upper]`, or empty if `lower >= upper`.
    pub fn open_closed(lower: f64, upper: f64) -> Self {
        Self::from_simple(SimpleInterval::open_closed(lower, upper))
    }

    /// `[value, value]`
    pub fn singleton(value: f64) -> Self {
        Self::from_simple(SimpleInterval::singleton(value))
    }

    /// `[lower, inf)`
    pub fn at_least(lower: f64) -> Self {
        Self::from_simple(SimpleInterval::new(
            lower,
            f64::INFINITY,
            BorderType::Closed,
            BorderType::Open,
        ))
    }

    /// `(lower, inf)`
    pub fn greater_than(lower: f64) -> Self {
        Self::open(lower, f64::INFINITY)
    }

    /// `(-inf, upper]`
    pub fn at_most(upper: f64) -> Self {
        Self::from_simple(SimpleInterval::new(
            f64::NEG_INFINITY,
            upper,
            BorderType::Open,
            BorderType::Closed,
        ))
    }

    /// `(-inf, upper)`
    pub fn less_than(upper: f64) -> Self {
        Self::open(f64::NEG_INFINITY, upper)
    }

    /// Wraps a `Vec` that is **already in canonical form** without re-sorting.
    ///
    /// In debug builds this asserts the invariant; in release builds the check
    /// is elided.
    ///
    /// # Safety (logical)
    ///
    /// The caller **must** ensure the input is strictly increasing with no
    /// overlapping or touching members. Violating this in release mode
    /// breaks structural equality and every downstream operation.
    pub fn from_sorted_unchecked(vec: Vec<SimpleInterval>) -> Self {
        debug_assert!(
            operations::assertions::is_canonical(&vec),
            "Interval::from_sorted_unchecked called with non-canonical input"
        );
        Self(vec)
    }

    fn from_simple(simple: Option<SimpleInterval>) -> Self {
        Self(simple.into_iter().collect())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Set operations
// ─────────────────────────────────────────────────────────────────────

impl Interval {
    /// Returns the union of `self` and `other`.
    pub fn union(&self, other: &Interval) -> Interval {
        Self(operations::compute_union(&self.0, &other.0))
    }

    /// Returns the intersection of `self` and `other`.
    pub fn intersection(&self, other: &Interval) -> Interval {
        Self(operations::compute_intersection(&self.0, &other.0))
    }

    /// Returns the complement of `self` on the real line.
    pub fn complement(&self) -> Interval {
        Self(operations::compute_complement(&self.0))
    }

    /// Returns the points of `self` not contained in `other`.
    pub fn difference(&self, other: &Interval) -> Interval {
        self.intersection(&other.complement())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_reals(&self) -> bool {
        matches!(self.0.as_slice(), [only] if only.is_reals())
    }

    /// Returns true if some member contains `value` (O(log n) binary search).
    pub fn contains(&self, value: f64) -> bool {
        let idx = self.0.partition_point(|iv| {
            let upper = iv.upper();
            upper.value() < value || (upper.value() == value && upper.border().is_open())
        });
        self.0.get(idx).is_some_and(|iv| iv.contains(value))
    }

    /// Returns true if every point of `other` lies in `self`.
    pub fn contains_interval(&self, other: &Interval) -> bool {
        other.difference(self).is_empty()
    }

    /// Returns true if `self` and `other` share no point.
    pub fn is_disjoint_with(&self, other: &Interval) -> bool {
        self.intersection(other).is_empty()
    }

    /// The smallest lower endpoint, if any.
    pub fn infimum(&self) -> Option<Bound> {
        self.0.first().map(SimpleInterval::lower)
    }

    /// The largest upper endpoint, if any.
    pub fn supremum(&self) -> Option<Bound> {
        self.0.last().map(SimpleInterval::upper)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Accessors
// ─────────────────────────────────────────────────────────────────────

impl Interval {
    pub fn simple_intervals(&self) -> &[SimpleInterval] {
        &self.0
    }

    /// Consumes the interval and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<SimpleInterval> {
        self.0
    }
}

impl SetAlgebra for Interval {
    fn union(&self, other: &Self) -> Result<Self> {
        Ok(Interval::union(self, other))
    }

    fn intersection(&self, other: &Self) -> Result<Self> {
        Ok(Interval::intersection(self, other))
    }

    fn complement(&self) -> Result<Self> {
        Ok(Interval::complement(self))
    }

    fn is_empty(&self) -> bool {
        Interval::is_empty(self)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Transparent read access
// ─────────────────────────────────────────────────────────────────────

impl Deref for Interval {
    type Target = [SimpleInterval];

    fn deref(&self) -> &[SimpleInterval] {
        &self.0
    }
}

impl AsRef<[SimpleInterval]> for Interval {
    fn as_ref(&self) -> &[SimpleInterval] {
        &self.0
    }
}

impl Index<usize> for Interval {
    type Output = SimpleInterval;

    fn index(&self, index: usize) -> &SimpleInterval {
        &self.0[index]
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl From<Vec<SimpleInterval>> for Interval {
    /// Creates an `Interval` from an unsorted `Vec`, canonicalizing on construction.
    fn from(vec: Vec<SimpleInterval>) -> Self {
        Self(operations::canonicalize(vec))
    }
}

impl From<SimpleInterval> for Interval {
    /// Creates a single-member `Interval` (always canonical).
    fn from(interval: SimpleInterval) -> Self {
        Self(vec![interval])
    }
}

impl FromIterator<SimpleInterval> for Interval {
    fn from_iter<I: IntoIterator<Item = SimpleInterval>>(iter: I) -> Self {
        let vec: Vec<SimpleInterval> = iter.into_iter().collect();
        Self::from(vec)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Iterators
// ─────────────────────────────────────────────────────────────────────

impl IntoIterator for Interval {
    type Item = SimpleInterval;
    type IntoIter = std::vec::IntoIter<SimpleInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Interval {
    type Item = &'a SimpleInterval;
    type IntoIter = std::slice::Iter<'a, SimpleInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────

impl Default for Interval {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "∅");
        }
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " u ")?;
            }
            write!(f, "{}", interval)?;
        }
        Ok(())
    }
}

/// Enables `assert_eq!(interval, vec![...])` in tests.
impl PartialEq<Vec<SimpleInterval>> for Interval {
    fn eq(&self, other: &Vec<SimpleInterval>) -> bool {
        self.0 == *other
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec = Vec::<SimpleInterval>::deserialize(deserializer)?;
        Ok(Self::from(vec))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use BorderType::{Closed, Open};

    fn si(lower: f64, upper: f64, left: BorderType, right: BorderType) -> SimpleInterval {
        SimpleInterval::new(lower, upper, left, right).unwrap()
    }

    // ── Construction ──────────────────────────────────────────────────

    #[test]
    fn new_is_empty() {
        let interval = Interval::new();
        assert!(interval.is_empty());
        assert_eq!(interval.len(), 0);
        assert_eq!(interval, Interval::default());
    }

    #[test]
    fn named_constructors() {
        assert_eq!(Interval::closed(0.0, 1.0), vec![si(0.0, 1.0, Closed, Closed)]);
        assert_eq!(Interval::open(0.0, 1.0), vec![si(0.0, 1.0, Open, Open)]);
        assert_eq!(Interval::closed_open(0.0, 1.0), vec![si(0.0, 1.0, Closed, Open)]);
        assert_eq!(Interval::open_closed(0.0, 1.0), vec![si(0.0, 1.0, Open, Closed)]);
        assert_eq!(Interval::singleton(2.0), vec![si(2.0, 2.0, Closed, Closed)]);
        assert!(Interval::reals().is_reals());
        assert!(Interval::at_least(1.0).contains(1.0));
        assert!(!Interval::greater_than(1.0).contains(1.0));
        assert!(Interval::at_most(1.0).contains(1.0));
        assert!(!Interval::less_than(1.0).contains(1.0));
    }

    #[test]
    fn invalid_bounds_construct_empty() {
        assert!(Interval::closed(5.0, 3.0).is_empty());
        assert!(Interval::open(1.0, 1.0).is_empty());
        assert!(Interval::closed_open(1.0, 1.0).is_empty());
    }

    #[test]
    fn from_unsorted_overlapping_canonicalizes() {
        let interval = Interval::from(vec![
            si(200.0, 300.0, Closed, Closed),
            si(0.0, 100.0, Closed, Closed),
            si(50.0, 150.0, Closed, Open),
        ]);
        assert_eq!(
            interval,
            vec![si(0.0, 150.0, Closed, Open), si(200.0, 300.0, Closed, Closed)]
        );
    }

    #[test]
    fn from_iterator_canonicalizes() {
        let interval: Interval = vec![si(1.0, 2.0, Closed, Closed), si(0.0, 1.0, Closed, Open)]
            .into_iter()
            .collect();
        assert_eq!(interval, Interval::closed(0.0, 2.0));
    }

    // ── Set operations ────────────────────────────────────────────────

    #[test]
    fn union_overlapping_and_disjoint() {
        let a = Interval::closed(0.0, 1.0);
        let b = Interval::closed(0.5, 1.5);
        let c = Interval::closed(2.0, 3.0);
        let ab = a.union(&b);
        assert_eq!(ab, Interval::closed(0.0, 1.5));
        let abc = ab.union(&c);
        assert_eq!(abc.len(), 2);
    }

    #[test]
    fn intersection_with_multiple_members() {
        let a = Interval::closed(0.0, 1.0).union(&Interval::closed(2.0, 3.0));
        let b = Interval::closed(0.5, 2.5);
        let i = a.intersection(&b);
        assert_eq!(i, Interval::closed(0.5, 1.0).union(&Interval::closed(2.0, 2.5)));
    }

    #[test]
    fn complement_of_two_members() {
        let a = Interval::closed(0.0, 1.0).union(&Interval::closed(2.0, 3.0));
        let c = a.complement();
        assert_eq!(c.len(), 3);
        assert!(c.is_disjoint_with(&a));
        assert!(c.union(&a).is_reals());
    }

    #[test]
    fn complement_of_empty_and_reals() {
        assert!(Interval::empty().complement().is_reals());
        assert!(Interval::reals().complement().is_empty());
    }

    #[test]
    fn complement_is_involutive() {
        let a = Interval::closed_open(3.0, 5.0)
            .union(&Interval::singleton(7.0))
            .union(&Interval::greater_than(10.0));
        assert_eq!(a.complement().complement(), a);
    }

    #[test]
    fn difference_cuts_out_middle() {
        let a = Interval::open_closed(0.0, 3.0);
        let b = Interval::open_closed(1.0, 2.0);
        assert_eq!(
            a.difference(&b),
            Interval::open_closed(0.0, 1.0).union(&Interval::open_closed(2.0, 3.0))
        );
        assert!(a.difference(&a).is_empty());
    }

    #[test]
    fn contains_uses_member_borders() {
        let a = Interval::closed_open(0.0, 1.0).union(&Interval::open(1.0, 2.0));
        assert!(a.contains(0.0));
        assert!(!a.contains(1.0));
        assert!(a.contains(1.5));
        assert!(!a.contains(2.0));
        assert!(!Interval::empty().contains(0.0));
    }

    #[test]
    fn contains_interval() {
        let a = Interval::closed(0.0, 10.0);
        assert!(a.contains_interval(&Interval::open(2.0, 3.0)));
        assert!(!a.contains_interval(&Interval::closed(9.0, 11.0)));
        assert!(a.contains_interval(&Interval::empty()));
    }

    #[test]
    fn infimum_and_supremum() {
        let a = Interval::open(0.0, 1.0).union(&Interval::closed(4.0, 5.0));
        assert_eq!(a.infimum(), Some(Bound::open(0.0)));
        assert_eq!(a.supremum(), Some(Bound::closed(5.0)));
        assert_eq!(Interval::empty().infimum(), None);
    }

    #[test]
    fn trait_operations_match_inherent() {
        let a = Interval::closed(0.0, 2.0);
        let b = Interval::closed(1.0, 3.0);
        assert_eq!(SetAlgebra::union(&a, &b).unwrap(), a.union(&b));
        assert_eq!(SetAlgebra::intersection(&a, &b).unwrap(), a.intersection(&b));
        assert_eq!(SetAlgebra::complement(&a).unwrap(), a.complement());
        assert!(a.is_superset_of(&Interval::closed(0.5, 1.5)).unwrap());
        assert!(a.equivalent(&a.union(&Interval::singleton(2.0))).unwrap());
    }

    // ── Display ───────────────────────────────────────────────────────

    #[test]
    fn display_format() {
        assert_eq!(Interval::empty().to_string(), "∅");
        let a = Interval::closed_open(3.0, 5.0).union(&Interval::greater_than(7.0));
        assert_eq!(a.to_string(), "[3, 5) u (7, inf)");
    }

    // ── IntoIterator ──────────────────────────────────────────────────

    #[test]
    fn into_iter_owned_and_borrowed() {
        let a = Interval::closed(0.0, 1.0).union(&Interval::closed(2.0, 3.0));
        assert_eq!((&a).into_iter().count(), 2);
        let collected: Vec<_> = a.into_iter().collect();
        assert_eq!(collected.len(), 2);
    }
}
