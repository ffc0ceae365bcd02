//! Atomic continuous range with open or closed endpoints.

use std::cmp::Ordering;
use std::fmt::Display;

use super::bound::{BorderType, Bound};
use super::interval::Interval;
use crate::error::{AlgebraError, Result};

/// A single non-empty range of the extended real line.
///
/// Invariant: `lower < upper`, or `lower == upper` with both endpoints
/// closed (a single point). Every other combination denotes the empty set,
/// which this type never holds: constructors and
/// [`intersection`](SimpleInterval::intersection) return `None` instead.
///
/// Ordering is lexicographic over `(lower, upper)`, where each endpoint orders
/// by value and then CLOSED before OPEN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SimpleInterval {
    lower: Bound,
    upper: Bound,
}

impl SimpleInterval {
    /// Creates the interval between `lower` and `upper` with the given
    /// qualifiers, or `None` if that combination is empty.
    pub fn new(lower: f64, upper: f64, left: BorderType, right: BorderType) -> Option<Self> {
        Self::from_bounds(Bound::new(lower, left), Bound::new(upper, right))
    }

    /// Like [`SimpleInterval::new`], but reports an empty combination as
    /// [`AlgebraError::InvalidBounds`].
    pub fn try_new(lower: f64, upper: f64, left: BorderType, right: BorderType) -> Result<Self> {
        Self::new(lower, upper, left, right).ok_or(AlgebraError::InvalidBounds { lower, upper })
    }

    pub fn from_bounds(lower: Bound, upper: Bound) -> Option<Self> {
        if lower.value().is_nan() || upper.value().is_nan() {
            return None;
        }
        match lower.value().total_cmp(&upper.value()) {
            Ordering::Less => Some(Self { lower, upper }),
            Ordering::Equal if lower.border().is_closed() && upper.border().is_closed() => {
                Some(Self { lower, upper })
            }
            _ => None,
        }
    }

    /// `[lower, upper]`
    pub fn closed(lower: f64, upper: f64) -> Option<Self> {
        Self::new(lower, upper, BorderType::Closed, BorderType::Closed)
    }

    /// `(lower, upper)`
    pub fn open(lower: f64, upper: f64) -> Option<Self> {
        Self::new(lower, upper, BorderType::Open, BorderType::Open)
    }

    /// `[lower, upper)`
    pub fn closed_open(lower: f64, upper: f64) -> Option<Self> {
        Self::new(lower, upper, BorderType::Closed, BorderType::Open)
    }

    /// `(lower, upper]`
    pub fn open_closed(lower: f64, upper: f64) -> Option<Self> {
        Self::new(lower, upper, BorderType::Open, BorderType::Closed)
    }

    /// `[value, value]`
    pub fn singleton(value: f64) -> Option<Self> {
        Self::closed(value, value)
    }

    /// `(-inf, inf)`
    pub fn reals() -> Self {
        Self {
            lower: Bound::neg_infinity(),
            upper: Bound::infinity(),
        }
    }

    pub const fn lower(&self) -> Bound {
        self.lower
    }

    pub const fn upper(&self) -> Bound {
        self.upper
    }

    pub fn is_singleton(&self) -> bool {
        self.lower.value() == self.upper.value()
    }

    pub fn is_reals(&self) -> bool {
        self.lower.is_unbounded() && self.upper.is_unbounded()
    }

    /// Returns true if `value` lies inside the range.
    pub fn contains(&self, value: f64) -> bool {
        let above_lower = value > self.lower.value()
            || (value == self.lower.value() && self.lower.border().is_closed());
        let below_upper = value < self.upper.value()
            || (value == self.upper.value() && self.upper.border().is_closed());
        above_lower && below_upper
    }

    /// Returns the overlap of both ranges, or `None` if they are disjoint.
    ///
    /// Shared endpoint values keep the stricter (OPEN) qualifier.
    pub fn intersection(&self, other: &SimpleInterval) -> Option<SimpleInterval> {
        Self::from_bounds(
            self.lower.tighter_lower(other.lower),
            self.upper.tighter_upper(other.upper),
        )
    }

    /// Returns the up to two ranges left over on the real line, with the
    /// qualifiers flipped at the cut points.
    pub fn complement(&self) -> Interval {
        let pieces: Vec<SimpleInterval> = [
            Self::from_bounds(Bound::neg_infinity(), self.lower.inverted()),
            Self::from_bounds(self.upper.inverted(), Bound::infinity()),
        ]
        .into_iter()
        .flatten()
        .collect();
        Interval::from_sorted_unchecked(pieces)
    }

    /// Returns true if `next` overlaps or touches `self` so that their union is
    /// a single range. Expects `self <= next`.
    pub(crate) fn is_mergeable_with(&self, next: &SimpleInterval) -> bool {
        match next.lower.value().total_cmp(&self.upper.value()) {
            Ordering::Less => true,
            Ordering::Equal => self.upper.border().is_closed() || next.lower.border().is_closed(),
            Ordering::Greater => false,
        }
    }

    /// The single range covering both. Expects `self <= next` and
    /// `self.is_mergeable_with(next)`.
    pub(crate) fn merge(&self, next: &SimpleInterval) -> SimpleInterval {
        SimpleInterval {
            lower: self.lower,
            upper: self.upper.looser_upper(next.upper),
        }
    }
}

impl Display for SimpleInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let left = if self.lower.border().is_closed() { '[' } else { '(' };
        let right = if self.upper.border().is_closed() { ']' } else { ')' };
        write!(f, "{}{}, {}{}", left, self.lower, self.upper, right)
    }
}

// =============================================================================
// SimpleInterval Serde Support
// =============================================================================

/// Unbounded ends are written as `None`, since JSON has no infinities.
#[cfg(feature = "serde")]
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[cfg(feature = "serde")]
impl serde::Serialize for SimpleInterval {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("SimpleInterval", 4)?;
        s.serialize_field("lower", &finite(self.lower.value()))?;
        s.serialize_field("upper", &finite(self.upper.value()))?;
        s.serialize_field("left", &self.lower.border())?;
        s.serialize_field("right", &self.upper.border())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SimpleInterval {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            lower: Option<f64>,
            upper: Option<f64>,
            left: BorderType,
            right: BorderType,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::try_new(
            raw.lower.unwrap_or(f64::NEG_INFINITY),
            raw.upper.unwrap_or(f64::INFINITY),
            raw.left,
            raw.right,
        )
        .map_err(serde::de::Error::custom)
    }
}
