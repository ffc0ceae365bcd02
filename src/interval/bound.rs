//! Interval endpoints and the rules for combining them.

use std::cmp::Ordering;
use std::fmt::Display;

/// Whether an endpoint belongs to the interval.
///
/// `Closed` orders before `Open`, which is the tie-break used when sorting
/// simple intervals that share an endpoint value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderType {
    Closed,
    Open,
}

impl BorderType {
    /// Flips the qualifier: the border of the neighbouring complement piece.
    pub const fn invert(self) -> Self {
        match self {
            BorderType::Closed => BorderType::Open,
            BorderType::Open => BorderType::Closed,
        }
    }

    /// Qualifier of a shared endpoint after intersection (OPEN wins).
    pub const fn intersect(self, other: BorderType) -> Self {
        match (self, other) {
            (BorderType::Closed, BorderType::Closed) => BorderType::Closed,
            _ => BorderType::Open,
        }
    }

    /// Qualifier of a shared endpoint after union (CLOSED wins).
    pub const fn union(self, other: BorderType) -> Self {
        match (self, other) {
            (BorderType::Open, BorderType::Open) => BorderType::Open,
            _ => BorderType::Closed,
        }
    }

    pub const fn is_closed(self) -> bool {
        matches!(self, BorderType::Closed)
    }

    pub const fn is_open(self) -> bool {
        matches!(self, BorderType::Open)
    }
}

/// An interval endpoint: a value on the extended real line and its qualifier.
///
/// Infinite values are always stored as [`BorderType::Open`] and `-0.0` is
/// stored as `0.0`, so that equal endpoints compare equal bit for bit.
#[derive(Debug, Clone, Copy)]
pub struct Bound {
    value: f64,
    border: BorderType,
}

impl Bound {
    pub fn new(value: f64, border: BorderType) -> Self {
        let border = if value.is_infinite() {
            BorderType::Open
        } else {
            border
        };
        Self {
            value: value + 0.0,
            border,
        }
    }

    pub fn closed(value: f64) -> Self {
        Self::new(value, BorderType::Closed)
    }

    pub fn open(value: f64) -> Self {
        Self::new(value, BorderType::Open)
    }

    /// The `-inf` endpoint.
    pub fn neg_infinity() -> Self {
        Self::open(f64::NEG_INFINITY)
    }

    /// The `+inf` endpoint.
    pub fn infinity() -> Self {
        Self::open(f64::INFINITY)
    }

    pub const fn value(&self) -> f64 {
        self.value
    }

    pub const fn border(&self) -> BorderType {
        self.border
    }

    pub fn is_unbounded(&self) -> bool {
        self.value.is_infinite()
    }

    /// Same value, flipped qualifier.
    pub fn inverted(self) -> Self {
        Self::new(self.value, self.border.invert())
    }

    /// The larger of two lower bounds; OPEN wins a tie.
    pub fn tighter_lower(self, other: Bound) -> Bound {
        match self.value.total_cmp(&other.value) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal => Self::new(self.value, self.border.intersect(other.border)),
        }
    }

    /// The smaller of two upper bounds; OPEN wins a tie.
    pub fn tighter_upper(self, other: Bound) -> Bound {
        match self.value.total_cmp(&other.value) {
            Ordering::Less => self,
            Ordering::Greater => other,
            Ordering::Equal => Self::new(self.value, self.border.intersect(other.border)),
        }
    }

    /// The larger of two upper bounds; CLOSED wins a tie.
    pub fn looser_upper(self, other: Bound) -> Bound {
        match self.value.total_cmp(&other.value) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal => Self::new(self.value, self.border.union(other.border)),
        }
    }
}

impl PartialEq for Bound {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Bound {}

impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by value, then CLOSED before OPEN.
impl Ord for Bound {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .total_cmp(&other.value)
            .then(self.border.cmp(&other.border))
    }
}

impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_values_are_forced_open() {
        assert_eq!(
            Bound::closed(f64::INFINITY).border(),
            BorderType::Open
        );
        assert_eq!(
            Bound::closed(f64::NEG_INFINITY).border(),
            BorderType::Open
        );
        assert!(Bound::infinity().is_unbounded());
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert_eq!(Bound::closed(-0.0), Bound::closed(0.0));
        assert!(Bound::closed(-0.0).value().is_sign_positive());
    }

    #[test]
    fn border_combination_rules() {
        use BorderType::*;
        assert_eq!(Closed.intersect(Closed), Closed);
        assert_eq!(Closed.intersect(Open), Open);
        assert_eq!(Open.union(Closed), Closed);
        assert_eq!(Open.union(Open), Open);
        assert_eq!(Open.invert(), Closed);
        assert_eq!(Closed.invert(), Open);
    }

    #[test]
    fn tighter_lower_prefers_larger_value_then_open() {
        assert_eq!(
            Bound::closed(1.0).tighter_lower(Bound::closed(3.0)),
            Bound::closed(3.0)
        );
        assert_eq!(
            Bound::closed(3.0).tighter_lower(Bound::open(3.0)),
            Bound::open(3.0)
        );
    }

    #[test]
    fn tighter_upper_prefers_smaller_value_then_open() {
        assert_eq!(
            Bound::closed(5.0).tighter_upper(Bound::closed(7.0)),
            Bound::closed(5.0)
        );
        assert_eq!(
            Bound::open(5.0).tighter_upper(Bound::closed(5.0)),
            Bound::open(5.0)
        );
    }

    #[test]
    fn looser_upper_prefers_larger_value_then_closed() {
        assert_eq!(
            Bound::open(5.0).looser_upper(Bound::closed(5.0)),
            Bound::closed(5.0)
        );
        assert_eq!(
            Bound::open(5.0).looser_upper(Bound::infinity()),
            Bound::infinity()
        );
    }

    #[test]
    fn ordering_is_value_then_closed_first() {
        assert!(Bound::closed(1.0) < Bound::open(1.0));
        assert!(Bound::open(1.0) < Bound::closed(2.0));
        assert!(Bound::neg_infinity() < Bound::closed(-1e300));
    }
}
