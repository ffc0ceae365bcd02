//! The shared contract of every composite set in the algebra.

use crate::error::Result;

/// Set operations shared by [`Interval`](crate::interval::Interval),
/// [`Set`](crate::set::Set), [`CompositeSet`](crate::composite::CompositeSet)
/// and [`Event`](crate::product::Event).
///
/// Operations are pure: every method returns a new value and leaves `self`
/// untouched. Operands living in incompatible domains are rejected with an
/// [`AlgebraError`](crate::AlgebraError) instead of producing a partial result.
///
/// # Contract
///
/// Implementations should:
/// - Return a canonical value whenever the type has a canonical form
/// - Treat `is_empty` as "contains no point", never as "has no members"
///   unless the two coincide for the type
pub trait SetAlgebra: Sized {
    /// Returns every point contained in `self` or `other`.
    fn union(&self, other: &Self) -> Result<Self>;

    /// Returns every point contained in both `self` and `other`.
    fn intersection(&self, other: &Self) -> Result<Self>;

    /// Returns every point of the domain not contained in `self`.
    fn complement(&self) -> Result<Self>;

    /// Returns true if `self` contains no point.
    fn is_empty(&self) -> bool;

    /// Returns every point of `self` not contained in `other`.
    fn difference(&self, other: &Self) -> Result<Self> {
        self.intersection(&other.complement()?)
    }

    /// Returns true if `self` and `other` share no point.
    fn is_disjoint_with(&self, other: &Self) -> Result<bool> {
        Ok(SetAlgebra::is_empty(&self.intersection(other)?))
    }

    /// Returns true if every point of `other` is contained in `self`.
    fn is_superset_of(&self, other: &Self) -> Result<bool> {
        Ok(SetAlgebra::is_empty(&other.difference(self)?))
    }

    /// Returns true if `self` and `other` contain exactly the same points,
    /// regardless of how either is represented.
    fn equivalent(&self, other: &Self) -> Result<bool> {
        Ok(self.is_superset_of(other)? && other.is_superset_of(self)?)
    }
}
