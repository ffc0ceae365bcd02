//! Subsets of a finite domain.

use std::collections::BTreeSet;
use std::fmt::Display;

use super::element::SetElement;
use crate::algebra::SetAlgebra;
use crate::error::{AlgebraError, Result};

/// A subset of the domain `{0, .., domain_size - 1}`.
///
/// Membership is the only semantic content, so the ordered, deduplicated
/// element set is already canonical. Binary operations require both operands
/// to share the same `domain_size`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Set {
    elements: BTreeSet<SetElement>,
    domain_size: usize,
}

impl Set {
    /// Creates the set holding the given positions.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::IndexOutOfDomain`] for the first index `>= domain_size`.
    pub fn new(domain_size: usize, indices: impl IntoIterator<Item = usize>) -> Result<Self> {
        let elements = indices
            .into_iter()
            .map(|index| SetElement::new(index, domain_size))
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self {
            elements,
            domain_size,
        })
    }

    /// Creates the set holding the given elements.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::DomainMismatch`] if an element belongs to a domain of a
    /// different size.
    pub fn from_elements(
        domain_size: usize,
        elements: impl IntoIterator<Item = SetElement>,
    ) -> Result<Self> {
        let elements = elements
            .into_iter()
            .map(|element| {
                if element.domain_size() == domain_size {
                    Ok(element)
                } else {
                    Err(AlgebraError::DomainMismatch {
                        left: domain_size,
                        right: element.domain_size(),
                    })
                }
            })
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self {
            elements,
            domain_size,
        })
    }

    pub fn empty(domain_size: usize) -> Self {
        Self {
            elements: BTreeSet::new(),
            domain_size,
        }
    }

    /// The whole domain.
    pub fn full(domain_size: usize) -> Self {
        Self {
            elements: (0..domain_size)
                .map(|index| SetElement::new_unchecked(index, domain_size))
                .collect(),
            domain_size,
        }
    }

    pub const fn domain_size(&self) -> usize {
        self.domain_size
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.elements.len() == self.domain_size
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.domain_size
            && self
                .elements
                .contains(&SetElement::new_unchecked(index, self.domain_size))
    }

    /// Elements in increasing index order.
    pub fn elements(&self) -> impl Iterator<Item = &SetElement> + '_ {
        self.elements.iter()
    }

    /// Positions in increasing order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.elements.iter().map(SetElement::index)
    }

    fn check_domain(&self, other: &Set) -> Result<()> {
        if self.domain_size != other.domain_size {
            return Err(AlgebraError::DomainMismatch {
                left: self.domain_size,
                right: other.domain_size,
            });
        }
        Ok(())
    }

    fn with_elements(&self, elements: BTreeSet<SetElement>) -> Set {
        Set {
            elements,
            domain_size: self.domain_size,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Set operations
// ─────────────────────────────────────────────────────────────────────

impl Set {
    pub fn union(&self, other: &Set) -> Result<Set> {
        self.check_domain(other)?;
        Ok(self.with_elements(self.elements.union(&other.elements).copied().collect()))
    }

    pub fn intersection(&self, other: &Set) -> Result<Set> {
        self.check_domain(other)?;
        Ok(self.with_elements(
            self.elements
                .intersection(&other.elements)
                .copied()
                .collect(),
        ))
    }

    pub fn difference(&self, other: &Set) -> Result<Set> {
        self.check_domain(other)?;
        Ok(self.with_elements(self.elements.difference(&other.elements).copied().collect()))
    }

    /// Every value of the domain not in `self`.
    pub fn complement(&self) -> Set {
        self.with_elements(
            Set::full(self.domain_size)
                .elements
                .difference(&self.elements)
                .copied()
                .collect(),
        )
    }
}

impl SetAlgebra for Set {
    fn union(&self, other: &Self) -> Result<Self> {
        Set::union(self, other)
    }

    fn intersection(&self, other: &Self) -> Result<Self> {
        Set::intersection(self, other)
    }

    fn complement(&self) -> Result<Self> {
        Ok(Set::complement(self))
    }

    fn is_empty(&self) -> bool {
        Set::is_empty(self)
    }

    fn difference(&self, other: &Self) -> Result<Self> {
        Set::difference(self, other)
    }
}

impl From<SetElement> for Set {
    fn from(element: SetElement) -> Self {
        Self {
            elements: BTreeSet::from([element]),
            domain_size: element.domain_size(),
        }
    }
}

impl Display for Set {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.elements.is_empty() {
            return write!(f, "∅");
        }
        write!(f, "{{")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "}}")
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Set {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Set", 2)?;
        s.serialize_field("domain_size", &self.domain_size)?;
        s.serialize_field("elements", &self.indices().collect::<Vec<_>>())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Set {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            domain_size: usize,
            elements: Vec<usize>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.domain_size, raw.elements).map_err(serde::de::Error::custom)
    }
}
