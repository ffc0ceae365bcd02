//! One atomic value of a finite domain.

use std::fmt::Display;

use super::set::Set;
use crate::error::{AlgebraError, Result};

/// The value at position `index` of a domain with `domain_size` values.
///
/// Invariant: `index < domain_size`. Elements order by index; comparing
/// elements of different domains is allowed but carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SetElement {
    index: usize,
    domain_size: usize,
}

impl SetElement {
    /// Creates the element at `index`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::IndexOutOfDomain`] if `index >= domain_size`.
    pub fn new(index: usize, domain_size: usize) -> Result<Self> {
        if index >= domain_size {
            return Err(AlgebraError::IndexOutOfDomain { index, domain_size });
        }
        Ok(Self { index, domain_size })
    }

    /// Skips validation; the caller guarantees `index < domain_size`.
    pub(crate) fn new_unchecked(index: usize, domain_size: usize) -> Self {
        debug_assert!(index < domain_size);
        Self { index, domain_size }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn domain_size(&self) -> usize {
        self.domain_size
    }

    /// Returns the element itself when both are the same value, otherwise `None`.
    pub fn intersection(&self, other: &SetElement) -> Option<SetElement> {
        (self == other).then_some(*self)
    }

    /// Every other value of the domain.
    pub fn complement(&self) -> Set {
        Set::from(*self).complement()
    }
}

impl Display for SetElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SetElement {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("SetElement", 2)?;
        s.serialize_field("index", &self.index)?;
        s.serialize_field("domain_size", &self.domain_size)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SetElement {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            index: usize,
            domain_size: usize,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.index, raw.domain_size).map_err(serde::de::Error::custom)
    }
}
