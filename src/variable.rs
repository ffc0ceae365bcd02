//! Named axes of the product space.

use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::composite::CompositeSet;
use crate::error::{AlgebraError, Result};
use crate::interval::Interval;
use crate::set::{Set, SetElement};

/// Which composite-set kind makes up a variable's domain.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariableKind {
    /// Real-valued; the domain is the whole real line.
    Continuous,
    /// Integer-valued, represented by intervals over the real line.
    Integer,
    /// Takes one of finitely many values; the domain is the full enumeration
    /// of the set's domain.
    Symbolic(Set),
}

/// A named axis of the product space.
///
/// Identity, ordering and hashing use the name only, so a variable can serve
/// as a key of ordered maps. Two variables with the same name are expected to
/// describe the same axis; [`Variable::check_assignment`] guards the kind.
///
/// Symbolic variables may carry labels naming each position of their domain.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Variable {
    name: Arc<str>,
    kind: VariableKind,
    labels: Arc<[String]>,
}

impl Variable {
    pub fn new(name: impl Into<String>, kind: VariableKind) -> Self {
        let name: String = name.into();
        Self {
            name: Arc::from(name),
            kind,
            labels: Arc::from(Vec::new()),
        }
    }

    pub fn continuous(name: impl Into<String>) -> Self {
        Self::new(name, VariableKind::Continuous)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, VariableKind::Integer)
    }

    /// A symbolic variable over `{0, .., domain_size - 1}`.
    pub fn symbolic(name: impl Into<String>, domain_size: usize) -> Self {
        Self::new(name, VariableKind::Symbolic(Set::full(domain_size)))
    }

    /// A symbolic variable whose values are named. Labels are sorted and
    /// deduplicated; a label's position in that order is its element index.
    pub fn symbolic_named<S: Into<String>>(
        name: impl Into<String>,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        let mut labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        labels.sort();
        labels.dedup();
        let name: String = name.into();
        Self {
            name: Arc::from(name),
            kind: VariableKind::Symbolic(Set::full(labels.len())),
            labels: Arc::from(labels),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &VariableKind {
        &self.kind
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_symbolic(&self) -> bool {
        matches!(self.kind, VariableKind::Symbolic(_))
    }

    /// The implicit full domain: the real line for numeric variables, the
    /// full enumeration for symbolic ones.
    pub fn domain(&self) -> CompositeSet {
        match &self.kind {
            VariableKind::Continuous | VariableKind::Integer => {
                CompositeSet::Interval(Interval::reals())
            }
            VariableKind::Symbolic(set) => CompositeSet::Set(Set::full(set.domain_size())),
        }
    }

    /// Number of values of a symbolic domain; zero for numeric variables.
    fn domain_size(&self) -> usize {
        match &self.kind {
            VariableKind::Symbolic(set) => set.domain_size(),
            VariableKind::Continuous | VariableKind::Integer => 0,
        }
    }

    /// Labels, when present, must name every position of a symbolic domain.
    #[cfg(any(feature = "serde", test))]
    fn check_labels(&self) -> Result<()> {
        if self.labels.is_empty() {
            return Ok(());
        }
        if !self.is_symbolic() {
            return Err(AlgebraError::KindMismatch {
                expected: "a set",
                found: "an interval",
            });
        }
        if self.labels.len() != self.domain_size() {
            return Err(AlgebraError::DomainMismatch {
                left: self.domain_size(),
                right: self.labels.len(),
            });
        }
        Ok(())
    }

    /// Checks that `assignment` is of this variable's kind and, for symbolic
    /// variables, over the same domain.
    pub fn check_assignment(&self, assignment: &CompositeSet) -> Result<()> {
        self.domain().check_compatible(assignment)
    }

    /// Looks up the element named `label`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnknownElement`] if the variable has no such label.
    pub fn element(&self, label: &str) -> Result<SetElement> {
        let index = self
            .labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| AlgebraError::UnknownElement {
                variable: self.name.to_string(),
                element: label.to_string(),
            })?;
        SetElement::new(index, self.domain_size())
    }

    /// The set of elements named by `labels`.
    pub fn set_of<'a>(&self, labels: impl IntoIterator<Item = &'a str>) -> Result<Set> {
        let elements = labels
            .into_iter()
            .map(|label| self.element(label))
            .collect::<Result<Vec<_>>>()?;
        Set::from_elements(self.domain_size(), elements)
    }

    /// The label of position `index`, if the variable is labelled.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Variable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            name: String,
            kind: VariableKind,
            #[serde(default)]
            labels: Vec<String>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let variable = Self {
            name: Arc::from(raw.name),
            kind: raw.kind,
            labels: Arc::from(raw.labels),
        };
        variable
            .check_labels()
            .map_err(serde::de::Error::custom)?;
        Ok(variable)
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Variable {}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
