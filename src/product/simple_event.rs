use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use crate::composite::CompositeSet;
use crate::error::Result;
use crate::product::Event;
use crate::variable::Variable;

/// An axis-aligned rectangle of the product space.
///
/// Each assigned variable is restricted to one composite set; variables that
/// are not assigned range over their full domain. Assignments are kept in a
/// `BTreeMap`, so iteration (and therefore complement decomposition and
/// display) follows variable-name order.
///
/// # Examples
///
/// ```
/// use sigma_events::{Interval, Set, SimpleEvent, Variable};
///
/// let x = Variable::continuous("x");
/// let y = Variable::symbolic("y", 3);
///
/// let event = SimpleEvent::universe()
///     .with(x, Interval::closed_open(3.0, 5.0))
///     .unwrap()
///     .with(y, Set::new(3, [0, 1]).unwrap())
///     .unwrap();
///
/// assert_eq!(event.to_string(), "{x: [3, 5), y: {0, 1}}");
/// assert_eq!(event.complement().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SimpleEvent {
    assignments: BTreeMap<Variable, CompositeSet>,
}

impl SimpleEvent {
    /// The unrestricted rectangle: every variable ranges over its domain.
    pub fn universe() -> Self {
        Self::default()
    }

    /// Builds a rectangle from `(variable, set)` pairs.
    ///
    /// A variable listed more than once is restricted to the intersection of
    /// its sets.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::KindMismatch`](crate::AlgebraError::KindMismatch) or
    /// [`AlgebraError::DomainMismatch`](crate::AlgebraError::DomainMismatch)
    /// if a set does not fit its variable's domain.
    pub fn from_assignments<S: Into<CompositeSet>>(
        assignments: impl IntoIterator<Item = (Variable, S)>,
    ) -> Result<Self> {
        assignments
            .into_iter()
            .try_fold(Self::universe(), |event, (variable, set)| {
                event.restrict(variable, set.into())
            })
    }

    /// Returns `self` with `variable` assigned to `set`, replacing any
    /// previous assignment.
    pub fn with(mut self, variable: Variable, set: impl Into<CompositeSet>) -> Result<Self> {
        let set = set.into();
        variable.check_assignment(&set)?;
        self.assignments.insert(variable, set);
        Ok(self)
    }

    fn restrict(mut self, variable: Variable, set: CompositeSet) -> Result<Self> {
        variable.check_assignment(&set)?;
        let set = match self.assignments.get(&variable) {
            Some(existing) => existing.intersection(&set)?,
            None => set,
        };
        self.assignments.insert(variable, set);
        Ok(self)
    }

    /// The assigned variables, in name order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.assignments.keys()
    }

    pub fn get(&self, variable: &Variable) -> Option<&CompositeSet> {
        self.assignments.get(variable)
    }

    pub fn assignments(&self) -> impl Iterator<Item = (&Variable, &CompositeSet)> + '_ {
        self.assignments.iter()
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns true if no variable is assigned. This is the universal
    /// rectangle, not the empty one; see [`SimpleEvent::is_empty`].
    pub fn is_unrestricted(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Returns true if any factor of the product is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.values().any(CompositeSet::is_empty)
    }

    /// Variables assigned in `self`, `other`, or both.
    pub fn merge_variables(&self, other: &SimpleEvent) -> BTreeSet<Variable> {
        self.variables().chain(other.variables()).cloned().collect()
    }

    /// Assigns every variable of `variables` that is not yet a key to its
    /// full domain. The rectangle keeps the same points.
    pub fn fill_missing_variables<'a>(&mut self, variables: impl IntoIterator<Item = &'a Variable>) {
        for variable in variables {
            if !self.assignments.contains_key(variable) {
                self.assignments.insert(variable.clone(), variable.domain());
            }
        }
    }

    /// Intersects factor by factor. A variable assigned on one side only
    /// keeps that side's set.
    ///
    /// # Errors
    ///
    /// Fails if both sides assign the same variable sets of different kinds
    /// or over different domains.
    pub fn intersection(&self, other: &SimpleEvent) -> Result<SimpleEvent> {
        let mut assignments = self.assignments.clone();
        for (variable, set) in &other.assignments {
            let combined = match assignments.get(variable) {
                Some(existing) => existing.intersection(set)?,
                None => set.clone(),
            };
            assignments.insert(variable.clone(), combined);
        }
        Ok(SimpleEvent { assignments })
    }

    /// Decomposes the complement into pairwise disjoint rectangles.
    ///
    /// For assigned variables `v1..vk` in name order, piece `i` restricts
    /// `vi` to the complement of its set, keeps the original sets of
    /// `v1..v(i-1)` and leaves `v(i+1)..vk` at their full domain. Empty
    /// pieces are dropped. The universal rectangle complements to the empty
    /// event.
    pub fn complement(&self) -> Event {
        let mut pieces = Vec::with_capacity(self.assignments.len());
        for (i, set) in self.assignments.values().enumerate() {
            let assignments = self
                .assignments
                .iter()
                .enumerate()
                .map(|(j, (other, original))| {
                    let restriction = match j.cmp(&i) {
                        Ordering::Less => original.clone(),
                        Ordering::Equal => set.complement(),
                        Ordering::Greater => other.domain(),
                    };
                    (other.clone(), restriction)
                })
                .collect();
            let piece = SimpleEvent { assignments };
            if !piece.is_empty() {
                pieces.push(piece);
            }
        }
        Event::from(pieces)
    }

    /// The union of `self` and `other` if it is itself a rectangle: both
    /// assign the same variables and differ on at most one of them.
    pub(crate) fn merge(&self, other: &SimpleEvent) -> Result<Option<SimpleEvent>> {
        if !self.assignments.keys().eq(other.assignments.keys()) {
            return Ok(None);
        }
        let mut differing = self
            .assignments
            .iter()
            .zip(&other.assignments)
            .filter(|((_, left), (_, right))| left != right);
        match (differing.next(), differing.next()) {
            (None, _) => Ok(Some(self.clone())),
            (Some(((variable, left), (_, right))), None) => {
                let mut merged = self.clone();
                merged
                    .assignments
                    .insert(variable.clone(), left.union(right)?);
                Ok(Some(merged))
            }
            _ => Ok(None),
        }
    }
}

impl Display for SimpleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (variable, set)) in self.assignments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", variable, set)?;
        }
        write!(f, "}}")
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for SimpleEvent {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.assignments.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SimpleEvent {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Vec::<(Variable, CompositeSet)>::deserialize(deserializer)?;
        Self::from_assignments(raw).map_err(serde::de::Error::custom)
    }
}
