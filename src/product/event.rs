use std::collections::BTreeSet;
use std::fmt::Display;
use std::ops::Deref;

use crate::algebra::SetAlgebra;
use crate::error::Result;
use crate::product::SimpleEvent;
use crate::variable::Variable;

/// A union of rectangles: a general measurable subset of the product space.
///
/// Members may overlap and may be empty; the representation is only
/// minimized on demand via [`Event::simplify`] or [`Event::make_disjoint`].
/// Structural equality therefore compares representations. Use
/// [`SetAlgebra::equivalent`] to compare the points two events contain.
///
/// An event with no members is empty. [`Event::universe`] holds one
/// unrestricted rectangle.
///
/// # Examples
///
/// ```
/// use sigma_events::{Event, Interval, SetAlgebra, SimpleEvent, Variable};
///
/// let x = Variable::continuous("x");
/// let low = SimpleEvent::universe().with(x.clone(), Interval::closed(0.0, 1.0)).unwrap();
/// let high = SimpleEvent::universe().with(x, Interval::closed(1.0, 2.0)).unwrap();
///
/// let event = Event::from(low).union(&Event::from(high));
/// assert_eq!(event.len(), 2);
///
/// let merged = event.simplify().unwrap();
/// assert_eq!(merged.to_string(), "{x: [0, 2]}");
/// assert!(event.equivalent(&merged).unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Event(Vec<SimpleEvent>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl Event {
    /// The event with no members.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// The whole product space.
    pub fn universe() -> Self {
        Self(vec![SimpleEvent::universe()])
    }

    pub fn simple_events(&self) -> &[SimpleEvent] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<SimpleEvent> {
        self.0
    }

    /// Every variable assigned by at least one member.
    pub fn variables(&self) -> BTreeSet<Variable> {
        self.0
            .iter()
            .flat_map(SimpleEvent::variables)
            .cloned()
            .collect()
    }

    /// Completes every member's key set with `variables`.
    pub fn fill_missing_variables<'a>(
        &mut self,
        variables: impl IntoIterator<Item = &'a Variable> + Clone,
    ) {
        for member in &mut self.0 {
            member.fill_missing_variables(variables.clone());
        }
    }

    /// Completes every member's key set with the variables of the whole
    /// event, so all members share one key set.
    pub fn complete_variables(&mut self) {
        let variables = self.variables();
        self.fill_missing_variables(&variables);
    }
}

// ─────────────────────────────────────────────────────────────────────
// Set operations
// ─────────────────────────────────────────────────────────────────────

impl Event {
    /// Concatenates the members of both events.
    pub fn union(&self, other: &Event) -> Event {
        Self(self.0.iter().chain(&other.0).cloned().collect())
    }

    /// Intersects every member of `self` with every member of `other`,
    /// dropping empty results.
    pub fn intersection(&self, other: &Event) -> Result<Event> {
        let mut members = Vec::with_capacity(self.0.len() * other.0.len());
        for left in &self.0 {
            for right in &other.0 {
                let member = left.intersection(right)?;
                if !member.is_empty() {
                    members.push(member);
                }
            }
        }
        tracing::debug!(
            left = self.0.len(),
            right = other.0.len(),
            result = members.len(),
            "intersected events"
        );
        Ok(Self(members))
    }

    /// Intersects the complements of all members, starting from the
    /// universe.
    pub fn complement(&self) -> Result<Event> {
        let result = self
            .0
            .iter()
            .try_fold(Event::universe(), |acc, member| {
                acc.intersection(&member.complement())
            })?;
        tracing::debug!(
            before = self.0.len(),
            after = result.0.len(),
            "complemented event"
        );
        Ok(result)
    }

    /// Every point of `self` not in `other`.
    pub fn difference(&self, other: &Event) -> Result<Event> {
        self.intersection(&other.complement()?)
    }

    /// Returns true if every member is empty. An event with no members is
    /// empty.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(SimpleEvent::is_empty)
    }

    /// Returns true if no two members share a point.
    pub fn is_disjoint(&self) -> Result<bool> {
        for (i, left) in self.0.iter().enumerate() {
            for right in &self.0[i + 1..] {
                if !left.intersection(right)?.is_empty() {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// An equivalent event whose members are pairwise disjoint.
    ///
    /// Each member is cut down to the part not covered by the members kept
    /// before it. Empty members vanish.
    pub fn make_disjoint(&self) -> Result<Event> {
        let mut disjoint: Vec<SimpleEvent> = Vec::new();
        for member in self.0.iter().filter(|member| !member.is_empty()) {
            let mut pieces = Event::from(member.clone());
            for kept in &disjoint {
                pieces = pieces.intersection(&kept.complement())?;
                if pieces.0.is_empty() {
                    break;
                }
            }
            disjoint.extend(pieces.0);
        }
        tracing::debug!(
            before = self.0.len(),
            after = disjoint.len(),
            "made event disjoint"
        );
        Ok(Self(disjoint))
    }

    /// A smaller equivalent representation.
    ///
    /// Drops empty members, completes key sets, then repeatedly merges two
    /// members that agree on all variables but at most one.
    pub fn simplify(&self) -> Result<Event> {
        let variables = self.variables();
        let mut members: Vec<SimpleEvent> = self
            .0
            .iter()
            .filter(|member| !member.is_empty())
            .map(|member| {
                let mut member = member.clone();
                member.fill_missing_variables(&variables);
                member
            })
            .collect();

        'search: loop {
            for i in 0..members.len() {
                for j in i + 1..members.len() {
                    if let Some(merged) = members[i].merge(&members[j])? {
                        members[i] = merged;
                        members.remove(j);
                        continue 'search;
                    }
                }
            }
            break;
        }

        tracing::debug!(
            before = self.0.len(),
            after = members.len(),
            "simplified event"
        );
        Ok(Self(members))
    }
}

impl SetAlgebra for Event {
    fn union(&self, other: &Self) -> Result<Self> {
        Ok(Event::union(self, other))
    }

    fn intersection(&self, other: &Self) -> Result<Self> {
        Event::intersection(self, other)
    }

    fn complement(&self) -> Result<Self> {
        Event::complement(self)
    }

    fn is_empty(&self) -> bool {
        Event::is_empty(self)
    }

    fn difference(&self, other: &Self) -> Result<Self> {
        Event::difference(self, other)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Read access
// ─────────────────────────────────────────────────────────────────────

impl Deref for Event {
    type Target = [SimpleEvent];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<SimpleEvent> for Event {
    fn from(member: SimpleEvent) -> Self {
        Self(vec![member])
    }
}

impl From<Vec<SimpleEvent>> for Event {
    fn from(members: Vec<SimpleEvent>) -> Self {
        Self(members)
    }
}

impl FromIterator<SimpleEvent> for Event {
    fn from_iter<I: IntoIterator<Item = SimpleEvent>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Event {
    type Item = SimpleEvent;
    type IntoIter = std::vec::IntoIter<SimpleEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Event {
    type Item = &'a SimpleEvent;
    type IntoIter = std::slice::Iter<'a, SimpleEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "∅");
        }
        for (i, member) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " u ")?;
            }
            write!(f, "{}", member)?;
        }
        Ok(())
    }
}
