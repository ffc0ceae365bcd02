//! Canonical-form checks for simple interval sequences.

use crate::interval::SimpleInterval;

/// Returns true if `intervals` is canonical: strictly increasing and no two
/// neighbours overlap or touch in a way that would merge them.
pub fn is_canonical(intervals: &[SimpleInterval]) -> bool {
    intervals.windows(2).all(|w| {
        let prev = &w[0];
        let curr = &w[1];
        prev < curr && !prev.is_mergeable_with(curr)
    })
}
