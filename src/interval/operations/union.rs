use crate::interval::SimpleInterval;

/// Merges `iv` into the last interval of `result` when they overlap or touch,
/// otherwise appends it. Expects `iv` to sort at or after the last element.
fn merge_into(result: &mut Vec<SimpleInterval>, iv: SimpleInterval) {
    if let Some(last) = result.last_mut() {
        if last.is_mergeable_with(&iv) {
            *last = last.merge(&iv);
            return;
        }
    }
    result.push(iv);
}

/// Brings an arbitrary sequence of simple intervals into canonical form:
/// sorted, with every overlapping or touching pair merged.
pub fn canonicalize(mut intervals: Vec<SimpleInterval>) -> Vec<SimpleInterval> {
    if intervals.len() <= 1 {
        return intervals;
    }
    let before = intervals.len();
    intervals.sort_unstable();
    let mut result = Vec::with_capacity(before);
    for iv in intervals {
        merge_into(&mut result, iv);
    }
    tracing::trace!(before, after = result.len(), "canonicalized interval");
    result
}

/// Computes the union of two interval sequences.
///
/// # Arguments
///
/// * `a` - First sequence of simple intervals
/// * `b` - Second sequence of simple intervals
///
/// # Returns
///
/// The canonical (sorted, non-overlapping, non-touching) union.
pub fn compute_union(a: &[SimpleInterval], b: &[SimpleInterval]) -> Vec<SimpleInterval> {
    let mut all = Vec::with_capacity(a.len() + b.len());
    all.extend_from_slice(a);
    all.extend_from_slice(b);
    canonicalize(all)
}
