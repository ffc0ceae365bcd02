use super::intersection::compute_intersection;
use crate::interval::SimpleInterval;

/// Returns the complement of an interval sequence on the real line.
///
/// Each member is complemented on its own and the complements are
/// intersected together, starting from the whole real line.
pub fn compute_complement(intervals: &[SimpleInterval]) -> Vec<SimpleInterval> {
    intervals
        .iter()
        .fold(vec![SimpleInterval::reals()], |acc, iv| {
            compute_intersection(&acc, &iv.complement())
        })
}
