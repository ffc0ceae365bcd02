use super::union::canonicalize;
use crate::interval::SimpleInterval;

/// Computes the intersection of two interval sequences.
///
/// Every member of `a` is intersected with every member of `b`
/// (`|a|·|b|` pairs); empty overlaps are dropped and the result is
/// canonicalized.
///
/// # Arguments
///
/// * `a` - First sequence of simple intervals
/// * `b` - Second sequence of simple intervals
///
/// # Returns
///
/// A canonical vector of intervals contained in both inputs.
pub fn compute_intersection(a: &[SimpleInterval], b: &[SimpleInterval]) -> Vec<SimpleInterval> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let pieces: Vec<SimpleInterval> = a
        .iter()
        .flat_map(|ia| b.iter().filter_map(move |ib| ia.intersection(ib)))
        .collect();

    canonicalize(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::BorderType::{self, Closed, Open};

    fn si(lower: f64, upper: f64, left: BorderType, right: BorderType) -> SimpleInterval {
        SimpleInterval::new(lower, upper, left, right).unwrap()
    }

    fn cl(lower: f64, upper: f64) -> SimpleInterval {
        si(lower, upper, Closed, Closed)
    }

    #[test]
    fn intersection_disjoint_sets() {
        let a = vec![cl(0.0, 10.0)];
        let b = vec![cl(20.0, 30.0)];
        assert!(compute_intersection(&a, &b).is_empty());
    }

    #[test]
    fn intersection_one_empty() {
        let a = vec![cl(0.0, 50.0)];
        let b: Vec<SimpleInterval> = vec![];
        assert!(compute_intersection(&a, &b).is_empty());
        assert!(compute_intersection(&b, &a).is_empty());
    }

    #[test]
    fn intersection_multiple_intervals() {
        // A: [0, 30], [50, 80]
        // B: [10, 60)
        // Result: [10, 30], [50, 60)
        let a = vec![cl(0.0, 30.0), cl(50.0, 80.0)];
        let b = vec![si(10.0, 60.0, Closed, Open)];
        let result = compute_intersection(&a, &b);
        assert_eq!(result, vec![cl(10.0, 30.0), si(50.0, 60.0, Closed, Open)]);
    }

    #[test]
    fn intersection_touching_endpoints() {
        // Both closed at 50: a single shared point.
        let a = vec![cl(0.0, 50.0)];
        let b = vec![cl(50.0, 100.0)];
        assert_eq!(compute_intersection(&a, &b), vec![cl(50.0, 50.0)]);

        // One side open at 50: nothing shared.
        let c = vec![si(0.0, 50.0, Closed, Open)];
        assert!(compute_intersection(&c, &b).is_empty());
    }
}
