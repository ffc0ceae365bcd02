mod complement;
mod intersection;
mod union;

pub use complement::compute_complement;
pub use intersection::compute_intersection;
pub use union::{canonicalize, compute_union};

#[cfg(debug_assertions)]
pub mod assertions;

#[cfg(not(debug_assertions))]
pub mod assertions {
    use crate::interval::SimpleInterval;

    pub fn is_canonical(_intervals: &[SimpleInterval]) -> bool {
        true
    }
}
