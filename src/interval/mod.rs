//! Continuous composite sets: unions of ranges on the real line.
//!
//! [`SimpleInterval`] is one atomic range with open or closed endpoints;
//! [`Interval`] is the canonical disjoint union of such ranges. The pure
//! slice-level algorithms live in [`operations`].

mod bound;
#[allow(clippy::module_inception)]
mod interval;
pub mod operations;
mod simple_interval;

pub use bound::{BorderType, Bound};
pub use interval::Interval;
pub use simple_interval::SimpleInterval;
