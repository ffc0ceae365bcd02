//! Discrete composite sets over finite, position-enumerated domains.

mod element;
#[allow(clippy::module_inception)]
mod set;

pub use element::SetElement;
pub use set::Set;
