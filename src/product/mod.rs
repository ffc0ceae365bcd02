//! The product algebra over several variables.
//!
//! A [`SimpleEvent`] restricts each variable to one composite set and denotes
//! the Cartesian product of those sets. An [`Event`] is a union of simple
//! events and can describe any set the algebra generates.
//!
//! Complements are computed by decomposition into disjoint rectangles, so
//! complement results never double-count a region of the space.

mod event;
mod simple_event;


pub use event::Event;
pub use simple_event::SimpleEvent;
