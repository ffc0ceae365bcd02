//! sigma_events - set algebra over products of continuous and symbolic variables
//!
//! Builds the events of a sigma-algebra over a product space and combines
//! them with unions, intersections and complements. Continuous axes are
//! described by canonical unions of intervals, symbolic axes by subsets of a
//! finite enumerated domain.
//!
//! ```
//! use sigma_events::{Event, Interval, Set, SimpleEvent, Variable};
//!
//! let x = Variable::continuous("x");
//! let y = Variable::symbolic("y", 3);
//!
//! let rectangle = SimpleEvent::universe()
//!     .with(x, Interval::closed_open(3.0, 5.0))?
//!     .with(y, Set::new(3, [0, 1])?)?;
//!
//! let outside = rectangle.complement();
//! assert_eq!(outside.len(), 2);
//! assert!(outside.is_disjoint()?);
//! assert!(Event::from(rectangle).intersection(&outside)?.is_empty());
//! # Ok::<(), sigma_events::AlgebraError>(())
//! ```

pub mod algebra;
pub mod composite;
pub mod error;
pub mod interval;
pub mod product;
pub mod set;
pub mod variable;

pub use algebra::SetAlgebra;
pub use composite::CompositeSet;
pub use error::{AlgebraError, Result};
pub use interval::{BorderType, Bound, Interval, SimpleInterval};
pub use product::{Event, SimpleEvent};
pub use set::{Set, SetElement};
pub use variable::{Variable, VariableKind};
