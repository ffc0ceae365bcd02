use thiserror::Error;

/// Errors that can occur while building or combining composite sets and events.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AlgebraError {
    #[error("Invalid interval bounds: lower {lower} must not exceed upper {upper}")]
    InvalidBounds { lower: f64, upper: f64 },

    #[error("Element index {index} is outside the domain of size {domain_size}")]
    IndexOutOfDomain { index: usize, domain_size: usize },

    #[error("Cannot combine sets over domains of size {left} and {right}")]
    DomainMismatch { left: usize, right: usize },

    #[error("Expected {expected} but found {found}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Unknown element '{element}' for variable '{variable}'")]
    UnknownElement { variable: String, element: String },
}

/// Shorthand result type used across the crate.
pub type Result<T> = std::result::Result<T, AlgebraError>;
