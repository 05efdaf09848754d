use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum NewtonError {
    EmptyPolynomial,
    InvalidMinDelta { min_delta: f64 },
}

impl fmt::Display for NewtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPolynomial => {
                write!(f, "Newton's method needs at least one polynomial coefficient")
            }
            Self::InvalidMinDelta { min_delta } => {
                write!(f, "convergence threshold must be finite and non-negative: {}", min_delta)
            }
        }
    }
}

impl Error for NewtonError {}
