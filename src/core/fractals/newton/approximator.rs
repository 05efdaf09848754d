use crate::core::data::complex::{Complex, ComplexArithmeticError};
use crate::core::data::polynomial::Polynomial;
use crate::core::fractals::newton::errors::NewtonError;

pub const DEFAULT_MIN_DELTA: f64 = 0.01;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Result of one root search: the attractor reached, if any, and the number of
/// Newton steps taken. `attractor` is `None` when the iteration cap was hit
/// before successive steps moved less than the threshold.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NewtonOutcome {
    pub attractor: Option<Complex>,
    pub iterations: u32,
}

#[derive(Debug, Clone, PartialEq, Hash)]
pub struct NewtonApproximator {
    polynomial: Polynomial,
    derivative: Polynomial,
}

impl NewtonApproximator {
    pub fn new(polynomial: Polynomial) -> Result<Self, NewtonError> {
        if polynomial.is_zero() {
            return Err(NewtonError::EmptyPolynomial);
        }

        let derivative = polynomial.derivative();

        Ok(Self {
            polynomial,
            derivative,
        })
    }

    #[must_use]
    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    #[must_use]
    pub fn derivative(&self) -> &Polynomial {
        &self.derivative
    }

    pub fn find_attractor_default(
        &self,
        start: Complex,
    ) -> Result<NewtonOutcome, ComplexArithmeticError> {
        self.find_attractor(start, DEFAULT_MIN_DELTA, DEFAULT_MAX_ITERATIONS)
    }

    /// Iterates `z <- z - p(z)/p'(z)` from `start` until a step moves at most
    /// `min_delta` or `max_iterations` steps have been taken.
    ///
    /// A vanishing derivative is reported as
    /// [`ComplexArithmeticError::SingularDerivative`] rather than stepping to
    /// infinity.
    pub fn find_attractor(
        &self,
        start: Complex,
        min_delta: f64,
        max_iterations: u32,
    ) -> Result<NewtonOutcome, ComplexArithmeticError> {
        let mut root = start;
        let mut iterations = 0;

        loop {
            iterations += 1;
            let last = root;

            let slope = self.derivative.at(root);
            if slope.magnitude_squared() == 0.0 {
                return Err(ComplexArithmeticError::SingularDerivative { point: root });
            }

            root = root - self.polynomial.at(root).divide(slope)?;
            let delta = (root - last).magnitude();

            if delta <= min_delta {
                return Ok(NewtonOutcome {
                    attractor: Some(root),
                    iterations,
                });
            }

            if iterations >= max_iterations {
                return Ok(NewtonOutcome {
                    attractor: None,
                    iterations,
                });
            }
        }
    }
}
