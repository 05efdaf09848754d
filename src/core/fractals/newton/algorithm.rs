use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_grid::{IterationCount, NO_RESULT};
use crate::core::data::polynomial::Polynomial;
use crate::core::fractals::newton::approximator::{DEFAULT_MIN_DELTA, NewtonApproximator};
use crate::core::fractals::newton::errors::NewtonError;

/// Colours each start point by how many Newton steps it needs to settle on a
/// root of the polynomial.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonAlgorithm {
    approximator: NewtonApproximator,
    min_delta: f64,
}

impl NewtonAlgorithm {
    pub fn new(polynomial: Polynomial, min_delta: f64) -> Result<Self, NewtonError> {
        if !min_delta.is_finite() || min_delta < 0.0 {
            return Err(NewtonError::InvalidMinDelta { min_delta });
        }

        Ok(Self {
            approximator: NewtonApproximator::new(polynomial)?,
            min_delta,
        })
    }

    pub fn with_default_min_delta(polynomial: Polynomial) -> Result<Self, NewtonError> {
        Self::new(polynomial, DEFAULT_MIN_DELTA)
    }

    #[must_use]
    pub fn approximator(&self) -> &NewtonApproximator {
        &self.approximator
    }

    #[must_use]
    pub fn min_delta(&self) -> f64 {
        self.min_delta
    }
}

impl FractalAlgorithm for NewtonAlgorithm {
    /// Non-convergence and a vanishing derivative both end up as [`NO_RESULT`].
    fn compute(&self, point: Complex, max_iterations: u32) -> IterationCount {
        match self
            .approximator
            .find_attractor(point, self.min_delta, max_iterations)
        {
            Ok(outcome) if outcome.attractor.is_some() => {
                IterationCount::try_from(outcome.iterations).unwrap_or(NO_RESULT)
            }
            Ok(_) | Err(_) => NO_RESULT,
        }
    }
}
