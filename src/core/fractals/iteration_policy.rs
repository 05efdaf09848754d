use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_grid::IterationCount;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::newton::algorithm::NewtonAlgorithm;

#[derive(Debug, Clone, PartialEq)]
pub enum IterationPolicy {
    EscapeTime(EscapeTimeAlgorithm),
    Newton(NewtonAlgorithm),
}

impl FractalAlgorithm for IterationPolicy {
    #[inline]
    fn compute(&self, point: Complex, max_iterations: u32) -> IterationCount {
        match self {
            Self::EscapeTime(algorithm) => algorithm.compute(point, max_iterations),
            Self::Newton(algorithm) => algorithm.compute(point, max_iterations),
        }
    }
}

impl From<EscapeTimeAlgorithm> for IterationPolicy {
    fn from(algorithm: EscapeTimeAlgorithm) -> Self {
        Self::EscapeTime(algorithm)
    }
}

impl From<NewtonAlgorithm> for IterationPolicy {
    fn from(algorithm: NewtonAlgorithm) -> Self {
        Self::Newton(algorithm)
    }
}
