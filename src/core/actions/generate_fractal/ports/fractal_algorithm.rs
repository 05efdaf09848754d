use crate::core::data::complex::Complex;
use crate::core::data::iteration_grid::IterationCount;

/// An iteration rule evaluated once per pixel.
///
/// Implementations must be pure: the same point and bound always produce the
/// same count, with no state carried between calls, so one instance can be
/// shared by every worker of a frame.
pub trait FractalAlgorithm {
    fn compute(&self, point: Complex, max_iterations: u32) -> IterationCount;
}
