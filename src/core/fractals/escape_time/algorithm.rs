use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_grid::IterationCount;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// How the constant `c` of `z -> z² + c` is chosen for a start point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConstantSelector {
    /// Mandelbrot: `c` is the start point itself.
    SelfPoint,
    /// Julia: `c` is fixed for the whole plane.
    Fixed(Complex),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    constant: ConstantSelector,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(constant: ConstantSelector) -> Self {
        Self { constant }
    }

    #[must_use]
    pub fn mandelbrot() -> Self {
        Self::new(ConstantSelector::SelfPoint)
    }

    #[must_use]
    pub fn julia(c: Complex) -> Self {
        Self::new(ConstantSelector::Fixed(c))
    }

    #[must_use]
    pub fn constant(&self) -> ConstantSelector {
        self.constant
    }

    /// Iterations taken for `|z|` to reach 2, or `max_iterations` when it never
    /// does within the bound.
    #[must_use]
    pub fn escape_count(&self, start: Complex, max_iterations: u32) -> u32 {
        let c = match self.constant {
            ConstantSelector::SelfPoint => start,
            ConstantSelector::Fixed(c) => c,
        };

        let mut z = start;
        let mut count = 0;

        while z.magnitude_squared() < ESCAPE_RADIUS_SQUARED && count < max_iterations {
            z = z * z + c;
            count += 1;
        }

        count
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    fn compute(&self, point: Complex, max_iterations: u32) -> IterationCount {
        IterationCount::try_from(self.escape_count(point, max_iterations))
            .unwrap_or(IterationCount::MAX)
    }
}
