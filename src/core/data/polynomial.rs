use crate::core::data::complex::Complex;
use std::fmt;

/// Polynomial over the complex numbers, `coefficients[d]` holding the
/// coefficient of `z^d`.
///
/// `coefficient_count` is the length of the coefficient sequence, which is one
/// more than the highest exponent for any non-zero polynomial.
#[derive(Debug, Clone, PartialEq, Hash, Default)]
pub struct Polynomial {
    coefficients: Vec<Complex>,
}

impl Polynomial {
    #[must_use]
    pub fn new(coefficients: Vec<Complex>) -> Self {
        Self { coefficients }
    }

    #[must_use]
    pub fn from_slice(coefficients: &[Complex]) -> Self {
        Self::new(coefficients.to_vec())
    }

    /// The polynomial with no coefficients, which evaluates to zero everywhere.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// `z^|n| - 1`, whose roots are the `|n|`th roots of unity. `n == 0`
    /// yields the constant `-1`.
    #[must_use]
    pub fn nth_roots_of_unity(n: i32) -> Self {
        let n = n.unsigned_abs() as usize;

        if n == 0 {
            return Self::new(vec![Complex::NEG_ONE]);
        }

        let mut coefficients = vec![Complex::ZERO; n + 1];
        coefficients[0] = Complex::NEG_ONE;
        coefficients[n] = Complex::ONE;

        Self::new(coefficients)
    }

    #[must_use]
    pub fn coefficients(&self) -> &[Complex] {
        &self.coefficients
    }

    #[must_use]
    pub fn coefficient_count(&self) -> usize {
        self.coefficients.len()
    }

    #[must_use]
    pub fn highest_exponent(&self) -> Option<usize> {
        self.coefficient_count().checked_sub(1)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    #[must_use]
    pub fn at(&self, point: Complex) -> Complex {
        self.coefficients
            .iter()
            .enumerate()
            .filter(|(_, coefficient)| **coefficient != Complex::ZERO)
            .fold(Complex::ZERO, |sum, (exponent, coefficient)| {
                sum + *coefficient * point.powu(exponent as u32)
            })
    }

    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.coefficient_count() < 2 {
            return Self::zero();
        }

        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(exponent, coefficient)| *coefficient * exponent as f64)
            .collect();

        Self::new(coefficients)
    }
}

impl From<Vec<Complex>> for Polynomial {
    fn from(coefficients: Vec<Complex>) -> Self {
        Self::new(coefficients)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((constant, rest)) = self.coefficients.split_first() else {
            return write!(f, "<zero polynomial>");
        };

        for (index, coefficient) in rest.iter().enumerate().rev() {
            write!(f, "({})z^{} + ", coefficient, index + 1)?;
        }

        write!(f, "{}", constant)
    }
}
