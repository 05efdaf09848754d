use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexArithmeticError {
    DivisionByZero,
    SingularDerivative { point: Complex },
}

impl fmt::Display for ComplexArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by a zero-magnitude complex number"),
            Self::SingularDerivative { point } => write!(f, "derivative vanishes at {}", point),
        }
    }
}

impl Error for ComplexArithmeticError {}

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);
    pub const NEG_ONE: Self = Self::new(-1.0, 0.0);
    pub const I: Self = Self::new(0.0, 1.0);
    pub const NEG_I: Self = Self::new(0.0, -1.0);

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub const fn from_real(real: f64) -> Self {
        Self::new(real, 0.0)
    }

    #[must_use]
    pub const fn from_imag(imag: f64) -> Self {
        Self::new(0.0, imag)
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.real, -self.imag)
    }

    pub fn divide(&self, divisor: Self) -> Result<Self, ComplexArithmeticError> {
        let magnitude_squared = divisor.magnitude_squared();

        if magnitude_squared == 0.0 {
            return Err(ComplexArithmeticError::DivisionByZero);
        }

        Ok(*self * divisor.conjugate() * (1.0 / magnitude_squared))
    }

    pub fn reciprocal(&self) -> Result<Self, ComplexArithmeticError> {
        Self::ONE.divide(*self)
    }

    /// Integer power by square-and-multiply, walking the exponent from its most
    /// significant bit. `power(0)` is `1` for every base, zero included.
    pub fn power(&self, exponent: i32) -> Result<Self, ComplexArithmeticError> {
        if exponent == 0 {
            return Ok(Self::ONE);
        }

        if exponent < 0 {
            return Ok(self.reciprocal()?.powu(exponent.unsigned_abs()));
        }

        Ok(self.powu(exponent.unsigned_abs()))
    }

    #[must_use]
    pub fn powu(&self, exponent: u32) -> Self {
        let mut result = Self::ONE;
        let mut mask = 1u32 << (u32::BITS - 1);

        while mask != 0 {
            result = result * result;
            if exponent & mask != 0 {
                result = result * *self;
            }
            mask >>= 1;
        }

        result
    }
}

// +0.0 and -0.0 compare equal, so they must hash identically; adding +0.0
// maps -0.0 onto +0.0 and leaves every other value untouched.
impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.real + 0.0).to_bits().hash(state);
        (self.imag + 0.0).to_bits().hash(state);
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5} + {:.5}i", self.real, self.imag)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            real: -self.real,
            imag: -self.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            real: self.real * scalar,
            imag: self.imag * scalar,
        }
    }
}
