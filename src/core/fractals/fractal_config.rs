use crate::core::{
    data::{
        complex::Complex,
        polynomial::Polynomial,
        viewport::{Viewport, ViewportError},
    },
    fractals::{
        colour_mapping::kinds::ColourSchemeKind,
        escape_time::algorithm::EscapeTimeAlgorithm,
        iteration_policy::IterationPolicy,
        newton::{algorithm::NewtonAlgorithm, approximator::DEFAULT_MIN_DELTA, errors::NewtonError},
    },
};

pub const JULIA_DEFAULT_C_DELTA: f64 = 1.0 / 128.0;
pub const JULIA_MIN_C_DELTA: f64 = 1.0 / 2048.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
    Newton,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia, Self::Newton];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::Newton => "Newton",
        }
    }

    /// Lower-case name used for default output files.
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::Newton => "newton",
        }
    }
}

impl std::fmt::Display for FractalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl std::str::FromStr for FractalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.file_stem().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown fractal kind '{}'", s))
    }
}

/// Horizontal extent plus vertical centre; the vertical extent follows from
/// the pixel aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneRegion {
    pub x_min: f64,
    pub x_max: f64,
    pub y_center: f64,
}

impl PlaneRegion {
    pub fn viewport(&self, width: u32, height: u32) -> Result<Viewport, ViewportError> {
        Viewport::new(self.x_min, self.x_max, self.y_center, width, height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub region: PlaneRegion,
    pub max_iterations: u32,
    pub colour_scheme_kind: ColourSchemeKind,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            region: PlaneRegion {
                x_min: -2.1,
                x_max: 1.2,
                y_center: 0.0,
            },
            max_iterations: 256,
            colour_scheme_kind: ColourSchemeKind::MandelbrotLinear,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaConfig {
    pub region: PlaneRegion,
    pub max_iterations: u32,
    pub colour_scheme_kind: ColourSchemeKind,
    pub c: Complex,
    pub c_delta: f64,
}

impl Default for JuliaConfig {
    fn default() -> Self {
        Self {
            region: PlaneRegion {
                x_min: -2.0,
                x_max: 2.0,
                y_center: 0.0,
            },
            max_iterations: 128,
            colour_scheme_kind: ColourSchemeKind::Binary,
            c: Complex::new(0.365, 0.11),
            c_delta: JULIA_DEFAULT_C_DELTA,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewtonConfig {
    pub region: PlaneRegion,
    pub max_iterations: u32,
    pub colour_scheme_kind: ColourSchemeKind,
    pub polynomial: Polynomial,
    pub min_delta: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            region: PlaneRegion {
                x_min: -2.0,
                x_max: 2.0,
                y_center: 0.0,
            },
            max_iterations: 128,
            colour_scheme_kind: ColourSchemeKind::NewtonLinear,
            // -1 + z + z² + i·z³
            polynomial: Polynomial::from_slice(&[
                Complex::NEG_ONE,
                Complex::ONE,
                Complex::ONE,
                Complex::I,
            ]),
            min_delta: DEFAULT_MIN_DELTA,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FractalConfig {
    Mandelbrot(MandelbrotConfig),
    Julia(JuliaConfig),
    Newton(NewtonConfig),
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self::for_kind(FractalKind::default())
    }
}

impl FractalConfig {
    #[must_use]
    pub fn for_kind(kind: FractalKind) -> Self {
        match kind {
            FractalKind::Mandelbrot => Self::Mandelbrot(MandelbrotConfig::default()),
            FractalKind::Julia => Self::Julia(JuliaConfig::default()),
            FractalKind::Newton => Self::Newton(NewtonConfig::default()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        match self {
            Self::Mandelbrot(_) => FractalKind::Mandelbrot,
            Self::Julia(_) => FractalKind::Julia,
            Self::Newton(_) => FractalKind::Newton,
        }
    }

    #[must_use]
    pub fn region(&self) -> PlaneRegion {
        match self {
            Self::Mandelbrot(config) => config.region,
            Self::Julia(config) => config.region,
            Self::Newton(config) => config.region,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        match self {
            Self::Mandelbrot(config) => config.max_iterations,
            Self::Julia(config) => config.max_iterations,
            Self::Newton(config) => config.max_iterations,
        }
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) {
        match self {
            Self::Mandelbrot(config) => config.max_iterations = max_iterations,
            Self::Julia(config) => config.max_iterations = max_iterations,
            Self::Newton(config) => config.max_iterations = max_iterations,
        }
    }

    #[must_use]
    pub fn colour_scheme_kind(&self) -> ColourSchemeKind {
        match self {
            Self::Mandelbrot(config) => config.colour_scheme_kind,
            Self::Julia(config) => config.colour_scheme_kind,
            Self::Newton(config) => config.colour_scheme_kind,
        }
    }

    pub fn set_colour_scheme_kind(&mut self, kind: ColourSchemeKind) {
        match self {
            Self::Mandelbrot(config) => config.colour_scheme_kind = kind,
            Self::Julia(config) => config.colour_scheme_kind = kind,
            Self::Newton(config) => config.colour_scheme_kind = kind,
        }
    }

    /// Whether the legend starts visible for this fractal.
    #[must_use]
    pub fn shows_key_by_default(&self) -> bool {
        !matches!(self, Self::Newton(_))
    }

    pub fn build_policy(&self) -> Result<IterationPolicy, NewtonError> {
        Ok(match self {
            Self::Mandelbrot(_) => EscapeTimeAlgorithm::mandelbrot().into(),
            Self::Julia(config) => EscapeTimeAlgorithm::julia(config.c).into(),
            Self::Newton(config) => {
                NewtonAlgorithm::new(config.polynomial.clone(), config.min_delta)?.into()
            }
        })
    }
}
