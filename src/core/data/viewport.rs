use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

/// Pixels moved by a single pan command.
pub const PAN_SHIFT_PIXELS: f64 = 200.0;
pub const ZOOM_IN_FACTOR: f64 = 0.666_666_66;
pub const ZOOM_OUT_FACTOR: f64 = 1.5;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidPixelSize { width: u32, height: u32 },
    InvalidRange { x_min: f64, x_max: f64 },
    NonFiniteCenter { y_center: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPixelSize { width, height } => {
                write!(f, "viewport pixel size must be positive: {}x{}", width, height)
            }
            Self::InvalidRange { x_min, x_max } => {
                write!(
                    f,
                    "viewport x-range must be finite and non-empty: [{}, {}]",
                    x_min, x_max
                )
            }
            Self::NonFiniteCenter { y_center } => {
                write!(f, "viewport y-center must be finite: {}", y_center)
            }
        }
    }
}

impl Error for ViewportError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

impl PanDirection {
    /// Pixel offsets for `Viewport::pan_by`; `Up` is towards larger imaginary parts.
    #[must_use]
    pub const fn pixel_offsets(self) -> (f64, f64) {
        match self {
            Self::Left => (-PAN_SHIFT_PIXELS, 0.0),
            Self::Right => (PAN_SHIFT_PIXELS, 0.0),
            Self::Up => (0.0, PAN_SHIFT_PIXELS),
            Self::Down => (0.0, -PAN_SHIFT_PIXELS),
        }
    }
}

/// The region of the complex plane mapped onto a `width x height` pixel grid.
///
/// Only the x-bounds and the vertical center are stored as user state; the
/// pixel pitch and the y-bounds are derived from them and recomputed by every
/// method that mutates the viewport, so they are never stale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_center: f64,
    width: u32,
    height: u32,
    zoom_depth: f64,
    delta: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(
        x_min: f64,
        x_max: f64,
        y_center: f64,
        width: u32,
        height: u32,
    ) -> Result<Self, ViewportError> {
        Self::validate_size(width, height)?;
        Self::validate_range(x_min, x_max)?;

        if !y_center.is_finite() {
            return Err(ViewportError::NonFiniteCenter { y_center });
        }

        let mut viewport = Self {
            x_min,
            x_max,
            y_center,
            width,
            height,
            zoom_depth: 1.0,
            delta: 0.0,
            y_min: 0.0,
            y_max: 0.0,
        };
        viewport.recompute_derived();

        Ok(viewport)
    }

    fn validate_size(width: u32, height: u32) -> Result<(), ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidPixelSize { width, height });
        }

        Ok(())
    }

    fn validate_range(x_min: f64, x_max: f64) -> Result<(), ViewportError> {
        if !x_min.is_finite() || !x_max.is_finite() || x_max <= x_min {
            return Err(ViewportError::InvalidRange { x_min, x_max });
        }

        Ok(())
    }

    fn recompute_derived(&mut self) {
        self.delta = (self.x_max - self.x_min) / f64::from(self.width);

        let y_range = self.delta * f64::from(self.height) / 2.0;
        self.y_max = self.y_center + y_range;
        self.y_min = self.y_center - y_range;
    }

    /// Maps a pixel to the plane. Pixel rows grow downwards while imaginary
    /// parts grow upwards, hence the subtraction on the y-axis.
    #[must_use]
    pub fn pixel_to_point(&self, x: u32, y: u32) -> Complex {
        Complex::new(
            self.x_min + self.delta * f64::from(x),
            self.y_max - self.delta * f64::from(y),
        )
    }

    pub fn pan_by(&mut self, dx_pixels: f64, dy_pixels: f64) {
        let dx = self.delta * dx_pixels;
        self.x_min += dx;
        self.x_max += dx;
        self.y_center += self.delta * dy_pixels;
        self.recompute_derived();
    }

    pub fn pan(&mut self, direction: PanDirection) {
        let (dx, dy) = direction.pixel_offsets();
        self.pan_by(dx, dy);
    }

    /// Zoom depth is multiplied by the opposite factor, so zooming in grows it.
    pub fn zoom_in(&mut self) {
        self.scale_about_center(ZOOM_IN_FACTOR);
        self.zoom_depth *= ZOOM_OUT_FACTOR;
    }

    pub fn zoom_out(&mut self) {
        self.scale_about_center(ZOOM_OUT_FACTOR);
        self.zoom_depth *= ZOOM_IN_FACTOR;
    }

    fn scale_about_center(&mut self, factor: f64) {
        let center = (self.x_min + self.x_max) / 2.0;
        let half_width = self.x_max - center;
        self.x_min = center - factor * half_width;
        self.x_max = center + factor * half_width;
        self.recompute_derived();
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ViewportError> {
        Self::validate_size(width, height)?;

        self.width = width;
        self.height = height;
        self.recompute_derived();

        Ok(())
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_center(&self) -> f64 {
        self.y_center
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn zoom_depth(&self) -> f64 {
        self.zoom_depth
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
