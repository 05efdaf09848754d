use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    BoundsMismatch {
        pixel_count: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_count,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel count {} does not match buffer size {}",
                    pixel_count, buffer_size
                )
            }
            Self::PixelOutsideBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    x, y, width, height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// One packed `0xRRGGBB` value per pixel, row-major.
pub type PixelBufferData = Vec<u32>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; width as usize * height as usize],
        }
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let pixel_count = width as usize * height as usize;

        if pixel_count != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_count,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
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
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(x, y)?;
        Ok(Colour::from_packed(self.buffer[index]))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(x, y)?;
        self.buffer[index] = colour.packed();

        Ok(())
    }

    fn index_of(&self, x: u32, y: u32) -> Result<usize, PixelBufferError> {
        if x >= self.width || y >= self.height {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Unpacks to interleaved 8-bit RGB, three bytes per pixel.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.buffer
            .iter()
            .flat_map(|&packed| {
                let Colour { r, g, b } = Colour::from_packed(packed);
                [r, g, b]
            })
            .collect()
    }
}
