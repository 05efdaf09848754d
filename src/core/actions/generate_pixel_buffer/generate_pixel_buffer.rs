use crate::core::actions::cancellation::{
    CancelToken, Cancelled, NeverCancel, CANCEL_CHECK_INTERVAL_PIXELS,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use std::error::Error;
use std::fmt;

/// Error type for pixel buffer generation.
///
/// Cancellation is kept apart from real failures so callers can drop a
/// stale frame quietly.
#[derive(Debug)]
pub enum GeneratePixelBufferError<E> {
    Cancelled(Cancelled),
    ColourMap(E),
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for GeneratePixelBufferError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GeneratePixelBufferError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl<E> From<PixelBufferError> for GeneratePixelBufferError<E> {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Packs every grid cell through `mapper`, row-major, one `0xRRGGBB` per
/// pixel.
pub fn generate_pixel_buffer<CMap: ColourMap>(
    grid: &IterationGrid,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>> {
    generate_pixel_buffer_cancelable(grid, mapper, &NeverCancel)
}

/// Like [`generate_pixel_buffer`], polling `cancel` every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn generate_pixel_buffer_cancelable<CMap, C>(
    grid: &IterationGrid,
    mapper: &CMap,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    CMap: ColourMap,
    C: CancelToken + ?Sized,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(grid.cells().len());

    for (i, &iterations) in grid.cells().iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferError::Cancelled(Cancelled));
        }

        let colour = mapper
            .map(iterations)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.push(colour.packed());
    }

    Ok(PixelBuffer::from_data(grid.width(), grid.height(), buffer)?)
}
