use std::error::Error;
use std::fmt;

use crate::controllers::explorer::command::ExplorerCommand;
use crate::core::actions::compute_frame::errors::{FrameError, FrameRequestError};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::colour_mapping::errors::ColourMapError;
use crate::core::fractals::fractal_config::FractalKind;
use crate::core::fractals::newton::errors::NewtonError;

#[derive(Debug)]
pub enum ExplorerError {
    Viewport(ViewportError),
    Newton(NewtonError),
    Frame(FrameError),
    PixelBuffer(GeneratePixelBufferError<ColourMapError>),
    UnsupportedCommand {
        command: ExplorerCommand,
        kind: FractalKind,
    },
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::Newton(err) => write!(f, "newton configuration error: {}", err),
            Self::Frame(err) => write!(f, "frame error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::UnsupportedCommand { command, kind } => {
                write!(f, "{:?} is not available for {}", command, kind)
            }
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Newton(err) => Some(err),
            Self::Frame(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::UnsupportedCommand { .. } => None,
        }
    }
}

impl From<ViewportError> for ExplorerError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<NewtonError> for ExplorerError {
    fn from(err: NewtonError) -> Self {
        Self::Newton(err)
    }
}

impl From<FrameError> for ExplorerError {
    fn from(err: FrameError) -> Self {
        Self::Frame(err)
    }
}

impl From<FrameRequestError> for ExplorerError {
    fn from(err: FrameRequestError) -> Self {
        Self::Frame(FrameError::InvalidRequest(err))
    }
}

impl From<GeneratePixelBufferError<ColourMapError>> for ExplorerError {
    fn from(err: GeneratePixelBufferError<ColourMapError>) -> Self {
        Self::PixelBuffer(err)
    }
}
