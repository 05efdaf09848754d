mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::{run_cli, CliController, CliOptions};
pub use crate::controllers::explorer::command::{decreased_iterations, increased_iterations};
pub use crate::controllers::explorer::{ExplorerCommand, ExplorerController, ExplorerError};
pub use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use crate::presenters::file::png::PngFilePresenter;
pub use crate::presenters::file::ppm::PpmFilePresenter;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, GenerationToken, NeverCancel};
pub use crate::core::actions::compute_frame::{
    compute_frame, FrameComputer, FrameError, FrameRequest, FrameRequestError,
};
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_bands::generate_fractal_parallel_bands;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, generate_pixel_buffer_cancelable, GeneratePixelBufferError,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;

pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::{Complex, ComplexArithmeticError};
pub use crate::core::data::iteration_grid::{IterationCount, IterationGrid, IterationGridError, NO_RESULT};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::polynomial::Polynomial;
pub use crate::core::data::viewport::{PanDirection, Viewport, ViewportError};

pub use crate::core::fractals::colour_mapping::{
    colour_scheme_factory, ChannelRamp, ColourMapError, ColourRule, ColourScheme, ColourSchemeKind,
};
pub use crate::core::fractals::escape_time::{ConstantSelector, EscapeTimeAlgorithm};
pub use crate::core::fractals::fractal_config::{
    FractalConfig, FractalKind, JuliaConfig, MandelbrotConfig, NewtonConfig, PlaneRegion,
};
pub use crate::core::fractals::iteration_policy::IterationPolicy;
pub use crate::core::fractals::newton::{NewtonAlgorithm, NewtonApproximator, NewtonError, NewtonOutcome};
pub use crate::core::util::calculate_row_bands::{calculate_row_bands, default_worker_count, RowBand};
