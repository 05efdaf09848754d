use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info};

use crate::controllers::cli::options::CliOptions;
use crate::controllers::explorer::{ExplorerCommand, ExplorerController};
use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::util::calculate_row_bands::default_worker_count;
use crate::presenters::file::png::PngFilePresenter;
use crate::presenters::file::ppm::PpmFilePresenter;

pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn generate(&mut self, options: &CliOptions) -> Result<(), Box<dyn Error>> {
        let workers = options
            .workers
            .unwrap_or_else(|| default_worker_count().get());
        let mut explorer = ExplorerController::new(
            options.fractal_config(),
            options.width,
            options.height,
            workers,
        )?;

        for _ in 0..options.zoom {
            explorer.apply(ExplorerCommand::ZoomIn)?;
        }

        info!(
            "rendering {} ({} colours) at {}x{}, max iterations {}, {} workers",
            explorer.kind(),
            explorer.config().colour_scheme_kind(),
            options.width,
            options.height,
            explorer.max_iterations(),
            workers
        );

        let start = Instant::now();
        self.buffer = Some(explorer.render()?);
        info!("rendered in {:?}", start.elapsed());

        for line in explorer.key_lines() {
            debug!("{}", line);
        }

        Ok(())
    }

    pub fn write(&self, filepath: &Path) -> Result<(), PresentError> {
        if let Some(buffer) = &self.buffer {
            if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            self.presenter.present(buffer, filepath)?;
            info!("saved to {}", filepath.display());
        }

        Ok(())
    }
}

fn generate_and_write<P: FilePresenterPort>(
    presenter: P,
    options: &CliOptions,
    output: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut controller = CliController::new(presenter);
    controller.generate(options)?;
    controller.write(output)?;

    Ok(())
}

/// Renders the configured fractal and writes it, as PPM for a `.ppm` output
/// path and PNG otherwise. Returns the path written.
pub fn run_cli(options: &CliOptions) -> Result<PathBuf, Box<dyn Error>> {
    let output = options.output_path();
    let is_ppm = output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PpmFilePresenter::new().extension()));

    if is_ppm {
        generate_and_write(PpmFilePresenter::new(), options, &output)?;
    } else {
        generate_and_write(PngFilePresenter::new(), options, &output)?;
    }

    Ok(output)
}
