use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary `P6` portable pixmap.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to<W: Write>(&self, buffer: &PixelBuffer, mut out: W) -> std::io::Result<()> {
        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", buffer.width(), buffer.height())?;
        writeln!(out, "255")?;
        out.write_all(&buffer.to_rgb_bytes())?;
        out.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn extension(&self) -> &'static str {
        "ppm"
    }

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        let file = File::create(filepath)?;
        self.write_to(buffer, BufWriter::new(file))?;

        Ok(())
    }
}
