use image::{ImageFormat, RgbImage};

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use std::path::Path;

#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn to_image(&self, buffer: &PixelBuffer) -> Result<RgbImage, PresentError> {
        RgbImage::from_raw(buffer.width(), buffer.height(), buffer.to_rgb_bytes()).ok_or_else(
            || {
                PresentError::Encode(
                    format!(
                        "{} bytes do not fill a {}x{} RGB image",
                        buffer.buffer_size() * 3,
                        buffer.width(),
                        buffer.height()
                    )
                    .into(),
                )
            },
        )
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn extension(&self) -> &'static str {
        "png"
    }

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        self.to_image(buffer)?
            .save_with_format(filepath, ImageFormat::Png)
            .map_err(|err| PresentError::Encode(Box::new(err)))
    }
}
