use std::path::PathBuf;

use structopt::StructOpt;

use crate::core::data::complex::Complex;
use crate::core::fractals::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::fractal_config::{FractalConfig, FractalKind};

#[derive(Debug, Clone, PartialEq, StructOpt)]
#[structopt(
    name = "fractal-kernel",
    about = "Render Mandelbrot, Julia and Newton fractals to an image file"
)]
pub struct CliOptions {
    /// mandelbrot, julia or newton
    #[structopt(short, long, default_value = "mandelbrot")]
    pub fractal: FractalKind,

    #[structopt(short, long, default_value = "1000")]
    pub width: u32,

    #[structopt(short = "H", long, default_value = "700")]
    pub height: u32,

    /// Iteration bound; defaults to the fractal's own
    #[structopt(short, long)]
    pub max_iterations: Option<u32>,

    /// Worker threads; defaults to the available parallelism
    #[structopt(short = "j", long)]
    pub workers: Option<u32>,

    /// Number of zoom-in steps about the centre of the default view
    #[structopt(short, long, default_value = "0")]
    pub zoom: u32,

    /// Alternate black and white by iteration parity
    #[structopt(short, long)]
    pub binary: bool,

    /// Real part of the Julia constant
    #[structopt(long, allow_hyphen_values = true)]
    pub c_real: Option<f64>,

    /// Imaginary part of the Julia constant
    #[structopt(long, allow_hyphen_values = true)]
    pub c_imag: Option<f64>,

    /// Output path; the extension picks PPM or PNG
    #[structopt(short, long, parse(from_os_str))]
    pub output: Option<PathBuf>,
}

impl CliOptions {
    /// Default configuration for the chosen fractal with the flags applied.
    #[must_use]
    pub fn fractal_config(&self) -> FractalConfig {
        let mut config = FractalConfig::for_kind(self.fractal);

        if let Some(max_iterations) = self.max_iterations {
            config.set_max_iterations(max_iterations);
        }
        if self.binary {
            config.set_colour_scheme_kind(ColourSchemeKind::Binary);
        }
        if let FractalConfig::Julia(julia) = &mut config {
            julia.c = Complex::new(
                self.c_real.unwrap_or(julia.c.real),
                self.c_imag.unwrap_or(julia.c.imag),
            );
        }

        config
    }

    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("output/{}.png", self.fractal.file_stem())))
    }
}
