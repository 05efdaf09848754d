pub mod generate_fractal_parallel_bands;
pub mod generate_fractal_serial;
pub mod ports;
