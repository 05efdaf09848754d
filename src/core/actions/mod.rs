pub mod cancellation;
pub mod compute_frame;
pub mod generate_fractal;
pub mod generate_pixel_buffer;
