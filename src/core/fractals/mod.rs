pub mod colour_mapping;
pub mod escape_time;
pub mod fractal_config;
pub mod iteration_policy;
pub mod newton;
