pub mod controller;
pub mod options;

pub use controller::{run_cli, CliController};
pub use options::CliOptions;
