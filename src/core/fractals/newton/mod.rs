pub mod algorithm;
pub mod approximator;
pub mod errors;

pub use algorithm::NewtonAlgorithm;
pub use approximator::{NewtonApproximator, NewtonOutcome};
pub use errors::NewtonError;
