pub mod algorithm;

pub use algorithm::{ConstantSelector, EscapeTimeAlgorithm};
