use std::{error::Error, fmt};

use crate::core::data::iteration_grid::IterationCount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourMapError {
    IterationsExceedMax {
        iterations: IterationCount,
        max_iterations: u32,
    },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for ColourMapError {}
