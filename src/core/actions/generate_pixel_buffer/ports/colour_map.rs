use crate::core::data::colour::Colour;
use crate::core::data::iteration_grid::IterationCount;
use std::error::Error;

pub trait ColourMap {
    type Failure: Error;

    fn map(&self, iterations: IterationCount) -> Result<Colour, Self::Failure>;
}
