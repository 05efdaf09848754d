use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::viewport::Viewport;

/// Single-threaded reference generator, row by row on the calling thread.
pub fn generate_fractal_serial<Alg: FractalAlgorithm + ?Sized>(
    viewport: &Viewport,
    algorithm: &Alg,
    max_iterations: u32,
) -> IterationGrid {
    let mut grid = IterationGrid::new(viewport.width(), viewport.height());
    let width = viewport.width() as usize;

    for (y, row) in grid.cells_mut().chunks_exact_mut(width).enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = algorithm.compute(viewport.pixel_to_point(x as u32, y as u32), max_iterations);
        }
    }

    grid
}
