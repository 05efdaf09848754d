use std::num::NonZeroU32;

use log::debug;
use rayon::prelude::*;
use rayon::ThreadPool;

use crate::core::actions::cancellation::{CancelToken, Cancelled, CANCEL_CHECK_INTERVAL_PIXELS};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::iteration_grid::{IterationCount, IterationGrid};
use crate::core::data::viewport::Viewport;
use crate::core::util::calculate_row_bands::{calculate_row_bands, RowBand};

/// Computes a full grid on `pool`, one task per row band.
///
/// Band boundaries are fixed before any task starts and each task writes only
/// the cells of its own band, so the grid needs no locking. The function
/// returns after every band has finished. Cancellation is polled at the start
/// of each row and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row;
/// a cancelled computation drops the partial grid.
pub fn generate_fractal_parallel_bands<Alg, C>(
    pool: &ThreadPool,
    viewport: &Viewport,
    algorithm: &Alg,
    max_iterations: u32,
    workers: NonZeroU32,
    cancel: &C,
) -> Result<IterationGrid, Cancelled>
where
    Alg: FractalAlgorithm + Sync + ?Sized,
    C: CancelToken + ?Sized,
{
    let bands = calculate_row_bands(viewport.height(), workers);
    let width = viewport.width() as usize;
    let mut grid = IterationGrid::new(viewport.width(), viewport.height());

    let mut rest = grid.cells_mut();
    let mut band_cells: Vec<(RowBand, &mut [IterationCount])> = Vec::with_capacity(bands.len());

    for band in bands {
        let (cells, tail) = std::mem::take(&mut rest).split_at_mut(band.rows() as usize * width);
        band_cells.push((band, cells));
        rest = tail;
    }

    debug!(
        "dispatching {} row bands for {}x{} grid",
        band_cells.len(),
        viewport.width(),
        viewport.height()
    );

    pool.install(|| {
        band_cells.into_par_iter().try_for_each(|(band, cells)| {
            compute_band(viewport, algorithm, max_iterations, band, cells, cancel)
        })
    })?;

    Ok(grid)
}

fn compute_band<Alg, C>(
    viewport: &Viewport,
    algorithm: &Alg,
    max_iterations: u32,
    band: RowBand,
    cells: &mut [IterationCount],
    cancel: &C,
) -> Result<(), Cancelled>
where
    Alg: FractalAlgorithm + ?Sized,
    C: CancelToken + ?Sized,
{
    let width = viewport.width() as usize;

    for (y, row) in band.as_range().zip(cells.chunks_exact_mut(width)) {
        for (x, cell) in row.iter_mut().enumerate() {
            if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                return Err(Cancelled);
            }

            *cell = algorithm.compute(viewport.pixel_to_point(x as u32, y), max_iterations);
        }
    }

    Ok(())
}
