use std::sync::Arc;

use crate::core::actions::compute_frame::errors::FrameError;
use crate::core::actions::compute_frame::frame_computer::FrameComputer;
use crate::core::actions::compute_frame::frame_request::FrameRequest;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::iteration_policy::IterationPolicy;

/// One-shot frame computation on a pool of `workers` threads.
///
/// Blocks until every band has been computed. Invalid configuration is
/// reported before any worker thread is started.
pub fn compute_frame(
    viewport: &Viewport,
    policy: &IterationPolicy,
    max_iterations: u32,
    workers: u32,
) -> Result<IterationGrid, FrameError> {
    let request = FrameRequest::new(*viewport, policy.clone(), max_iterations)?;
    let computer = FrameComputer::new(workers)?;
    let grid = computer.compute(&request)?;
    drop(computer);

    Ok(Arc::try_unwrap(grid).unwrap_or_else(|shared| (*shared).clone()))
}
