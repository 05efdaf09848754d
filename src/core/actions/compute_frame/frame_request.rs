use crate::core::actions::compute_frame::errors::FrameRequestError;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::iteration_policy::IterationPolicy;

/// Every input that can change the contents of a frame.
///
/// Two equal requests always produce identical grids, which is what lets the
/// computer skip recomputation for a request it has already served.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRequest {
    viewport: Viewport,
    policy: IterationPolicy,
    max_iterations: u32,
}

impl FrameRequest {
    pub fn new(
        viewport: Viewport,
        policy: IterationPolicy,
        max_iterations: u32,
    ) -> Result<Self, FrameRequestError> {
        if max_iterations == 0 {
            return Err(FrameRequestError::ZeroMaxIterations);
        }

        Ok(Self {
            viewport,
            policy,
            max_iterations,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn policy(&self) -> &IterationPolicy {
        &self.policy
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
