use crate::core::data::viewport::PanDirection;

pub const ITERATION_STEP: u32 = 64;

/// Discrete user commands understood by an explorer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerCommand {
    Pan(PanDirection),
    ZoomIn,
    ZoomOut,
    IncreaseIterations,
    DecreaseIterations,
    ToggleColourScheme,
    /// Legend visibility only; the frame is unaffected.
    ToggleKey,
    /// Julia only: shift `c` by the current step.
    MoveConstant(PanDirection),
    /// Julia only.
    IncreaseConstantStep,
    /// Julia only.
    DecreaseConstantStep,
    Resize { width: u32, height: u32 },
}

impl ExplorerCommand {
    #[must_use]
    pub const fn is_julia_only(self) -> bool {
        matches!(
            self,
            Self::MoveConstant(_) | Self::IncreaseConstantStep | Self::DecreaseConstantStep
        )
    }
}

#[must_use]
pub fn increased_iterations(max_iterations: u32) -> u32 {
    if max_iterations < ITERATION_STEP {
        ITERATION_STEP
    } else {
        max_iterations.saturating_add(ITERATION_STEP)
    }
}

/// Below one step the bound jumps to two steps; otherwise it drops by one
/// step but never below one step.
#[must_use]
pub fn decreased_iterations(max_iterations: u32) -> u32 {
    if max_iterations < ITERATION_STEP {
        2 * ITERATION_STEP
    } else {
        (max_iterations - ITERATION_STEP).max(ITERATION_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase_iterations() {
        assert_eq!(increased_iterations(10), 64);
        assert_eq!(increased_iterations(64), 128);
        assert_eq!(increased_iterations(256), 320);
        assert_eq!(increased_iterations(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_decrease_iterations() {
        assert_eq!(decreased_iterations(10), 128);
        assert_eq!(decreased_iterations(256), 192);
        assert_eq!(decreased_iterations(128), 64);
        assert_eq!(decreased_iterations(64), 64);
        assert_eq!(decreased_iterations(100), 64);
    }

    #[test]
    fn test_julia_only_commands() {
        assert!(ExplorerCommand::MoveConstant(PanDirection::Up).is_julia_only());
        assert!(ExplorerCommand::DecreaseConstantStep.is_julia_only());
        assert!(!ExplorerCommand::ZoomIn.is_julia_only());
    }
}
