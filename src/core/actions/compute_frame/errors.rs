use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequestError {
    ZeroMaxIterations,
}

impl fmt::Display for FrameRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => write!(f, "max iterations must be at least 1"),
        }
    }
}

impl Error for FrameRequestError {}

#[derive(Debug)]
pub enum FrameError {
    /// Another computation on the same computer has not finished yet.
    ComputeInProgress,
    /// A newer generation was started while this one was running; its grid
    /// was discarded.
    Superseded { generation: u64 },
    ThreadPool(rayon::ThreadPoolBuildError),
    ZeroWorkers,
    InvalidRequest(FrameRequestError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ComputeInProgress => write!(f, "a frame computation is already in progress"),
            Self::Superseded { generation } => {
                write!(f, "frame generation {} was superseded", generation)
            }
            Self::ThreadPool(err) => write!(f, "failed to build worker pool: {}", err),
            Self::ZeroWorkers => write!(f, "worker count must be at least 1"),
            Self::InvalidRequest(err) => write!(f, "invalid frame request: {}", err),
        }
    }
}

impl Error for FrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ThreadPool(err) => Some(err),
            Self::InvalidRequest(err) => Some(err),
            Self::ComputeInProgress | Self::Superseded { .. } | Self::ZeroWorkers => None,
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for FrameError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}

impl From<FrameRequestError> for FrameError {
    fn from(err: FrameRequestError) -> Self {
        Self::InvalidRequest(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            FrameError::Superseded { generation: 3 }.to_string(),
            "frame generation 3 was superseded"
        );
        assert_eq!(
            FrameError::from(FrameRequestError::ZeroMaxIterations).to_string(),
            "invalid frame request: max iterations must be at least 1"
        );
    }

    #[test]
    fn test_source_points_at_wrapped_error() {
        let err = FrameError::from(FrameRequestError::ZeroMaxIterations);

        assert!(err.source().is_some());
        assert!(FrameError::ComputeInProgress.source().is_none());
    }
}
