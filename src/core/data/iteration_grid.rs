use std::error::Error;
use std::fmt;

/// Cell value for a point with no result: Newton's method hit its iteration
/// cap without converging or met a vanishing derivative. Escape-time points
/// that never escape hold `max_iterations` instead.
pub const NO_RESULT: IterationCount = -1;

pub type IterationCount = i32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationGridError {
    BoundsMismatch { expected_cells: usize, cells: usize },
}

impl fmt::Display for IterationGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_cells,
                cells,
            } => write!(
                f,
                "grid dimensions require {} cells but {} were supplied",
                expected_cells, cells
            ),
        }
    }
}

impl Error for IterationGridError {}

/// Row-major `height x width` iteration counts for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationGrid {
    width: u32,
    height: u32,
    cells: Vec<IterationCount>,
}

impl IterationGrid {
    /// A grid with every cell set to [`NO_RESULT`].
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![NO_RESULT; width as usize * height as usize],
        }
    }

    pub fn from_cells(
        width: u32,
        height: u32,
        cells: Vec<IterationCount>,
    ) -> Result<Self, IterationGridError> {
        let expected_cells = width as usize * height as usize;

        if cells.len() != expected_cells {
            return Err(IterationGridError::BoundsMismatch {
                expected_cells,
                cells: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn cells(&self) -> &[IterationCount] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [IterationCount] {
        &mut self.cells
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<IterationCount> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[IterationCount]> {
        self.cells.chunks_exact(self.width.max(1) as usize)
    }
}
