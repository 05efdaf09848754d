use std::num::NonZeroU32;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use log::{debug, info, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::core::actions::cancellation::GenerationToken;
use crate::core::actions::compute_frame::errors::FrameError;
use crate::core::actions::compute_frame::frame_request::FrameRequest;
use crate::core::actions::generate_fractal::generate_fractal_parallel_bands::generate_fractal_parallel_bands;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::util::calculate_row_bands::default_worker_count;

#[derive(Debug, Default)]
struct FrameCache {
    request: Option<FrameRequest>,
    grid: Option<Arc<IterationGrid>>,
    dirty: bool,
}

/// Clears the in-progress flag however the computation ends.
struct InProgressGuard<'a>(&'a AtomicBool);

impl Drop for InProgressGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Computes iteration grids on a dedicated pool of `workers` threads.
///
/// The last completed grid is cached together with the request that produced
/// it. Asking again for the same request returns the cached grid until
/// [`FrameComputer::mark_dirty`] is called. Each computation runs under a
/// fresh generation number; [`FrameComputer::supersede`] advances the number
/// so the running computation stops at its next poll and is discarded instead
/// of replacing a newer result.
pub struct FrameComputer {
    pool: ThreadPool,
    workers: NonZeroU32,
    generation: AtomicU64,
    in_progress: AtomicBool,
    cache: Mutex<FrameCache>,
}

impl FrameComputer {
    pub fn new(workers: u32) -> Result<Self, FrameError> {
        let workers = NonZeroU32::new(workers).ok_or(FrameError::ZeroWorkers)?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.get() as usize)
            .thread_name(|index| format!("frame-worker-{}", index))
            .build()?;

        Ok(Self {
            pool,
            workers,
            generation: AtomicU64::new(0),
            in_progress: AtomicBool::new(false),
            cache: Mutex::new(FrameCache::default()),
        })
    }

    pub fn with_default_workers() -> Result<Self, FrameError> {
        Self::new(default_worker_count().get())
    }

    #[must_use]
    pub fn workers(&self) -> NonZeroU32 {
        self.workers
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_computing(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    /// The most recently completed grid, if any.
    #[must_use]
    pub fn latest(&self) -> Option<Arc<IterationGrid>> {
        self.lock_cache().grid.clone()
    }

    /// Forces the next `compute` to run even for an unchanged request.
    pub fn mark_dirty(&self) {
        self.lock_cache().dirty = true;
    }

    /// Starts a new generation, cancelling whatever is currently running.
    pub fn supersede(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        debug!("superseded frames older than generation {}", generation);
        generation
    }

    /// Blocks until the grid for `request` is available.
    pub fn compute(&self, request: &FrameRequest) -> Result<Arc<IterationGrid>, FrameError> {
        self.compute_with(request, request.policy())
    }

    fn compute_with<Alg>(
        &self,
        request: &FrameRequest,
        algorithm: &Alg,
    ) -> Result<Arc<IterationGrid>, FrameError>
    where
        Alg: FractalAlgorithm + Sync + ?Sized,
    {
        if self
            .in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(FrameError::ComputeInProgress);
        }
        let _guard = InProgressGuard(&self.in_progress);

        {
            let cache = self.lock_cache();
            if !cache.dirty && cache.request.as_ref() == Some(request) {
                if let Some(grid) = &cache.grid {
                    debug!("request unchanged, reusing cached grid");
                    return Ok(Arc::clone(grid));
                }
            }
        }

        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let token = GenerationToken::new(&self.generation, generation);
        let viewport = request.viewport();
        let start = Instant::now();

        let grid = generate_fractal_parallel_bands(
            &self.pool,
            viewport,
            algorithm,
            request.max_iterations(),
            self.workers,
            &token,
        );

        let mut cache = self.lock_cache();

        // Also covers a supersede that landed after the last poll.
        let grid = match grid {
            Ok(grid) if self.generation() == generation => Arc::new(grid),
            _ => {
                warn!("frame generation {} superseded, discarding", generation);
                return Err(FrameError::Superseded { generation });
            }
        };

        info!(
            "frame generation {} ({}x{}, max {}) computed in {:?}",
            generation,
            viewport.width(),
            viewport.height(),
            request.max_iterations(),
            start.elapsed()
        );

        cache.request = Some(request.clone());
        cache.grid = Some(Arc::clone(&grid));
        cache.dirty = false;

        Ok(grid)
    }

    fn lock_cache(&self) -> MutexGuard<'_, FrameCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::data::complex::Complex;
    use crate::core::data::iteration_grid::IterationCount;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
    use std::sync::atomic::AtomicUsize;
    use std::sync::mpsc::{self, Sender};
    use std::thread;

    fn mandelbrot_request(width: u32, height: u32, max_iterations: u32) -> FrameRequest {
        let viewport = Viewport::new(-2.1, 1.2, 0.0, width, height).unwrap();
        FrameRequest::new(viewport, EscapeTimeAlgorithm::mandelbrot().into(), max_iterations)
            .unwrap()
    }

    /// Signals when the first pixel starts, then holds every pixel until
    /// released.
    struct BlockingAlgorithm {
        started: Mutex<Option<Sender<()>>>,
        released: AtomicBool,
    }

    impl BlockingAlgorithm {
        fn new(started: Sender<()>) -> Self {
            Self {
                started: Mutex::new(Some(started)),
                released: AtomicBool::new(false),
            }
        }

        fn release(&self) {
            self.released.store(true, Ordering::Release);
        }
    }

    impl FractalAlgorithm for BlockingAlgorithm {
        fn compute(&self, _: Complex, _: u32) -> IterationCount {
            if let Some(started) = self.started.lock().unwrap().take() {
                started.send(()).unwrap();
            }
            while !self.released.load(Ordering::Acquire) {
                thread::yield_now();
            }
            0
        }
    }

    struct CountingAlgorithm {
        calls: AtomicUsize,
    }

    impl FractalAlgorithm for CountingAlgorithm {
        fn compute(&self, _: Complex, _: u32) -> IterationCount {
            self.calls.fetch_add(1, Ordering::Relaxed);
            1
        }
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        assert!(matches!(FrameComputer::new(0), Err(FrameError::ZeroWorkers)));
    }

    #[test]
    fn test_matches_serial_reference() {
        let computer = FrameComputer::new(3).unwrap();
        let request = mandelbrot_request(40, 25, 100);

        let grid = computer.compute(&request).unwrap();
        let serial = generate_fractal_serial(request.viewport(), request.policy(), 100);

        assert_eq!(*grid, serial);
    }

    #[test]
    fn test_unchanged_request_reuses_grid() {
        let computer = FrameComputer::new(2).unwrap();
        let request = mandelbrot_request(20, 10, 50);

        let first = computer.compute(&request).unwrap();
        let generation = computer.generation();
        let second = computer.compute(&request).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
        assert_eq!(computer.generation(), generation);
    }

    #[test]
    fn test_cached_request_skips_algorithm() {
        let computer = FrameComputer::new(2).unwrap();
        let request = mandelbrot_request(8, 4, 10);
        let algorithm = CountingAlgorithm {
            calls: AtomicUsize::new(0),
        };

        computer.compute_with(&request, &algorithm).unwrap();
        computer.compute_with(&request, &algorithm).unwrap();

        assert_eq!(algorithm.calls.load(Ordering::Relaxed), 32);
    }

    #[test]
    fn test_mark_dirty_forces_recompute() {
        let computer = FrameComputer::new(2).unwrap();
        let request = mandelbrot_request(20, 10, 50);

        let first = computer.compute(&request).unwrap();
        computer.mark_dirty();
        let second = computer.compute(&request).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn test_changed_request_recomputes() {
        let computer = FrameComputer::new(2).unwrap();

        let first = computer.compute(&mandelbrot_request(20, 10, 50)).unwrap();
        let second = computer.compute(&mandelbrot_request(20, 10, 51)).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&computer.latest().unwrap(), &second));
    }

    #[test]
    fn test_second_compute_while_running_is_rejected() {
        let computer = FrameComputer::new(1).unwrap();
        let request = mandelbrot_request(2, 2, 10);
        let (started_tx, started_rx) = mpsc::channel();
        let algorithm = BlockingAlgorithm::new(started_tx);

        thread::scope(|scope| {
            let running = scope.spawn(|| computer.compute_with(&request, &algorithm));
            started_rx.recv().unwrap();

            assert!(computer.is_computing());
            assert!(matches!(
                computer.compute(&request),
                Err(FrameError::ComputeInProgress)
            ));

            algorithm.release();
            assert!(running.join().unwrap().is_ok());
        });

        assert!(!computer.is_computing());
    }

    #[test]
    fn test_superseded_frame_is_discarded() {
        let computer = FrameComputer::new(1).unwrap();
        let kept = computer.compute(&mandelbrot_request(4, 4, 10)).unwrap();

        let request = mandelbrot_request(2, 2, 20);
        let (started_tx, started_rx) = mpsc::channel();
        let algorithm = BlockingAlgorithm::new(started_tx);

        let result = thread::scope(|scope| {
            let running = scope.spawn(|| computer.compute_with(&request, &algorithm));
            started_rx.recv().unwrap();

            computer.supersede();
            algorithm.release();
            running.join().unwrap()
        });

        assert!(matches!(result, Err(FrameError::Superseded { .. })));
        assert!(Arc::ptr_eq(&computer.latest().unwrap(), &kept));
        assert!(!computer.is_computing());
    }

    #[test]
    fn test_generation_increments_per_computed_frame() {
        let computer = FrameComputer::new(2).unwrap();

        computer.compute(&mandelbrot_request(6, 6, 10)).unwrap();
        computer.compute(&mandelbrot_request(6, 6, 11)).unwrap();

        assert_eq!(computer.generation(), 2);
        assert_eq!(computer.supersede(), 3);
    }
}
