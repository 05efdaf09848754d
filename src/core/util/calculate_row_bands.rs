use std::num::NonZeroU32;
use std::ops::Range;

/// Half-open range of grid rows `[start, end)` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBand {
    pub start: u32,
    pub end: u32,
}

impl RowBand {
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.end - self.start
    }

    #[must_use]
    pub fn as_range(&self) -> Range<u32> {
        self.start..self.end
    }
}

/// Splits `[0, height)` into contiguous bands of `ceil(height / workers)` rows.
///
/// The last band is clipped to `height`, and bands that would start past the
/// end are dropped, so there may be fewer bands than workers.
#[must_use]
pub fn calculate_row_bands(height: u32, workers: NonZeroU32) -> Vec<RowBand> {
    if height == 0 {
        return Vec::new();
    }

    let band_height = height.div_ceil(workers.get());

    (0..workers.get())
        .map(|i| i.saturating_mul(band_height))
        .take_while(|&start| start < height)
        .map(|start| RowBand {
            start,
            end: start.saturating_add(band_height).min(height),
        })
        .collect()
}

/// Number of workers to use when the caller does not choose one.
#[must_use]
pub fn default_worker_count() -> NonZeroU32 {
    std::thread::available_parallelism()
        .ok()
        .and_then(|n| NonZeroU32::new(u32::try_from(n.get()).unwrap_or(u32::MAX)))
        .unwrap_or(NonZeroU32::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workers(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn assert_exact_cover(height: u32, bands: &[RowBand]) {
        let mut next = 0;
        for band in bands {
            assert_eq!(band.start, next, "gap or overlap at row {}", next);
            assert!(band.end > band.start, "empty band {:?}", band);
            next = band.end;
        }
        assert_eq!(next, height);
    }

    #[test]
    fn test_even_split() {
        let bands = calculate_row_bands(20, workers(4));

        assert_eq!(
            bands,
            vec![
                RowBand { start: 0, end: 5 },
                RowBand { start: 5, end: 10 },
                RowBand { start: 10, end: 15 },
                RowBand { start: 15, end: 20 },
            ]
        );
    }

    #[test]
    fn test_last_band_is_clipped() {
        let bands = calculate_row_bands(10, workers(3));

        assert_eq!(
            bands,
            vec![
                RowBand { start: 0, end: 4 },
                RowBand { start: 4, end: 8 },
                RowBand { start: 8, end: 10 },
            ]
        );
    }

    #[test]
    fn test_empty_trailing_bands_are_dropped() {
        // ceil(10 / 8) = 2 rows per band, so only five bands are needed.
        let bands = calculate_row_bands(10, workers(8));

        assert_eq!(bands.len(), 5);
        assert_exact_cover(10, &bands);
    }

    #[test]
    fn test_more_workers_than_rows() {
        let bands = calculate_row_bands(3, workers(16));

        assert_eq!(bands.len(), 3);
        assert!(bands.iter().all(|band| band.rows() == 1));
    }

    #[test]
    fn test_single_worker_takes_everything() {
        assert_eq!(
            calculate_row_bands(7, workers(1)),
            vec![RowBand { start: 0, end: 7 }]
        );
    }

    #[test]
    fn test_zero_height_has_no_bands() {
        assert!(calculate_row_bands(0, workers(4)).is_empty());
    }

    #[test]
    fn test_exact_cover_for_many_pairs() {
        for height in 1..=64 {
            for n in 1..=20 {
                assert_exact_cover(height, &calculate_row_bands(height, workers(n)));
            }
        }
    }

    #[test]
    fn test_default_worker_count_is_positive() {
        assert!(default_worker_count().get() >= 1);
    }
}
