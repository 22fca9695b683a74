use anyhow::{ensure, Result};

/// A contiguous half-open range `[start, end)` of interval indices owned
/// by exactly one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Chunk {
    pub(crate) start: u64,
    pub(crate) end: u64,
}

impl Chunk {
    pub(crate) fn len(&self) -> u64 {
        self.end - self.start
    }
}

/// Splits `intervals` midpoint samples into one chunk per worker.
///
/// Each worker receives `intervals / num_workers` samples (floor
/// division); the final worker additionally absorbs the remainder so the
/// chunks tile `[0, intervals)` exactly, with no gap and no overlap.
pub(crate) fn partition(intervals: u64, num_workers: usize) -> Result<Vec<Chunk>> {
    ensure!(
        num_workers > 0,
        "Cannot partition {} intervals across 0 workers",
        intervals
    );

    let chunk_size = intervals / num_workers as u64;
    let mut chunks = Vec::with_capacity(num_workers);

    for worker_id in 0..num_workers as u64 {
        let start = chunk_size * worker_id;
        let end = if worker_id + 1 == num_workers as u64 {
            intervals
        } else {
            chunk_size * (worker_id + 1)
        };
        chunks.push(Chunk { start, end });
    }

    Ok(chunks)
}

#[cfg(test)]
mod chunks_test {
    use super::*;

    #[test]
    fn test_partition_even_split() -> Result<()> {
        let chunks = partition(10_000_000, 4)?;

        assert_eq!(
            chunks,
            vec![
                Chunk {
                    start: 0,
                    end: 2_500_000
                },
                Chunk {
                    start: 2_500_000,
                    end: 5_000_000
                },
                Chunk {
                    start: 5_000_000,
                    end: 7_500_000
                },
                Chunk {
                    start: 7_500_000,
                    end: 10_000_000
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_partition_remainder_goes_to_last_chunk() -> Result<()> {
        let chunks = partition(10, 3)?;

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], Chunk { start: 0, end: 3 });
        assert_eq!(chunks[1], Chunk { start: 3, end: 6 });
        assert_eq!(chunks[2], Chunk { start: 6, end: 10 });
        Ok(())
    }

    #[test]
    fn test_partition_tiles_exactly_for_all_worker_counts() -> Result<()> {
        for num_workers in 1..=64 {
            let chunks = partition(10_000_000, num_workers)?;

            assert_eq!(chunks.len(), num_workers);
            assert_eq!(chunks[0].start, 0);
            assert_eq!(chunks[num_workers - 1].end, 10_000_000);
            for pair in chunks.windows(2) {
                assert_eq!(
                    pair[0].end, pair[1].start,
                    "gap or overlap with {} workers",
                    num_workers
                );
            }
            let covered: u64 = chunks.iter().map(Chunk::len).sum();
            assert_eq!(covered, 10_000_000);
        }
        Ok(())
    }

    #[test]
    fn test_partition_more_workers_than_intervals() -> Result<()> {
        // Leading chunks come out empty; the range is still fully covered.
        let chunks = partition(5, 8)?;

        assert_eq!(chunks.len(), 8);
        let covered: u64 = chunks.iter().map(Chunk::len).sum();
        assert_eq!(covered, 5);
        assert_eq!(chunks[7], Chunk { start: 0, end: 5 });
        Ok(())
    }

    #[test]
    fn test_partition_zero_workers_rejected() {
        let result = partition(10_000_000, 0);
        assert!(result.is_err());
    }
}
