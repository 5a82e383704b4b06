//! Individually heap-allocated records behind a dense reference vector.

use scatter_core::{CoordinateStream, FillerSizeStream, Triangle};

use crate::error::ArenaError;
use crate::filler::FillerPool;
use crate::raw::reserve_exact;

/// Records boxed one at a time, referenced from a contiguous vector.
///
/// Without fillers the allocator tends to hand out neighbouring blocks, so
/// the records stay loosely clustered. [`generate_interleaved`] places a
/// filler allocation after every record to scatter them for real.
///
/// The boxes live as long as this value; dropping it is the only point at
/// which records are deallocated.
///
/// [`generate_interleaved`]: ScatteredRecords::generate_interleaved
#[derive(Debug)]
pub struct ScatteredRecords {
    records: Vec<Box<Triangle>>,
}

impl ScatteredRecords {
    /// Box `count` records drawn from `stream`, back to back.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::AllocationFailed`] if the reference vector
    /// cannot be reserved.
    pub fn generate(count: usize, stream: &mut CoordinateStream) -> Result<Self, ArenaError> {
        let mut records = reserve_exact("scattered record references", count)?;
        for _ in 0..count {
            records.push(Box::new(Triangle::generate(stream)));
        }
        Ok(Self { records })
    }

    /// Box `count` records, allocating one filler into `fillers` right
    /// after each record with a size drawn from `sizes`.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::AllocationFailed`] if the reference vector
    /// cannot be reserved.
    pub fn generate_interleaved(
        count: usize,
        stream: &mut CoordinateStream,
        fillers: &mut FillerPool,
        sizes: &mut FillerSizeStream,
    ) -> Result<Self, ArenaError> {
        let mut records = reserve_exact("scattered record references", count)?;
        for _ in 0..count {
            records.push(Box::new(Triangle::generate(stream)));
            fillers.allocate(sizes.next_size());
        }
        Ok(Self { records })
    }

    /// Iterate over the records in reference order.
    pub fn iter(&self) -> impl Iterator<Item = &Triangle> + '_ {
        self.records.iter().map(|record| &**record)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::RecordBlock;
    use scatter_core::FillerRange;

    #[test]
    fn matches_contiguous_geometry() {
        let block = RecordBlock::generate(200, &mut CoordinateStream::new(42)).unwrap();
        let scattered = ScatteredRecords::generate(200, &mut CoordinateStream::new(42)).unwrap();
        assert_eq!(scattered.len(), 200);
        assert!(scattered.iter().eq(block.iter()));
    }

    #[test]
    fn interleaved_allocates_one_filler_per_record() {
        let mut fillers = FillerPool::with_capacity(300).unwrap();
        let mut sizes = FillerSizeStream::new(42, FillerRange::NARROW).unwrap();
        let scattered = ScatteredRecords::generate_interleaved(
            300,
            &mut CoordinateStream::new(42),
            &mut fillers,
            &mut sizes,
        )
        .unwrap();
        assert_eq!(scattered.len(), 300);
        assert_eq!(fillers.outstanding(), 300);
        assert!(fillers.outstanding_bytes() >= 300);
        assert!(fillers.outstanding_bytes() <= 300 * 64);
    }

    #[test]
    fn interleaved_matches_contiguous_geometry() {
        let block = RecordBlock::generate(100, &mut CoordinateStream::new(9)).unwrap();
        let mut fillers = FillerPool::default();
        let mut sizes = FillerSizeStream::new(9, FillerRange::NARROW).unwrap();
        let scattered = ScatteredRecords::generate_interleaved(
            100,
            &mut CoordinateStream::new(9),
            &mut fillers,
            &mut sizes,
        )
        .unwrap();
        assert!(scattered.iter().eq(block.iter()));
    }

    #[test]
    fn records_are_separate_allocations() {
        let scattered = ScatteredRecords::generate(8, &mut CoordinateStream::new(42)).unwrap();
        let addrs: std::collections::HashSet<usize> = scattered
            .iter()
            .map(|t| t as *const Triangle as usize)
            .collect();
        assert_eq!(addrs.len(), 8);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn filler_bytes_stay_within_range(
                count in 0usize..200,
                seed in any::<u64>(),
                min in 1u32..256,
                span in 0u32..256,
            ) {
                let range = FillerRange { min, max: min + span };
                let mut fillers = FillerPool::default();
                let mut sizes = FillerSizeStream::new(seed, range).unwrap();
                let scattered = ScatteredRecords::generate_interleaved(
                    count,
                    &mut CoordinateStream::new(seed),
                    &mut fillers,
                    &mut sizes,
                )
                .unwrap();
                prop_assert_eq!(scattered.len(), count);
                prop_assert_eq!(fillers.outstanding(), count);
                prop_assert!(fillers.outstanding_bytes() >= count * min as usize);
                prop_assert!(fillers.outstanding_bytes() <= count * (min + span) as usize);
            }
        }
    }
}
