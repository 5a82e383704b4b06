//! Fallible reservation for the bulk vectors behind every layout.

use crate::error::ArenaError;

/// Create an empty `Vec` with room for exactly `count` elements.
///
/// Returns [`ArenaError::AllocationFailed`] instead of aborting when the
/// reservation cannot be satisfied.
pub(crate) fn reserve_exact<T>(what: &'static str, count: usize) -> Result<Vec<T>, ArenaError> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(count)
        .map_err(|_| ArenaError::AllocationFailed {
            what,
            requested: count,
        })?;
    Ok(vec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserves_requested_capacity() {
        let vec: Vec<u64> = reserve_exact("test", 100).unwrap();
        assert!(vec.is_empty());
        assert!(vec.capacity() >= 100);
    }

    #[test]
    fn zero_reservation_is_valid() {
        let vec: Vec<u64> = reserve_exact("test", 0).unwrap();
        assert!(vec.is_empty());
    }

    #[test]
    fn impossible_reservation_returns_error() {
        let result: Result<Vec<u64>, _> = reserve_exact("huge", usize::MAX);
        assert_eq!(
            result.unwrap_err(),
            ArenaError::AllocationFailed {
                what: "huge",
                requested: usize::MAX,
            }
        );
    }
}
