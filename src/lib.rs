//! # bitonic: comparator-parameterized parallel bitonic sort
//!
//! This crate implements the bitonic sorting network, generalized to
//! sequences of arbitrary (not just power-of-two) length, in two forms:
//!
//! - a purely sequential recursion ([`sequential`]), operating in place
//!   with no auxiliary storage;
//! - a parallel divide-and-conquer form ([`parallel`]) mirroring the
//!   same recursion as a fork/join task tree over a bounded worker
//!   pool, with a per-task fan-out budget halved at each level and a
//!   crossover to the standard library's unstable sort below a
//!   granularity threshold.
//!
//! Sorting is unstable: no promise is made about the relative order of
//! elements the comparator considers equal.
//!
//! ## Components
//!
//! 1. **Sequential engines**: compare-exchange primitive, bitonic merge
//!    and bitonic sort, split at the largest power of two below the
//!    segment length so any length works.
//!
//! 2. **Parallel orchestrator**: fork/join task tree with a join
//!    barrier between sorting the halves and merging the whole.
//!
//! 3. **API surface**: natural-order and explicit-comparator entry
//!    points over mutable slices, plus copy-in/copy-out variants for
//!    ordered collections that are not randomly indexable.
//!
//! ## Usage
//!
//! Sorting a slice in natural order:
//!
//! ```
//! let mut values = vec![65, 23, 89, 1, 555555555];
//! bitonic::sort(&mut values);
//! assert_eq!(values, vec![1, 23, 65, 89, 555555555]);
//! ```
//!
//! Sorting descending with an explicit configuration:
//!
//! ```
//! use bitonic::{Direction, SortConfig};
//!
//! let mut values = vec![5, -3, 0, -3, 5];
//! let config = SortConfig::default().with_direction(Direction::Descending);
//! bitonic::sort_by_config(&mut values, i32::cmp, &config);
//! assert_eq!(values, vec![5, 5, 0, -3, -3]);
//! ```

pub mod cli;
pub mod config;
pub mod parallel;
pub mod sequential;

// Re-export primary components
pub use config::{Direction, SortConfig, DEFAULT_PARALLELISM, GRANULARITY_THRESHOLD};

use std::cmp::Ordering;

/// Sort a slice in ascending natural order.
///
/// Runs the parallel orchestrator with the default configuration
/// ([`GRANULARITY_THRESHOLD`], [`DEFAULT_PARALLELISM`]). Empty and
/// single-element slices return immediately.
///
/// # Examples
///
/// ```
/// let mut values = vec![3, 1, 2];
/// bitonic::sort(&mut values);
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub fn sort<T>(seq: &mut [T])
where
    T: Ord + Send,
{
    sort_by(seq, T::cmp);
}

/// Sort a slice in ascending order under an explicit comparator.
///
/// The comparator must be a total order and consistent for the
/// duration of the call; an inconsistent comparator yields an
/// unspecified (but memory-safe) permutation.
///
/// # Examples
///
/// ```
/// let mut words = vec!["fig", "apple", "date"];
/// bitonic::sort_by(&mut words, |a, b| a.len().cmp(&b.len()));
/// assert_eq!(words, vec!["fig", "date", "apple"]);
/// ```
pub fn sort_by<T, F>(seq: &mut [T], cmp: F)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    sort_by_config(seq, cmp, &SortConfig::default());
}

/// Sort a slice under an explicit comparator and configuration.
///
/// The configuration selects the direction, the granularity cutoff
/// for the leaf fallback, and the parallelism budget (which also
/// sizes the worker pool).
///
/// # Panics
///
/// Panics if the worker pool cannot be constructed; see
/// [`parallel::sort_by_config`].
pub fn sort_by_config<T, F>(seq: &mut [T], cmp: F, config: &SortConfig)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    parallel::sort_by_config(seq, &cmp, config);
}

/// Sort an ordered collection in ascending natural order.
///
/// See [`sort_collection_by`] for the copy-in/copy-out contract.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
///
/// let mut deque: VecDeque<i32> = [9, 4, 6, 1].into_iter().collect();
/// bitonic::sort_collection(&mut deque);
/// assert_eq!(deque, VecDeque::from([1, 4, 6, 9]));
/// ```
pub fn sort_collection<C, T>(collection: &mut C)
where
    for<'a> &'a mut C: IntoIterator<Item = &'a mut T>,
    T: Ord + Send + Clone,
{
    sort_collection_by(collection, T::cmp);
}

/// Sort an ordered collection under an explicit comparator.
///
/// Elements are copied into a scratch sequence in iteration order,
/// sorted there, and written back through the collection's mutable
/// iterator in order. This serves collections that are ordered but not
/// randomly indexable (`VecDeque`, `LinkedList`, ...); slices should
/// use [`sort_by`] directly and skip the copies.
pub fn sort_collection_by<C, T, F>(collection: &mut C, cmp: F)
where
    for<'a> &'a mut C: IntoIterator<Item = &'a mut T>,
    T: Send + Clone,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let mut seq: Vec<T> = (&mut *collection).into_iter().map(|slot| slot.clone()).collect();
    if seq.len() <= 1 {
        return;
    }

    sort_by(&mut seq, cmp);

    for (slot, value) in (&mut *collection).into_iter().zip(seq) {
        *slot = value;
    }
}

/// Version information for the bitonic library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use std::collections::LinkedList;

    #[test]
    fn sorts_linked_list_by_comparator() {
        let mut list: LinkedList<i32> = [4, -2, 3, -1].into_iter().collect();
        super::sort_collection_by(&mut list, |a, b| b.cmp(a));

        let values: Vec<i32> = list.into_iter().collect();
        assert_eq!(values, vec![4, 3, -1, -2]);
    }
}
