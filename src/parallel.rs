//! Parallel task orchestration for the bitonic sorting network
//!
//! The orchestrator mirrors the sequential sort recursion as a
//! fork/join task tree over a bounded rayon pool. Each task carries a
//! fan-out budget that is halved at every level; once the budget is
//! exhausted the recursion continues synchronously on the current
//! thread, and below the granularity cutoff a task sorts its segment
//! directly with the standard library's unstable sort instead of
//! descending further into the network.
//!
//! Sibling tasks always operate on the two disjoint halves produced by
//! `split_at_mut`, and a parent never touches its range until both
//! children have joined. That disjointness is the whole concurrency
//! story: no locking is needed, and the borrow checker enforces it.

use std::cmp::Ordering;

use rayon::ThreadPoolBuilder;

use crate::config::{Direction, SortConfig};
use crate::sequential;

/// Sort `seq` on a bounded worker pool according to `config`.
///
/// A dedicated pool of `config.parallelism` threads is built for the
/// call, and the root task is given that same value as its fan-out
/// budget. Empty and single-element slices return immediately.
///
/// # Panics
///
/// Panics if the worker pool cannot be constructed. This happens
/// before any element is moved, so `seq` is left untouched. A
/// comparator that panics mid-sort propagates out of this call and
/// leaves `seq` in an unspecified permutation of its input.
pub fn sort_by_config<T, F>(seq: &mut [T], cmp: &F, config: &SortConfig)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    if seq.len() <= 1 {
        return;
    }

    let budget = config.parallelism.max(1);
    let pool = ThreadPoolBuilder::new()
        .num_threads(budget)
        .build()
        .unwrap_or_else(|err| panic!("failed to build sort worker pool: {err}"));

    pool.install(|| sort_task(seq, cmp, config.direction, budget, config.granularity));
}

/// One node of the task tree: sort `seq` in `dir` with fan-out
/// allowance `budget`.
fn sort_task<T, F>(seq: &mut [T], cmp: &F, dir: Direction, budget: usize, granularity: usize)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let count = seq.len();
    if count <= 1 {
        return;
    }

    if count < granularity {
        // Crossover to a direct in-place sort of the leaf segment
        match dir {
            Direction::Ascending => seq.sort_unstable_by(|a, b| cmp(a, b)),
            Direction::Descending => seq.sort_unstable_by(|a, b| cmp(b, a)),
        }
        return;
    }

    let split = count / 2;
    let child_budget = if budget <= 1 { budget } else { budget / 2 };
    let (front, back) = seq.split_at_mut(split);

    if budget <= 1 {
        // Budget exhausted: run both children in order on this thread
        sort_task(front, cmp, dir.reversed(), child_budget, granularity);
        sort_task(back, cmp, dir, child_budget, granularity);
    } else {
        // Fork the halves and block until both have completed. The
        // barrier is mandatory: the merge below requires the whole
        // slice to be bitonic, which only holds once both halves are
        // monotonic runs in opposite directions.
        rayon::join(
            || sort_task(front, cmp, dir.reversed(), child_budget, granularity),
            || sort_task(back, cmp, dir, child_budget, granularity),
        );
    }

    sequential::merge_by(seq, cmp, dir);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortConfig;

    // Small granularity so short inputs still exercise fan-out and
    // the merge path rather than the leaf fallback alone.
    fn test_config() -> SortConfig {
        SortConfig::default().with_granularity(4)
    }

    #[test]
    fn test_sorts_across_leaf_boundary() {
        let mut seq: Vec<i64> = (0..257).rev().collect();
        let expected: Vec<i64> = (0..257).collect();

        sort_by_config(&mut seq, &i64::cmp, &test_config());
        assert_eq!(seq, expected);
    }

    #[test]
    fn test_descending_direction() {
        let mut seq = vec![3_i64, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        let config = test_config().with_direction(Direction::Descending);

        sort_by_config(&mut seq, &i64::cmp, &config);
        assert_eq!(seq, vec![9, 6, 5, 5, 5, 4, 3, 3, 2, 1, 1]);
    }

    #[test]
    fn test_budget_one_runs_synchronously() {
        let mut seq: Vec<i64> = (0..100).map(|i| (i * 37) % 41).collect();
        let mut expected = seq.clone();
        expected.sort_unstable();

        let config = test_config().with_parallelism(1);
        sort_by_config(&mut seq, &i64::cmp, &config);
        assert_eq!(seq, expected);
    }

    #[test]
    fn test_empty_and_single_are_noops() {
        let mut empty: Vec<i64> = vec![];
        sort_by_config(&mut empty, &i64::cmp, &test_config());
        assert!(empty.is_empty());

        let mut single = vec![7_i64];
        sort_by_config(&mut single, &i64::cmp, &test_config());
        assert_eq!(single, vec![7]);
    }
}
