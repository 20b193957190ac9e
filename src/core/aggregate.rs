//! The Aggregator: reduce a record collection to per-key sums and pick an
//! extremum.

use crate::errors::{Error, Result};
use std::collections::HashMap;
use std::hash::Hash;

/// Which end of the ranking to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Largest accumulated value.
    Max,
    /// Smallest accumulated value.
    Min,
}

/// Sums `value_fn` per `key_fn` key and selects the extremum.
///
/// Unseen keys start at zero. Ties resolve to the first-seen key, so the
/// result is deterministic for a given record order.
///
/// # Errors
/// Returns [`Error::EmptyCollection`] when `records` is empty.
pub fn rank_by<T, K, KF, VF>(
    records: &[T],
    key_fn: KF,
    value_fn: VF,
    select: Extremum,
) -> Result<(K, f64)>
where
    K: Eq + Hash + Clone,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> f64,
{
    let mut totals: HashMap<K, f64> = HashMap::new();
    let mut first_seen: Vec<K> = Vec::new();

    for record in records {
        let key = key_fn(record);
        let total = totals.entry(key.clone()).or_insert_with(|| {
            first_seen.push(key.clone());
            0.0
        });
        *total += value_fn(record);
    }

    // Scan in first-seen order; strict comparison keeps the earlier key on a
    // tie.
    let mut selected: Option<(K, f64)> = None;
    for key in first_seen {
        let total = totals[&key];
        let better = match &selected {
            None => true,
            Some((_, current)) => match select {
                Extremum::Max => total > *current,
                Extremum::Min => total < *current,
            },
        };
        if better {
            selected = Some((key, total));
        }
    }
    selected.ok_or(Error::EmptyCollection)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    fn id(pair: &(i64, f64)) -> i64 {
        pair.0
    }

    fn amount(pair: &(i64, f64)) -> f64 {
        pair.1
    }

    #[test]
    fn max_selects_largest_sum() {
        let records = [(1, 40.0), (2, 30.0), (1, 60.0), (2, 20.0)];
        let (key, total) = rank_by(&records, id, amount, Extremum::Max).unwrap();
        assert_eq!(key, 1);
        assert_eq!(total, 100.0);
    }

    #[test]
    fn min_selects_smallest_sum() {
        let records = [(1, 40.0), (2, 30.0), (1, 60.0), (2, 20.0)];
        let (key, total) = rank_by(&records, id, amount, Extremum::Min).unwrap();
        assert_eq!(key, 2);
        assert_eq!(total, 50.0);
    }

    #[test]
    fn ties_resolve_to_the_first_seen_key() {
        let records = [(7, 25.0), (3, 25.0), (9, 25.0)];
        let (max_key, _) = rank_by(&records, id, amount, Extremum::Max).unwrap();
        let (min_key, _) = rank_by(&records, id, amount, Extremum::Min).unwrap();
        assert_eq!(max_key, 7);
        assert_eq!(min_key, 7);
    }

    #[test]
    fn zero_valued_records_still_register_their_key() {
        let records = [(1, 0.0)];
        let (key, total) = rank_by(&records, id, amount, Extremum::Max).unwrap();
        assert_eq!((key, total), (1, 0.0));
    }

    #[test]
    fn empty_collection_is_rejected() {
        let records: [(i64, f64); 0] = [];
        let err = rank_by(&records, id, amount, Extremum::Max).unwrap_err();
        assert!(matches!(err, Error::EmptyCollection));
    }
}
