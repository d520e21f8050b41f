use crate::board::BoardItem;
use crate::filter::BoardFilter;
use crate::models::{stages, Stage};

/// The filtered, ordered subset of entities currently in one stage.
#[derive(Debug)]
pub struct Bucket<'a, T: BoardItem> {
    pub stage: Stage<T::Status>,
    pub items: Vec<&'a T>,
}

impl<'a, T: BoardItem> Bucket<'a, T> {
    /// The per-column badge count: always the filtered length, never the
    /// unfiltered stage total.
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

/// Entities in `status`, in collection order, after applying `filter`.
pub fn bucket_for<'a, T: BoardItem>(
    items: &'a [T],
    status: T::Status,
    filter: &BoardFilter,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| item.status() == status && filter.matches(*item))
        .collect()
}

/// Group a collection into one bucket per stage, in stage order.
///
/// Entities passing the filter land in exactly the bucket matching their
/// status; entities failing it land in none. Relative order within a bucket
/// is the collection order.
pub fn compute_buckets<'a, T: BoardItem>(items: &'a [T], filter: &BoardFilter) -> Vec<Bucket<'a, T>> {
    stages::<T::Status>()
        .into_iter()
        .map(|stage| Bucket {
            items: bucket_for(items, stage.status, filter),
            stage,
        })
        .collect()
}
