use crate::errors::CollectionError;
use crate::stores::data_collection::DataCollection;

use super::merge_sort::sort_collection;

/// Sorting capability that can be attached to an organizer
pub trait SortStrategy {
    fn name(&self) -> &'static str;
    /// Leaves `collection` in ascending order with nothing selected
    fn sort(&self, collection: &mut dyn DataCollection) -> Result<(), CollectionError>;
}

#[derive(Default, Clone, Copy, Debug)]
pub struct MergeSort;

impl SortStrategy for MergeSort {
    fn name(&self) -> &'static str {
        "merge sort"
    }

    fn sort(&self, collection: &mut dyn DataCollection) -> Result<(), CollectionError> {
        sort_collection(collection)
    }
}
