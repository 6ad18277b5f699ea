use std::cmp::Ordering;

use crate::errors::CollectionError;
use crate::stores::array_data_collection::ArrayDataCollection;
use crate::stores::data_collection::DataCollection;

/// Counts the elements by walking the whole collection.
///
/// The cursor is left on the first element, whatever it was before.
pub fn size<C: DataCollection + ?Sized>(collection: &mut C) -> usize {
    let mut size = 0;
    collection.reset();
    while collection.has_next() {
        size += 1;
        collection.next();
    }
    collection.reset();
    size
}

/// Copies the first half (rounded up) and the second half (rounded down) of
/// `collection` into two new collections.
///
/// The cursor of `collection` is drained, its elements are left in place.
pub fn split<C>(collection: &mut C) -> Result<(C, C), CollectionError>
where
    C: DataCollection + Default,
{
    let size = size(collection);
    let middle = (size + 1) / 2;

    let mut first = C::default();
    for _ in 0..middle {
        if let Some(element) = collection.next() {
            first.add(element)?;
        }
    }

    let mut second = C::default();
    for _ in middle..size {
        if let Some(element) = collection.next() {
            second.add(element)?;
        }
    }

    Ok((first, second))
}

/// Merges two sorted collections into a new one.
///
/// On equal values the element of `first` goes before the element of `second`.
pub fn merge<C>(first: &mut C, second: &mut C) -> Result<C, CollectionError>
where
    C: DataCollection + Default,
{
    let mut result = C::default();
    first.reset();
    second.reset();

    let mut first_item = first.next();
    let mut second_item = second.next();
    loop {
        match (first_item.take(), second_item.take()) {
            (None, None) => break,
            (Some(from_first), None) => {
                result.add(from_first)?;
                first_item = first.next();
            }
            (None, Some(from_second)) => {
                result.add(from_second)?;
                second_item = second.next();
            }
            (Some(from_first), Some(from_second)) => {
                if from_first.compare_value(&from_second) != Ordering::Greater {
                    result.add(from_first)?;
                    first_item = first.next();
                    second_item = Some(from_second);
                } else {
                    result.add(from_second)?;
                    second_item = second.next();
                    first_item = Some(from_first);
                }
            }
        }
    }

    Ok(result)
}

/// Sorts by value into a new collection. Collections of zero or one element
/// are handed back as they are.
pub fn merge_sort<C>(mut collection: C) -> Result<C, CollectionError>
where
    C: DataCollection + Default,
{
    if size(&mut collection) <= 1 {
        return Ok(collection);
    }

    let (first, second) = split(&mut collection)?;
    let mut first = merge_sort(first)?;
    let mut second = merge_sort(second)?;
    merge(&mut first, &mut second)
}

/// Sorts a live collection: its elements are merge sorted through temporary
/// collections, then added back in ascending order with nothing selected.
pub fn sort_collection(collection: &mut dyn DataCollection) -> Result<(), CollectionError> {
    let mut unsorted = ArrayDataCollection::new();
    collection.reset();
    while let Some(element) = collection.next() {
        unsorted.add(element)?;
    }

    let mut sorted = merge_sort(unsorted)?;

    collection.clear();
    sorted.reset();
    while let Some(element) = sorted.next() {
        collection.add(element)?;
    }
    collection.reset_to(None);
    Ok(())
}
