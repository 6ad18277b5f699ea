use crate::models::element::{Element, ElementId};
use crate::stores::data_collection::DataCollection;

/// Selects the left-most element holding the largest value
pub fn find_max(collection: &mut dyn DataCollection) -> Option<ElementId> {
    find_extremum(collection, |candidate, best| candidate.value() > best.value())
}

/// Selects the left-most element holding the smallest value
pub fn find_min(collection: &mut dyn DataCollection) -> Option<ElementId> {
    find_extremum(collection, |candidate, best| candidate.value() < best.value())
}

/// Scans the whole collection keeping the best element seen so far, then
/// leaves it selected. `better` must be strict so ties keep the earliest one.
fn find_extremum<F>(collection: &mut dyn DataCollection, better: F) -> Option<ElementId>
where
    F: Fn(&Element, &Element) -> bool,
{
    collection.reset();

    let mut best = collection.next();
    while let Some(candidate) = collection.next() {
        if let Some(current) = &best {
            if better(&candidate, current) {
                best = Some(candidate);
            }
        }
    }

    let best = best.map(|element| element.id());
    collection.reset_to(best);
    best
}
