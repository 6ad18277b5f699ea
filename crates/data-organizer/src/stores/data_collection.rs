use crate::errors::CollectionError;
use crate::models::{
    element::{Element, ElementId},
    surface::Surface,
};

/// Insertion ordered collection traversed through a single selection cursor.
///
/// The cursor is both the traversal position and the visual selection: moving
/// it un-highlights the element it leaves and highlights the one it reaches.
/// There is only one cursor per collection, so two traversals of the same
/// collection interleaved with each other will disturb one another.
pub trait DataCollection {
    /// Selects the first element, or nothing if the collection is empty.
    fn reset(&mut self);
    /// Clears the selection, then selects `target` if it is a member.
    fn reset_to(&mut self, target: Option<ElementId>);
    /// Appends `element` and selects it.
    fn add(&mut self, element: Element) -> Result<(), CollectionError>;
    /// Visits every element in insertion order.
    fn paint(&self, surface: &mut dyn Surface);
    /// Whether `next` would return an element.
    fn has_next(&self) -> bool;
    /// Returns the selected element and moves the selection to the following
    /// one, clearing it after the last element.
    fn next(&mut self) -> Option<Element>;
    /// Removes the selected element, if any. Nothing is selected afterwards.
    fn remove(&mut self);
    /// Removes every element. Nothing is selected afterwards.
    fn clear(&mut self);
}
