use rustc_hash::FxHashSet as HashSet;

use crate::errors::CollectionError;
use crate::models::{
    element::{Element, ElementId, Position, OVERALL_WIDTH},
    surface::Surface,
};

use super::data_collection::DataCollection;

pub const INITIAL_CAPACITY: usize = 15;

/// Array backed [`DataCollection`].
pub struct ArrayDataCollection {
    items: Vec<Element>,
    /// Identities currently held, to refuse adding the same element twice
    members: HashSet<ElementId>,
    /// Location of the first item
    origin: Position,
    /// Index of the selected item, `None` when nothing is selected
    selected: Option<usize>,
}

impl ArrayDataCollection {
    pub fn new() -> Self {
        Self::with_origin(0, 0)
    }

    pub fn with_origin(x: i32, y: i32) -> Self {
        Self {
            items: Vec::with_capacity(INITIAL_CAPACITY),
            members: HashSet::default(),
            origin: Position::new(x, y),
            selected: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Element> {
        self.selected.and_then(|i| self.items.get(i))
    }

    pub fn elements(&self) -> &[Element] {
        &self.items
    }

    /// Moves the selection, un-highlighting the previous item first.
    /// An index past the end clears the selection.
    fn change_selected(&mut self, new_selected: Option<usize>) {
        if let Some(i) = self.selected {
            self.items[i].highlight(false);
        }

        self.selected = match new_selected {
            Some(i) if i < self.items.len() => {
                self.items[i].highlight(true);
                Some(i)
            }
            _ => None,
        };
    }

    fn grow_if_full(&mut self) {
        if self.items.len() == self.items.capacity() {
            let additional = self.items.capacity().max(1);
            self.items.reserve_exact(additional);
        }
    }
}

impl Default for ArrayDataCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl DataCollection for ArrayDataCollection {
    fn reset(&mut self) {
        self.change_selected(Some(0));
    }

    fn reset_to(&mut self, target: Option<ElementId>) {
        self.change_selected(None);

        if let Some(target) = target {
            if let Some(i) = self.items.iter().position(|item| item.id() == target) {
                self.change_selected(Some(i));
            }
        }
    }

    fn add(&mut self, mut element: Element) -> Result<(), CollectionError> {
        if !self.members.insert(element.id()) {
            return Err(CollectionError::DuplicateElement(element.id()));
        }
        self.grow_if_full();

        element.set_location(
            self.origin.x + self.items.len() as i32 * OVERALL_WIDTH,
            self.origin.y,
        );
        self.items.push(element);
        self.change_selected(Some(self.items.len() - 1));
        Ok(())
    }

    fn paint(&self, surface: &mut dyn Surface) {
        for item in &self.items {
            item.paint(surface);
        }
    }

    fn has_next(&self) -> bool {
        self.selected.is_some()
    }

    fn next(&mut self) -> Option<Element> {
        let selected = self.selected?;
        self.change_selected(Some(selected + 1));
        Some(self.items[selected].clone())
    }

    fn remove(&mut self) {
        if let Some(selected) = self.selected.take() {
            let removed = self.items.remove(selected);
            self.members.remove(&removed.id());

            for item in &mut self.items[selected..] {
                item.set_x(item.position().x - OVERALL_WIDTH);
            }
        }
    }

    fn clear(&mut self) {
        self.items.clear();
        self.members.clear();
        self.selected = None;
    }
}
