use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::surface::Surface;

/// Horizontal distance between the positions of two consecutive elements
pub const OVERALL_WIDTH: i32 = 3;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A numeric record living in a collection.
///
/// Two elements are the same element only when they share an [`ElementId`];
/// equal values do not make equal elements. Use [`Element::compare_value`]
/// to order them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Element {
    id: ElementId,
    value: i64,
    pub color: (u8, u8, u8),
    position: Position,
    highlighted: bool,
}

impl Element {
    pub fn new(value: i64) -> Self {
        Self::with_color(value, (255, 165, 0))
    }

    pub fn with_color(value: i64, color: (u8, u8, u8)) -> Self {
        Self {
            id: ElementId::new(),
            value,
            color,
            position: Position::default(),
            highlighted: false,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn set_value(&mut self, value: i64) {
        self.value = value;
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_location(&mut self, x: i32, y: i32) {
        self.position = Position::new(x, y);
    }

    pub fn set_x(&mut self, x: i32) {
        self.position.x = x;
    }

    pub fn highlight(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn compare_value(&self, other: &Element) -> Ordering {
        self.value.cmp(&other.value)
    }

    pub fn paint(&self, surface: &mut dyn Surface) {
        surface.draw_element(self)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
