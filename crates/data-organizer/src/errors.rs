use thiserror::Error;

use crate::models::element::ElementId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The element is already a member of the collection it is being added to
    #[error("element {0} is already part of this collection")]
    DuplicateElement(ElementId),
}
