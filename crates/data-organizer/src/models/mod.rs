pub mod element;
pub mod settings;
pub mod surface;
