pub mod element_source;
pub mod organizer_service;
