pub mod array_data_collection;
pub mod data_collection;
