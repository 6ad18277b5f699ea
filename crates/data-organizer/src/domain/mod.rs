pub mod find_extremum;
pub mod merge_sort;
pub mod sort_strategy;
