pub mod use_selection;
pub mod use_skips;
pub mod use_sort;
