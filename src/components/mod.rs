pub mod selection_bar;
pub mod skip_card;
pub mod skip_selector;
pub mod sort_selector;
pub mod status;
pub mod stepper;

pub use skip_selector::SkipSelector;
