pub mod models;

pub use models::{demo_options, filter_options, DropdownOption};
