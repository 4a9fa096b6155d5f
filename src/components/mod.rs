pub mod dropdown;
pub mod dropdown_view;
pub mod footer;
pub mod header;
pub mod history;

pub use dropdown::{ChangeListener, Dropdown, ItemProps};
pub use dropdown_view::{DropdownHit, DropdownLayout, DropdownView};
