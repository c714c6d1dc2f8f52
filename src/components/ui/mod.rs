pub mod dropdown;

// Re-export component symbols so callers can `use crate::components::ui::Dropdown` etc.
pub use dropdown::*;
