//! UI Components
//!
//! Leptos components for the ranking page.

mod value_list;
mod toolbar;
mod toast_stack;

pub use value_list::ValueList;
pub use toolbar::Toolbar;
pub use toast_stack::ToastStack;
