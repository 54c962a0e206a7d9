//! App state and operations
//!
//! - state: core App structure and form state
//! - view_state: list/banner selectors
//! - link_operations: load, create, delete, copy
//! - navigation: focus and selection

mod link_operations;
mod navigation;
mod state;
mod view_state;

pub use state::{App, AppEvent, CurrentScreen, Focus, FormField, FormState};
pub use view_state::{ListView, banner_error, select_list_view};
