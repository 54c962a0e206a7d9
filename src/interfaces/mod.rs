//! User interfaces
//!
//! - `cli`: one-shot commands
//! - `tui`: interactive terminal UI

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;
