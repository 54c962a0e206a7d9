//! System-level modules
//!
//! - Logging initialization

pub mod logging;

pub use logging::{LogSink, init_logging};
