//! Linkdeck - a terminal client for a URL shortening service
//!
//! This library provides the client side of a URL shortener: validation,
//! the REST client, a cached data-access layer and the user interfaces.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//! - **tui**: Terminal user interface (default)
//!
//! # Architecture
//! - `utils`: Validators and display helpers
//! - `client`: REST client for the shortening backend
//! - `store`: Query cache, queries and mutations with invalidation
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Execution modes
//! - `system`: Logging setup

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod store;
pub mod structs;
pub mod system;
pub mod utils;
