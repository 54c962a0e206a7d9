//! Runtime: execution mode dispatch

pub mod modes;
