//! HTTP handlers.

pub mod memory;
