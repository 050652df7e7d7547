//! Request extractors.

pub mod input;
