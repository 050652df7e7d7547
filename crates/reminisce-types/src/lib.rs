//! Shared domain types for Reminisce.
//!
//! This crate contains the core domain types used across the service:
//! memory chunks, stored vector records, recollections, chat and image
//! request shapes, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, thiserror.

pub mod config;
pub mod error;
pub mod image;
pub mod llm;
pub mod memory;
