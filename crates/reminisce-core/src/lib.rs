//! Business logic and collaborator trait definitions for Reminisce.
//!
//! This crate defines the "ports" (embedder, vector store, chat model, image
//! generator) that the infrastructure layer implements, and the services
//! built on them: the chunker, the memory writer and the memory reader.
//! It depends only on `reminisce-types` -- never on `reminisce-infra` or any
//! network crate.

pub mod image;
pub mod llm;
pub mod memory;
