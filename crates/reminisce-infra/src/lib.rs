//! Infrastructure layer for Reminisce.
//!
//! Contains implementations of the collaborator traits defined in
//! `reminisce-core`: the Groclake VectorLake (embeddings + vector store) and
//! ModelLake (chat completion) HTTP clients, the text-to-image endpoint
//! client, plus configuration file loading and credential resolution.

pub mod config;
pub mod credentials;
pub mod groclake;
pub mod image;
