//! Groclake HTTP clients.
//!
//! VectorLake provides embeddings and the vector store; ModelLake provides
//! chat completion. Both share one authenticated HTTP transport.

pub mod client;
pub mod model_lake;
pub mod types;
pub mod vector_lake;

pub use model_lake::ModelLakeClient;
pub use vector_lake::VectorLakeClient;
