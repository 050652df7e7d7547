//! Memory storage and recall for Reminisce.
//!
//! Text is split by the [`chunker::Chunker`], embedded and pushed one chunk
//! at a time by the [`writer::MemoryWriter`], and recalled through the
//! [`reader::MemoryReader`], which turns search hits into a chat completion
//! and an illustration.

pub mod box_embedder;
pub mod box_vector;
pub mod chunker;
pub mod embedder;
pub mod prompt;
pub mod reader;
pub mod vector;
pub mod writer;

#[cfg(test)]
pub(crate) mod test_support;
