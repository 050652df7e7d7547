//! HTTP layer for Reminisce.
//!
//! Memory write and read routes (with their legacy aliases), each accepting
//! GET and POST, plus a health check. Errors are `{"error": <message>}`.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;

#[cfg(test)]
pub(crate) mod test_support;
