//! Logging and trace export for Reminisce.

pub mod tracing_setup;
