//! Text-to-image endpoint client.

pub mod flux;

pub use flux::FluxImageClient;
