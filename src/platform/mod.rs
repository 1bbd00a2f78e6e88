//! Holodex API plumbing: wire shapes, mapping and HTTP transport

pub mod mapper;
pub mod transport;
pub mod wire;

pub use transport::{Transport, API_KEY_HEADER};
