//! Utility functions for holodex

pub mod url;

pub use url::*;
