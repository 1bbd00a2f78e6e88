//! Resource handlers, one per API resource family

pub mod channels;
pub mod search;
pub mod videos;

pub use channels::*;
pub use search::*;
pub use videos::*;
