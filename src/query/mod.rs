//! Request parameter construction for each endpoint

pub mod channels;
pub mod pagination;
pub mod params;
pub mod search;
pub mod videos;

pub use channels::*;
pub use pagination::*;
pub use params::*;
pub use search::*;
pub use videos::*;
