//! Domain records returned to callers

pub mod autocomplete;
pub mod channel;
pub mod listing;
pub mod video;

pub use autocomplete::*;
pub use channel::*;
pub use listing::*;
pub use video::*;
