//! # holodex - typed client for the Holodex API
//!
//! Query live and upcoming VTuber streams, clips, channels and searches
//! from [Holodex](https://holodex.net) with strongly typed results.
//!
//! ## Features
//!
//! - One client sharing a connection pool across resource handlers
//! - Paginated and unpaginated variants of every listing endpoint
//! - Wire records normalized into camelCase domain types
//! - Server 400 messages surfaced as-is
//!
//! ## Example
//!
//! ```rust,no_run
//! use holodex::query::VideoFilter;
//! use holodex::HolodexClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HolodexClient::new("YOUR_API_KEY")?;
//!
//!     let filter = VideoFilter {
//!         org: Some("Hololive".to_string()),
//!         ..Default::default()
//!     };
//!     for video in client.videos().live(&filter).await?.items() {
//!         println!("{} ({})", video.video.title, video.video.status.as_str());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod core;
pub mod error;
pub mod platform;
pub mod query;
pub mod resources;
pub mod utils;

// Re-export main types
pub use client::{ClientConfig, HolodexClient};
pub use core::{
    AutocompleteEntry, AutocompleteKind, Channel, ChannelSummary, ChannelType, EmbeddedChannel,
    Listing, Paginated, Song, Video, VideoFull, VideoStatus, VideoType, VideoWithChannel,
    VideoWithComments,
};
pub use error::HolodexError;

/// Result type alias for holodex operations
pub type Result<T> = std::result::Result<T, HolodexError>;
