//! Records as the Holodex API sends them
//!
//! Field names follow the API (snake_case), counts may arrive as numeric
//! strings and timestamps are kept as raw strings until mapped. Required
//! fields are not optional here, so a response missing one fails to decode.

use crate::core::{ChannelType, VideoStatus, VideoType};
use serde::Deserialize;

/// A count the API may encode either as a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireCount {
    Number(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
pub struct ApiChannelMin {
    pub id: String,
    pub name: String,
    pub english_name: Option<String>,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    pub photo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiChannel {
    #[serde(flatten)]
    pub summary: ApiChannelMin,
    pub org: Option<String>,
    pub suborg: Option<String>,
    pub banner: Option<String>,
    pub twitter: Option<String>,
    pub video_count: Option<WireCount>,
    pub subscriber_count: Option<WireCount>,
    pub view_count: Option<WireCount>,
    pub clip_count: Option<WireCount>,
    pub lang: Option<String>,
    pub published_at: String,
    pub inactive: bool,
    pub description: String,
}

/// Channel embedded in a video; only the summary fields are guaranteed
#[derive(Debug, Deserialize)]
pub struct ApiEmbeddedChannel {
    #[serde(flatten)]
    pub summary: ApiChannelMin,
    pub org: Option<String>,
    pub suborg: Option<String>,
    pub banner: Option<String>,
    pub twitter: Option<String>,
    pub video_count: Option<WireCount>,
    pub subscriber_count: Option<WireCount>,
    pub view_count: Option<WireCount>,
    pub clip_count: Option<WireCount>,
    pub lang: Option<String>,
    pub published_at: Option<String>,
    pub inactive: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiMention {
    #[serde(flatten)]
    pub summary: ApiChannelMin,
    pub org: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiSong {
    pub name: String,
    pub original_artist: Option<String>,
    pub start: u64,
    pub end: u64,
    pub itunesid: Option<u64>,
    pub art: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiComment {
    pub comment_key: String,
    pub video_id: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiVideo {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub video_type: VideoType,
    pub topic_id: Option<String>,
    pub published_at: Option<String>,
    pub available_at: Option<String>,
    pub duration: u64,
    pub status: VideoStatus,
    pub start_scheduled: Option<String>,
    pub start_actual: Option<String>,
    pub end_actual: Option<String>,
    pub live_viewers: Option<u64>,
    pub description: String,
    #[serde(alias = "songCount")]
    pub songcount: Option<u32>,
    /// Absent on records that embed their channel object instead
    pub channel_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiVideoWithChannel {
    #[serde(flatten)]
    pub video: ApiVideo,
    pub channel: ApiChannelMin,
}

#[derive(Debug, Deserialize)]
pub struct ApiVideoFull {
    #[serde(flatten)]
    pub video: ApiVideo,
    pub clips: Option<Vec<ApiVideoWithChannel>>,
    pub sources: Option<Vec<ApiVideoWithChannel>>,
    pub refers: Option<Vec<ApiVideoWithChannel>>,
    pub simulcasts: Option<Vec<ApiVideoWithChannel>>,
    pub mentions: Option<Vec<ApiMention>>,
    pub comments: Option<Vec<ApiComment>>,
    pub recommendations: Option<Vec<ApiVideoWithChannel>>,
    pub songs: Option<Vec<ApiSong>>,
    pub channel: Option<ApiEmbeddedChannel>,
}

#[derive(Debug, Deserialize)]
pub struct ApiVideoWithComments {
    #[serde(flatten)]
    pub video: ApiVideoWithChannel,
    pub comments: Vec<ApiComment>,
}

/// Envelope returned when `paginated` is requested
#[derive(Debug, Deserialize)]
pub struct ApiPaginated<T> {
    pub total: WireCount,
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct ApiAutocompleteEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub text: Option<String>,
}

/// Body of a 400 response
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}
