//! Video records

use crate::core::channel::{ChannelSummary, EmbeddedChannel, Mention};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content category of a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
    Stream,
    Clip,
}

impl VideoType {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoType::Stream => "stream",
            VideoType::Clip => "clip",
        }
    }
}

/// Lifecycle status of a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    New,
    Upcoming,
    Live,
    Past,
    Missing,
}

impl VideoStatus {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoStatus::New => "new",
            VideoStatus::Upcoming => "upcoming",
            VideoStatus::Live => "live",
            VideoStatus::Past => "past",
            VideoStatus::Missing => "missing",
        }
    }
}

/// Fields shared by every video record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub video_type: VideoType,
    pub topic_id: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub available_at: Option<DateTime<Utc>>,
    /// Duration in seconds
    pub duration: u64,
    pub status: VideoStatus,
    pub start_scheduled: Option<DateTime<Utc>>,
    pub start_actual: Option<DateTime<Utc>>,
    pub end_actual: Option<DateTime<Utc>>,
    pub live_viewers: Option<u64>,
    pub description: String,
    pub song_count: Option<u32>,
    pub channel_id: String,
}

impl Video {
    /// Check if the video is currently live
    pub fn is_live(&self) -> bool {
        self.status == VideoStatus::Live
    }

    /// Best known start time: actual, then scheduled, then availability
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_actual
            .or(self.start_scheduled)
            .or(self.available_at)
    }
}

/// A video with its uploader embedded
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoWithChannel {
    #[serde(flatten)]
    pub video: Video,
    pub channel: ChannelSummary,
}

/// A song sung in a video, with its position in seconds
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub name: String,
    pub original_artist: Option<String>,
    pub start: u64,
    pub end: u64,
    pub itunes_id: Option<u64>,
    pub art: Option<String>,
}

/// A comment left on a video
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_key: String,
    pub video_id: String,
    pub message: String,
}

/// A video with every optional relation the API can attach
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFull {
    #[serde(flatten)]
    pub video: Video,
    pub clips: Option<Vec<VideoWithChannel>>,
    pub sources: Option<Vec<VideoWithChannel>>,
    pub refers: Option<Vec<VideoWithChannel>>,
    pub simulcasts: Option<Vec<VideoWithChannel>>,
    pub mentions: Option<Vec<Mention>>,
    pub comments: Option<Vec<Comment>>,
    pub recommendations: Option<Vec<VideoWithChannel>>,
    pub songs: Option<Vec<Song>>,
    pub channel: Option<EmbeddedChannel>,
}

/// A comment search hit: the video and the comments that matched
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoWithComments {
    #[serde(flatten)]
    pub video: VideoWithChannel,
    pub comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn video() -> Video {
        Video {
            id: "abc123".to_string(),
            title: "Test".to_string(),
            video_type: VideoType::Stream,
            topic_id: None,
            published_at: None,
            available_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()),
            duration: 0,
            status: VideoStatus::Upcoming,
            start_scheduled: Some(Utc.with_ymd_and_hms(2024, 1, 1, 13, 0, 0).unwrap()),
            start_actual: None,
            end_actual: None,
            live_viewers: None,
            description: String::new(),
            song_count: None,
            channel_id: "UC1".to_string(),
        }
    }

    #[test]
    fn test_start_time_precedence() {
        let mut video = video();
        assert_eq!(video.start_time(), video.start_scheduled);

        video.start_actual = Some(Utc.with_ymd_and_hms(2024, 1, 1, 13, 5, 0).unwrap());
        assert_eq!(video.start_time(), video.start_actual);

        video.start_actual = None;
        video.start_scheduled = None;
        assert_eq!(video.start_time(), video.available_at);
    }

    #[test]
    fn test_is_live() {
        let mut video = video();
        assert!(!video.is_live());
        video.status = VideoStatus::Live;
        assert!(video.is_live());
    }

    #[test]
    fn test_status_round_trips_wire_names() {
        for status in [
            VideoStatus::New,
            VideoStatus::Upcoming,
            VideoStatus::Live,
            VideoStatus::Past,
            VideoStatus::Missing,
        ] {
            let encoded = serde_json::to_string(&status).unwrap();
            assert_eq!(encoded, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_video_serializes_camel_case_and_flattens() {
        let full = VideoWithChannel {
            video: video(),
            channel: ChannelSummary {
                id: "UC1".to_string(),
                name: "Name".to_string(),
                english_name: None,
                channel_type: crate::core::ChannelType::Vtuber,
                photo: None,
            },
        };
        let value = serde_json::to_value(full).unwrap();
        assert_eq!(value["id"], "abc123");
        assert_eq!(value["channelId"], "UC1");
        assert_eq!(value["type"], "stream");
        assert_eq!(value["channel"]["name"], "Name");
        assert_eq!(value["startScheduled"], "2024-01-01T13:00:00Z");
    }
}
