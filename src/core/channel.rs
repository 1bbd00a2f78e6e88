//! Channel records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of channel as classified by Holodex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    /// A talent channel producing original content
    Vtuber,
    /// A clipper/translator channel
    Subber,
}

impl ChannelType {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Vtuber => "vtuber",
            ChannelType::Subber => "subber",
        }
    }
}

/// Minimal channel information embedded in other records
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub id: String,
    pub name: String,
    pub english_name: Option<String>,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    pub photo: Option<String>,
}

/// Full channel information
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(flatten)]
    pub summary: ChannelSummary,
    pub org: Option<String>,
    pub sub_org: Option<String>,
    pub banner: Option<String>,
    pub twitter: Option<String>,
    pub video_count: Option<u64>,
    pub subscriber_count: Option<u64>,
    pub view_count: Option<u64>,
    pub clip_count: Option<u64>,
    pub lang: Option<String>,
    pub published_at: DateTime<Utc>,
    pub inactive: bool,
    pub description: String,
}

/// Channel embedded in a video record
///
/// Listings embed only the summary and org; `include=channel_stats` and the
/// single-video endpoint may add more. Anything not sent stays `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedChannel {
    #[serde(flatten)]
    pub summary: ChannelSummary,
    pub org: Option<String>,
    pub sub_org: Option<String>,
    pub banner: Option<String>,
    pub twitter: Option<String>,
    pub video_count: Option<u64>,
    pub subscriber_count: Option<u64>,
    pub view_count: Option<u64>,
    pub clip_count: Option<u64>,
    pub lang: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub inactive: Option<bool>,
    pub description: Option<String>,
}

impl EmbeddedChannel {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    pub fn display_name(&self) -> &str {
        self.summary.display_name()
    }
}

impl Channel {
    /// Channel ID
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    /// English name if known, otherwise the display name
    pub fn display_name(&self) -> &str {
        self.summary.display_name()
    }
}

impl ChannelSummary {
    /// English name if known, otherwise the display name
    pub fn display_name(&self) -> &str {
        self.english_name.as_deref().unwrap_or(&self.name)
    }
}

/// A channel referenced in a video without being its uploader
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mention {
    #[serde(flatten)]
    pub channel: ChannelSummary,
    pub org: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(english_name: Option<&str>) -> ChannelSummary {
        ChannelSummary {
            id: "UC1".to_string(),
            name: "名前".to_string(),
            english_name: english_name.map(str::to_string),
            channel_type: ChannelType::Vtuber,
            photo: None,
        }
    }

    #[test]
    fn test_display_name_prefers_english() {
        assert_eq!(summary(Some("Name")).display_name(), "Name");
        assert_eq!(summary(None).display_name(), "名前");
    }

    #[test]
    fn test_channel_type_wire_names() {
        assert_eq!(ChannelType::Vtuber.as_str(), "vtuber");
        assert_eq!(ChannelType::Subber.as_str(), "subber");
        let parsed: ChannelType = serde_json::from_str("\"subber\"").unwrap();
        assert_eq!(parsed, ChannelType::Subber);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let value = serde_json::to_value(summary(Some("Name"))).unwrap();
        assert_eq!(value["englishName"], "Name");
        assert_eq!(value["type"], "vtuber");
        assert!(value["photo"].is_null());
    }
}
