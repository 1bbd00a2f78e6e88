//! Query parameters for video endpoints

use crate::core::{VideoStatus, VideoType};
use crate::query::channels::Order;
use crate::query::pagination::PaginationDefault;
use crate::query::params::QueryParams;
use chrono::{DateTime, Utc};

/// Extra information the API can attach to each video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraInfo {
    Clips,
    Refers,
    Sources,
    Simulcasts,
    Mentions,
    Description,
    LiveInfo,
    ChannelStats,
    Songs,
}

impl ExtraInfo {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtraInfo::Clips => "clips",
            ExtraInfo::Refers => "refers",
            ExtraInfo::Sources => "sources",
            ExtraInfo::Simulcasts => "simulcasts",
            ExtraInfo::Mentions => "mentions",
            ExtraInfo::Description => "description",
            ExtraInfo::LiveInfo => "live_info",
            ExtraInfo::ChannelStats => "channel_stats",
            ExtraInfo::Songs => "songs",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<ExtraInfo> {
        match s.to_lowercase().as_str() {
            "clips" => Some(ExtraInfo::Clips),
            "refers" => Some(ExtraInfo::Refers),
            "sources" => Some(ExtraInfo::Sources),
            "simulcasts" => Some(ExtraInfo::Simulcasts),
            "mentions" => Some(ExtraInfo::Mentions),
            "description" => Some(ExtraInfo::Description),
            "live_info" => Some(ExtraInfo::LiveInfo),
            "channel_stats" => Some(ExtraInfo::ChannelStats),
            "songs" => Some(ExtraInfo::Songs),
            _ => None,
        }
    }
}

fn include_list(include: &Option<Vec<ExtraInfo>>) -> Option<impl Iterator<Item = &'static str> + '_> {
    include
        .as_ref()
        .map(|items| items.iter().map(|item| item.as_str()))
}

fn push_pagination(params: &mut QueryParams, paginated: bool) {
    if paginated {
        params.push("paginated", "true");
    }
}

/// Which videos of a channel to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelVideoType {
    /// Clips of the channel made by others
    Clips,
    /// The channel's own uploads
    Videos,
    /// Videos from other channels mentioning this one
    Collabs,
}

impl ChannelVideoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelVideoType::Clips => "clips",
            ChannelVideoType::Videos => "videos",
            ChannelVideoType::Collabs => "collabs",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<ChannelVideoType> {
        match s.to_lowercase().as_str() {
            "clips" => Some(ChannelVideoType::Clips),
            "videos" => Some(ChannelVideoType::Videos),
            "collabs" => Some(ChannelVideoType::Collabs),
            _ => None,
        }
    }
}

/// Options for `GET /channels/{id}/{type}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelVideosOptions {
    pub include: Option<Vec<ExtraInfo>>,
    /// Comma-separated language codes for clips
    pub lang: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub paginated: Option<bool>,
}

impl ChannelVideosOptions {
    pub const PAGINATION: PaginationDefault = PaginationDefault::Unpaginated;

    pub fn wants_pagination(&self) -> bool {
        Self::PAGINATION.resolve(self.paginated)
    }

    pub fn to_query(&self, paginated: bool) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_list("include", include_list(&self.include))
            .push_opt("lang", self.lang.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("offset", self.offset);
        push_pagination(&mut params, paginated);
        params
    }
}

/// Filters shared by `GET /live` and `GET /videos`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoFilter {
    /// Uploader channel id
    pub channel_id: Option<String>,
    /// A single video id
    pub id: Option<String>,
    pub include: Option<Vec<ExtraInfo>>,
    /// Comma-separated language codes for clips
    pub lang: Option<String>,
    pub limit: Option<u32>,
    /// Drop upcoming videos scheduled further out than this
    pub max_upcoming_hours: Option<u32>,
    /// Videos mentioning this channel, excluding its own uploads
    pub mentioned_channel_id: Option<String>,
    pub offset: Option<u32>,
    pub order: Option<Order>,
    pub org: Option<String>,
    pub paginated: Option<bool>,
    /// Video field to sort by
    pub sort: Option<String>,
    pub status: Option<VideoStatus>,
    pub topic: Option<String>,
    pub video_type: Option<VideoType>,
}

impl VideoFilter {
    pub const PAGINATION: PaginationDefault = PaginationDefault::Unpaginated;

    pub fn wants_pagination(&self) -> bool {
        Self::PAGINATION.resolve(self.paginated)
    }

    fn write_query(&self, params: &mut QueryParams, paginated: bool) {
        params
            .push_opt("channel_id", self.channel_id.as_deref())
            .push_opt("id", self.id.as_deref())
            .push_list("include", include_list(&self.include))
            .push_opt("lang", self.lang.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("max_upcoming_Hours", self.max_upcoming_hours)
            .push_opt("mentioned_channel_id", self.mentioned_channel_id.as_deref())
            .push_opt("offset", self.offset)
            .push_opt("order", self.order.map(|order| order.as_str()))
            .push_opt("org", self.org.as_deref())
            .push_opt("sort", self.sort.as_deref())
            .push_opt("status", self.status.map(|status| status.as_str()))
            .push_opt("topic", self.topic.as_deref())
            .push_opt("type", self.video_type.map(|kind| kind.as_str()));
        push_pagination(params, paginated);
    }

    pub fn to_query(&self, paginated: bool) -> QueryParams {
        let mut params = QueryParams::new();
        self.write_query(&mut params, paginated);
        params
    }
}

/// Options for `GET /videos`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideosOptions {
    pub filter: VideoFilter,
    /// Earliest `available_at`
    pub from: Option<DateTime<Utc>>,
    /// Latest `available_at`
    pub to: Option<DateTime<Utc>>,
}

impl VideosOptions {
    pub fn wants_pagination(&self) -> bool {
        self.filter.wants_pagination()
    }

    pub fn to_query(&self, paginated: bool) -> QueryParams {
        let mut params = QueryParams::new();
        self.filter.write_query(&mut params, paginated);
        params.push_date("from", self.from).push_date("to", self.to);
        params
    }
}

/// Options for `GET /videos/{id}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetVideoOptions {
    /// Embed timestamp comments
    pub comments: bool,
    /// Language filter for recommendations
    pub lang: Option<String>,
}

impl GetVideoOptions {
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if self.comments {
            params.push("c", "1");
        }
        params.push_opt("lang", self.lang.as_deref());
        params
    }
}

/// Query for `GET /users/live`
pub fn simple_live_query<S: AsRef<str>>(channel_ids: &[S]) -> QueryParams {
    let mut params = QueryParams::new();
    params.push_list("channels", Some(channel_ids.iter().map(|id| id.as_ref())));
    params
}
