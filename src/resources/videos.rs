//! Video endpoints
//!
//! Listing endpoints come in three forms: a paginated variant returning
//! `{total, items}`, an unpaginated variant returning a plain sequence, and
//! a dispatcher choosing between them from the options' `paginated` field.

use crate::core::{Listing, Paginated, VideoFull, VideoWithChannel};
use crate::error::HolodexError;
use crate::platform::mapper::{map_page, map_single_video, map_videos, map_videos_with_channel};
use crate::platform::transport::Transport;
use crate::platform::wire::{ApiPaginated, ApiVideoFull, ApiVideoWithChannel};
use crate::query::{
    simple_live_query, ChannelVideoType, ChannelVideosOptions, GetVideoOptions, QueryParams,
    VideoFilter, VideosOptions,
};
use std::sync::Arc;
use tracing::debug;

/// Handles all endpoints related to videos
#[derive(Debug, Clone)]
pub struct VideoHandler {
    transport: Arc<Transport>,
}

impl VideoHandler {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    async fn fetch_page(
        &self,
        segments: &[&str],
        query: &QueryParams,
    ) -> Result<Paginated<VideoFull>, HolodexError> {
        let page: ApiPaginated<ApiVideoFull> = self.transport.get(segments, query).await?;
        debug!("Received page of {} videos", page.items.len());
        map_page(page, map_videos)
    }

    async fn fetch_all(
        &self,
        segments: &[&str],
        query: &QueryParams,
    ) -> Result<Vec<VideoFull>, HolodexError> {
        let videos: Vec<ApiVideoFull> = self.transport.get(segments, query).await?;
        debug!("Received {} videos", videos.len());
        map_videos(videos)
    }

    /// Get a single video, optionally with comments and recommendations
    pub async fn get(
        &self,
        video_id: &str,
        options: &GetVideoOptions,
    ) -> Result<VideoFull, HolodexError> {
        let video: ApiVideoFull = self
            .transport
            .get(&["videos", video_id], &options.to_query())
            .await?;
        map_single_video(video)
    }

    /// Videos related to a channel, as one page with a total
    pub async fn channel_videos_paginated(
        &self,
        channel_id: &str,
        video_type: ChannelVideoType,
        options: &ChannelVideosOptions,
    ) -> Result<Paginated<VideoFull>, HolodexError> {
        self.fetch_page(
            &["channels", channel_id, video_type.as_str()],
            &options.to_query(true),
        )
        .await
    }

    /// Videos related to a channel, as a plain sequence
    pub async fn channel_videos_unpaginated(
        &self,
        channel_id: &str,
        video_type: ChannelVideoType,
        options: &ChannelVideosOptions,
    ) -> Result<Vec<VideoFull>, HolodexError> {
        self.fetch_all(
            &["channels", channel_id, video_type.as_str()],
            &options.to_query(false),
        )
        .await
    }

    /// Videos related to a channel; unpaginated unless `paginated` is `Some(true)`
    pub async fn channel_videos(
        &self,
        channel_id: &str,
        video_type: ChannelVideoType,
        options: &ChannelVideosOptions,
    ) -> Result<Listing<VideoFull>, HolodexError> {
        if options.wants_pagination() {
            self.channel_videos_paginated(channel_id, video_type, options)
                .await
                .map(Listing::Paginated)
        } else {
            self.channel_videos_unpaginated(channel_id, video_type, options)
                .await
                .map(Listing::Unpaginated)
        }
    }

    /// Filtered video listing, as one page with a total
    pub async fn list_paginated(
        &self,
        options: &VideosOptions,
    ) -> Result<Paginated<VideoFull>, HolodexError> {
        self.fetch_page(&["videos"], &options.to_query(true)).await
    }

    /// Filtered video listing, as a plain sequence
    pub async fn list_unpaginated(
        &self,
        options: &VideosOptions,
    ) -> Result<Vec<VideoFull>, HolodexError> {
        self.fetch_all(&["videos"], &options.to_query(false)).await
    }

    /// Filtered video listing; unpaginated unless `paginated` is `Some(true)`
    pub async fn list(&self, options: &VideosOptions) -> Result<Listing<VideoFull>, HolodexError> {
        if options.wants_pagination() {
            self.list_paginated(options).await.map(Listing::Paginated)
        } else {
            self.list_unpaginated(options).await.map(Listing::Unpaginated)
        }
    }

    /// Live and upcoming videos, as one page with a total
    pub async fn live_paginated(
        &self,
        filter: &VideoFilter,
    ) -> Result<Paginated<VideoFull>, HolodexError> {
        self.fetch_page(&["live"], &filter.to_query(true)).await
    }

    /// Live and upcoming videos, as a plain sequence
    pub async fn live_unpaginated(
        &self,
        filter: &VideoFilter,
    ) -> Result<Vec<VideoFull>, HolodexError> {
        self.fetch_all(&["live"], &filter.to_query(false)).await
    }

    /// Live and upcoming videos; unpaginated unless `paginated` is `Some(true)`
    pub async fn live(&self, filter: &VideoFilter) -> Result<Listing<VideoFull>, HolodexError> {
        if filter.wants_pagination() {
            self.live_paginated(filter).await.map(Listing::Paginated)
        } else {
            self.live_unpaginated(filter).await.map(Listing::Unpaginated)
        }
    }

    /// Live and upcoming videos for a set of channels in one request
    pub async fn simple_live<S: AsRef<str>>(
        &self,
        channel_ids: &[S],
    ) -> Result<Vec<VideoWithChannel>, HolodexError> {
        let videos: Vec<ApiVideoWithChannel> = self
            .transport
            .get(&["users", "live"], &simple_live_query(channel_ids))
            .await?;
        map_videos_with_channel(videos)
    }
}
