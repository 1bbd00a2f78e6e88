//! Search endpoints

use crate::core::{
    AutocompleteEntry, AutocompleteKind, Listing, Paginated, VideoWithChannel, VideoWithComments,
};
use crate::error::HolodexError;
use crate::platform::mapper::{
    map_autocomplete, map_page, map_videos_with_channel, map_videos_with_comments,
};
use crate::platform::transport::Transport;
use crate::platform::wire::{
    ApiAutocompleteEntry, ApiPaginated, ApiVideoWithChannel, ApiVideoWithComments,
};
use crate::query::{autocomplete_query, CommentSearchOptions, VideoSearchOptions};
use std::sync::Arc;
use tracing::debug;

const VIDEO_SEARCH: &[&str] = &["search", "videoSearch"];
const COMMENT_SEARCH: &[&str] = &["search", "commentSearch"];

/// Handles the search endpoints
#[derive(Debug, Clone)]
pub struct SearchHandler {
    transport: Arc<Transport>,
}

impl SearchHandler {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Search videos, as one page with a total
    pub async fn videos_paginated(
        &self,
        options: &VideoSearchOptions,
    ) -> Result<Paginated<VideoWithChannel>, HolodexError> {
        let page: ApiPaginated<ApiVideoWithChannel> = self
            .transport
            .post(VIDEO_SEARCH, &options.to_body(true))
            .await?;
        map_page(page, map_videos_with_channel)
    }

    /// Search videos, as a plain sequence
    pub async fn videos_unpaginated(
        &self,
        options: &VideoSearchOptions,
    ) -> Result<Vec<VideoWithChannel>, HolodexError> {
        let videos: Vec<ApiVideoWithChannel> = self
            .transport
            .post(VIDEO_SEARCH, &options.to_body(false))
            .await?;
        map_videos_with_channel(videos)
    }

    /// Search videos; paginated unless `paginated` is `Some(false)`
    pub async fn videos(
        &self,
        options: &VideoSearchOptions,
    ) -> Result<Listing<VideoWithChannel>, HolodexError> {
        if options.wants_pagination() {
            self.videos_paginated(options).await.map(Listing::Paginated)
        } else {
            self.videos_unpaginated(options).await.map(Listing::Unpaginated)
        }
    }

    /// Search comments, as one page with a total
    pub async fn comments_paginated(
        &self,
        options: &CommentSearchOptions,
    ) -> Result<Paginated<VideoWithComments>, HolodexError> {
        let page: ApiPaginated<ApiVideoWithComments> = self
            .transport
            .post(COMMENT_SEARCH, &options.to_body(true))
            .await?;
        map_page(page, map_videos_with_comments)
    }

    /// Search comments, as a plain sequence
    pub async fn comments_unpaginated(
        &self,
        options: &CommentSearchOptions,
    ) -> Result<Vec<VideoWithComments>, HolodexError> {
        let videos: Vec<ApiVideoWithComments> = self
            .transport
            .post(COMMENT_SEARCH, &options.to_body(false))
            .await?;
        map_videos_with_comments(videos)
    }

    /// Search comments; paginated unless `paginated` is `Some(false)`
    pub async fn comments(
        &self,
        options: &CommentSearchOptions,
    ) -> Result<Listing<VideoWithComments>, HolodexError> {
        if options.wants_pagination() {
            self.comments_paginated(options).await.map(Listing::Paginated)
        } else {
            self.comments_unpaginated(options).await.map(Listing::Unpaginated)
        }
    }

    /// Autocomplete suggestions for `query`
    ///
    /// The server ignores type filters on this endpoint, so `filter` is
    /// applied to the response.
    pub async fn autocomplete(
        &self,
        query: &str,
        filter: Option<AutocompleteKind>,
    ) -> Result<Vec<AutocompleteEntry>, HolodexError> {
        let entries: Vec<ApiAutocompleteEntry> = self
            .transport
            .get(&["search", "autocomplete"], &autocomplete_query(query))
            .await?;
        let received = entries.len();
        let entries = map_autocomplete(entries, filter);
        debug!("Autocomplete kept {} of {} entries", entries.len(), received);
        Ok(entries)
    }
}
