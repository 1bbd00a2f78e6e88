//! Channel endpoints

use crate::core::Channel;
use crate::error::HolodexError;
use crate::platform::mapper::{map_channel, map_channels};
use crate::platform::transport::Transport;
use crate::platform::wire::ApiChannel;
use crate::query::{ListChannelsOptions, QueryParams};
use std::sync::Arc;
use tracing::debug;

/// Handles all endpoints related to channels
#[derive(Debug, Clone)]
pub struct ChannelHandler {
    transport: Arc<Transport>,
}

impl ChannelHandler {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List channels matching the given filters
    pub async fn list(&self, options: &ListChannelsOptions) -> Result<Vec<Channel>, HolodexError> {
        let channels: Vec<ApiChannel> = self
            .transport
            .get(&["channels"], &options.to_query())
            .await?;
        debug!("Received {} channels", channels.len());
        map_channels(channels)
    }

    /// Get a channel's information
    pub async fn get(&self, channel_id: &str) -> Result<Channel, HolodexError> {
        let channel: ApiChannel = self
            .transport
            .get(&["channels", channel_id], &QueryParams::new())
            .await?;
        map_channel(channel)
    }
}
