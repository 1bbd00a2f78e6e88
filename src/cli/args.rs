//! Command line argument parsing

use crate::client::{ClientConfig, DEFAULT_BASE_URL};
use crate::core::{AutocompleteKind, ChannelType, VideoStatus, VideoType};
use crate::error::HolodexError;
use crate::query::{
    ChannelVideoType, ChannelVideosOptions, CommentSearchOptions, ExtraInfo, GetVideoOptions,
    ListChannelsOptions, Order, SearchScope, SearchSort, VideoFilter, VideoSearchOptions,
    VideosOptions,
};
use chrono::{DateTime, Utc};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::time::Duration;

/// Holodex - query VTuber streams, clips and channels from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Holodex API key
    #[arg(long, env = "HOLODEX_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API root URL
    #[arg(long, value_name = "URL", env = "HOLODEX_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP timeout (e.g., 30s, 1m); none by default
    #[arg(long, value_name = "DURATION")]
    pub timeout: Option<humantime::Duration>,

    /// Override User-Agent header
    #[arg(long, value_name = "USER_AGENT")]
    pub user_agent: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (only results and errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Live and upcoming videos
    Live(FilterArgs),

    /// Videos, optionally bounded by a time window
    Videos {
        #[command(flatten)]
        filter: FilterArgs,

        /// Only videos available after this instant (RFC 3339)
        #[arg(long, value_name = "TIME")]
        from: Option<DateTime<Utc>>,

        /// Only videos available before this instant (RFC 3339)
        #[arg(long, value_name = "TIME")]
        to: Option<DateTime<Utc>>,
    },

    /// Clips, uploads or collabs of one channel
    ChannelVideos {
        /// Channel ID
        channel_id: String,

        /// Which videos to list
        #[arg(long = "type", value_enum, default_value = "videos")]
        kind: ChannelVideoKindArg,

        /// Extra info to include (comma separated)
        #[arg(long, value_delimiter = ',', value_parser = parse_extra_info)]
        include: Vec<ExtraInfo>,

        /// Comma separated language codes for clips
        #[arg(long)]
        lang: Option<String>,

        #[arg(long)]
        limit: Option<u32>,

        #[arg(long)]
        offset: Option<u32>,

        /// Ask for a page with a total
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        paginated: Option<bool>,
    },

    /// One video with its related content
    Video {
        /// Video ID
        video_id: String,

        /// Include timestamp comments
        #[arg(long)]
        comments: bool,

        /// Comma separated language codes for related clips
        #[arg(long)]
        lang: Option<String>,
    },

    /// Live and upcoming videos of specific channels
    UsersLive {
        /// Channel IDs
        #[arg(required = true)]
        channel_ids: Vec<String>,
    },

    /// List channels
    Channels {
        #[arg(long)]
        org: Option<String>,

        #[arg(long)]
        lang: Option<String>,

        #[arg(long)]
        limit: Option<u32>,

        #[arg(long)]
        offset: Option<u32>,

        #[arg(long, value_enum)]
        order: Option<OrderArg>,

        /// Field to sort by
        #[arg(long)]
        sort: Option<String>,

        #[arg(long = "type", value_enum)]
        channel_type: Option<ChannelTypeArg>,
    },

    /// One channel
    Channel {
        /// Channel ID
        channel_id: String,
    },

    /// Search videos by title and description
    Search {
        /// Text conditions
        conditions: Vec<String>,

        #[command(flatten)]
        scope: ScopeArgs,
    },

    /// Search videos by timestamp comments
    Comments {
        /// Comment text
        #[arg(required = true)]
        comment: Vec<String>,

        #[command(flatten)]
        scope: ScopeArgs,
    },

    /// Suggest channels and topics
    Autocomplete {
        /// Partial query
        query: String,

        /// Keep only suggestions of this kind
        #[arg(long, value_enum)]
        kind: Option<AutocompleteKindArg>,
    },
}

/// Filters shared by `live` and `videos`
#[derive(ClapArgs, Debug, Default)]
pub struct FilterArgs {
    #[arg(long)]
    pub channel_id: Option<String>,

    /// Comma separated video IDs
    #[arg(long)]
    pub id: Option<String>,

    /// Extra info to include (comma separated)
    #[arg(long, value_delimiter = ',', value_parser = parse_extra_info)]
    pub include: Vec<ExtraInfo>,

    #[arg(long)]
    pub lang: Option<String>,

    #[arg(long)]
    pub limit: Option<u32>,

    #[arg(long)]
    pub max_upcoming_hours: Option<u32>,

    #[arg(long)]
    pub mentioned_channel_id: Option<String>,

    #[arg(long)]
    pub offset: Option<u32>,

    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    #[arg(long)]
    pub org: Option<String>,

    /// Ask for a page with a total
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub paginated: Option<bool>,

    /// Field to sort by
    #[arg(long)]
    pub sort: Option<String>,

    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    #[arg(long)]
    pub topic: Option<String>,

    #[arg(long = "type", value_enum)]
    pub video_type: Option<VideoTypeArg>,
}

/// Scope shared by both searches
#[derive(ClapArgs, Debug, Default)]
pub struct ScopeArgs {
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Comma separated language codes
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Comma separated video types
    #[arg(long, value_enum, value_delimiter = ',')]
    pub target: Vec<VideoTypeArg>,

    #[arg(long, value_delimiter = ',')]
    pub topic: Vec<String>,

    /// Comma separated channel IDs
    #[arg(long = "channel", value_delimiter = ',')]
    pub channels: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub org: Vec<String>,

    #[arg(long)]
    pub offset: Option<u32>,

    #[arg(long)]
    pub limit: Option<u32>,

    /// Ask for a page with a total (default true)
    #[arg(long)]
    pub paginated: Option<bool>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum ChannelVideoKindArg {
    Clips,
    Videos,
    Collabs,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum OrderArg {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum ChannelTypeArg {
    Vtuber,
    Subber,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum StatusArg {
    New,
    Upcoming,
    Live,
    Past,
    Missing,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum VideoTypeArg {
    Stream,
    Clip,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum SortArg {
    Newest,
    Oldest,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum AutocompleteKindArg {
    Channel,
    Topic,
}

impl From<ChannelVideoKindArg> for ChannelVideoType {
    fn from(kind: ChannelVideoKindArg) -> Self {
        match kind {
            ChannelVideoKindArg::Clips => ChannelVideoType::Clips,
            ChannelVideoKindArg::Videos => ChannelVideoType::Videos,
            ChannelVideoKindArg::Collabs => ChannelVideoType::Collabs,
        }
    }
}

impl From<OrderArg> for Order {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Asc => Order::Asc,
            OrderArg::Desc => Order::Desc,
        }
    }
}

impl From<ChannelTypeArg> for ChannelType {
    fn from(channel_type: ChannelTypeArg) -> Self {
        match channel_type {
            ChannelTypeArg::Vtuber => ChannelType::Vtuber,
            ChannelTypeArg::Subber => ChannelType::Subber,
        }
    }
}

impl From<StatusArg> for VideoStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::New => VideoStatus::New,
            StatusArg::Upcoming => VideoStatus::Upcoming,
            StatusArg::Live => VideoStatus::Live,
            StatusArg::Past => VideoStatus::Past,
            StatusArg::Missing => VideoStatus::Missing,
        }
    }
}

impl From<VideoTypeArg> for VideoType {
    fn from(video_type: VideoTypeArg) -> Self {
        match video_type {
            VideoTypeArg::Stream => VideoType::Stream,
            VideoTypeArg::Clip => VideoType::Clip,
        }
    }
}

impl From<SortArg> for SearchSort {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Newest => SearchSort::Newest,
            SortArg::Oldest => SearchSort::Oldest,
        }
    }
}

impl From<AutocompleteKindArg> for AutocompleteKind {
    fn from(kind: AutocompleteKindArg) -> Self {
        match kind {
            AutocompleteKindArg::Channel => AutocompleteKind::Channel,
            AutocompleteKindArg::Topic => AutocompleteKind::Topic,
        }
    }
}

fn parse_extra_info(s: &str) -> Result<ExtraInfo, String> {
    ExtraInfo::from_str(s).ok_or_else(|| format!("unknown extra info '{}'", s))
}

/// Both bounds given with `from` after `to`
pub fn is_inverted_window(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> bool {
    matches!((from, to), (Some(from), Some(to)) if from > to)
}

/// `None` for an empty list so the parameter is left out entirely
fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

impl FilterArgs {
    pub fn to_filter(&self) -> VideoFilter {
        VideoFilter {
            channel_id: self.channel_id.clone(),
            id: self.id.clone(),
            include: non_empty(self.include.clone()),
            lang: self.lang.clone(),
            limit: self.limit,
            max_upcoming_hours: self.max_upcoming_hours,
            mentioned_channel_id: self.mentioned_channel_id.clone(),
            offset: self.offset,
            order: self.order.map(Into::into),
            org: self.org.clone(),
            paginated: self.paginated,
            sort: self.sort.clone(),
            status: self.status.map(Into::into),
            topic: self.topic.clone(),
            video_type: self.video_type.map(Into::into),
        }
    }
}

impl ScopeArgs {
    pub fn to_scope(&self) -> SearchScope {
        SearchScope {
            sort: self.sort.map(Into::into),
            lang: non_empty(self.lang.clone()),
            target: non_empty(self.target.iter().map(|&t| t.into()).collect()),
            topic: non_empty(self.topic.clone()),
            channels: non_empty(self.channels.clone()),
            org: non_empty(self.org.clone()),
            offset: self.offset,
            limit: self.limit,
            paginated: self.paginated,
        }
    }
}

impl Command {
    pub fn videos_options(
        filter: &FilterArgs,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> VideosOptions {
        VideosOptions {
            filter: filter.to_filter(),
            from,
            to,
        }
    }

    pub fn channel_videos_options(
        include: &[ExtraInfo],
        lang: &Option<String>,
        limit: Option<u32>,
        offset: Option<u32>,
        paginated: Option<bool>,
    ) -> ChannelVideosOptions {
        ChannelVideosOptions {
            include: non_empty(include.to_vec()),
            lang: lang.clone(),
            limit,
            offset,
            paginated,
        }
    }

    pub fn get_video_options(comments: bool, lang: &Option<String>) -> GetVideoOptions {
        GetVideoOptions {
            comments,
            lang: lang.clone(),
        }
    }

    pub fn video_search_options(conditions: &[String], scope: &ScopeArgs) -> VideoSearchOptions {
        VideoSearchOptions {
            scope: scope.to_scope(),
            conditions: non_empty(conditions.to_vec()),
        }
    }

    pub fn comment_search_options(comment: &[String], scope: &ScopeArgs) -> CommentSearchOptions {
        CommentSearchOptions {
            scope: scope.to_scope(),
            comment: non_empty(comment.to_vec()),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn list_channels_options(
        org: &Option<String>,
        lang: &Option<String>,
        limit: Option<u32>,
        offset: Option<u32>,
        order: Option<OrderArg>,
        sort: &Option<String>,
        channel_type: Option<ChannelTypeArg>,
    ) -> ListChannelsOptions {
        ListChannelsOptions {
            lang: lang.clone(),
            limit,
            offset,
            order: order.map(Into::into),
            org: org.clone(),
            sort: sort.clone(),
            channel_type: channel_type.map(Into::into),
        }
    }
}

impl Args {
    /// Get HTTP timeout as Duration
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Into::into)
    }

    /// Client configuration from the global options
    pub fn client_config(&self) -> Result<ClientConfig, HolodexError> {
        let api_key = self
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or(HolodexError::MissingApiKey)?;

        let mut config = ClientConfig::new(api_key).with_base_url(self.base_url.clone());
        if let Some(timeout) = self.timeout_duration() {
            config = config.with_timeout(timeout);
        }
        if let Some(user_agent) = &self.user_agent {
            config = config.with_user_agent(user_agent.clone());
        }
        Ok(config)
    }

    /// Get output verbosity level
    pub fn verbosity_level(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else if self.verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbosityLevel {
    /// Quiet (only results and errors)
    Quiet,
    /// Normal
    Normal,
    /// Verbose (debug info)
    Verbose,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["holodex", "--api-key", "key"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_verbosity_level() {
        assert_eq!(parse(&["live"]).verbosity_level(), VerbosityLevel::Normal);
        assert_eq!(parse(&["-q", "live"]).verbosity_level(), VerbosityLevel::Quiet);
        assert_eq!(parse(&["live", "-v"]).verbosity_level(), VerbosityLevel::Verbose);
    }

    #[test]
    fn test_client_config() {
        let args = parse(&["--timeout", "30s", "--base-url", "http://localhost:1234", "live"]);
        let config = args.client_config().unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, "http://localhost:1234");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_client_config_without_timeout() {
        let config = parse(&["live"]).client_config().unwrap();
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_client_config_requires_key() {
        let args = Args::try_parse_from(["holodex", "--api-key", "", "live"]).unwrap();
        assert!(matches!(args.client_config(), Err(HolodexError::MissingApiKey)));
    }

    #[test]
    fn test_live_filter() {
        let args = parse(&[
            "live",
            "--org",
            "Hololive",
            "--include",
            "mentions,live_info",
            "--status",
            "upcoming",
            "--type",
            "stream",
            "--paginated",
        ]);
        let Command::Live(filter) = args.command else {
            panic!("expected live command");
        };

        let filter = filter.to_filter();
        assert_eq!(filter.org.as_deref(), Some("Hololive"));
        assert_eq!(filter.include, Some(vec![ExtraInfo::Mentions, ExtraInfo::LiveInfo]));
        assert_eq!(filter.status, Some(VideoStatus::Upcoming));
        assert_eq!(filter.video_type, Some(VideoType::Stream));
        assert_eq!(filter.paginated, Some(true));
    }

    #[test]
    fn test_live_filter_defaults() {
        let Command::Live(filter) = parse(&["live"]).command else {
            panic!("expected live command");
        };
        let filter = filter.to_filter();
        assert!(filter.include.is_none());
        assert!(filter.paginated.is_none());
    }

    #[test]
    fn test_rejects_unknown_extra_info() {
        let result = Args::try_parse_from(["holodex", "--api-key", "k", "live", "--include", "nope"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_videos_time_window() {
        let args = parse(&["videos", "--from", "2024-01-01T00:00:00Z"]);
        let Command::Videos { filter, from, to } = args.command else {
            panic!("expected videos command");
        };
        let options = Command::videos_options(&filter, from, to);
        assert_eq!(options.from.map(|d| d.timestamp()), Some(1_704_067_200));
        assert!(options.to.is_none());
    }

    #[test]
    fn test_inverted_window() {
        let early = "2024-01-01T00:00:00Z".parse().ok();
        let late = "2024-02-01T00:00:00Z".parse().ok();
        assert!(is_inverted_window(late, early));
        assert!(!is_inverted_window(early, late));
        assert!(!is_inverted_window(early, early));
        assert!(!is_inverted_window(late, None));
        assert!(!is_inverted_window(None, early));
    }

    #[test]
    fn test_channel_videos_kind() {
        let args = parse(&["channel-videos", "UC1", "--type", "collabs"]);
        let Command::ChannelVideos { channel_id, kind, .. } = args.command else {
            panic!("expected channel-videos command");
        };
        assert_eq!(channel_id, "UC1");
        assert_eq!(ChannelVideoType::from(kind), ChannelVideoType::Collabs);
    }

    #[test]
    fn test_search_scope() {
        let args = parse(&[
            "search",
            "karaoke",
            "--org",
            "Hololive,Nijisanji",
            "--target",
            "clip",
            "--paginated",
            "false",
        ]);
        let Command::Search { conditions, scope } = args.command else {
            panic!("expected search command");
        };

        let options = Command::video_search_options(&conditions, &scope);
        assert_eq!(options.conditions, Some(vec!["karaoke".to_string()]));
        assert_eq!(
            options.scope.org,
            Some(vec!["Hololive".to_string(), "Nijisanji".to_string()])
        );
        assert_eq!(options.scope.target, Some(vec![VideoType::Clip]));
        assert!(!options.wants_pagination());
        assert!(options.scope.lang.is_none());
    }

    #[test]
    fn test_comment_search_requires_text() {
        let result = Args::try_parse_from(["holodex", "--api-key", "k", "comments"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_autocomplete_kind() {
        let args = parse(&["autocomplete", "sui", "--kind", "channel"]);
        let Command::Autocomplete { query, kind } = args.command else {
            panic!("expected autocomplete command");
        };
        assert_eq!(query, "sui");
        assert_eq!(kind.map(AutocompleteKind::from), Some(AutocompleteKind::Channel));
    }
}
