//! Conversion of wire records into domain records
//!
//! Every endpoint that returns channels or videos goes through these
//! functions, so a record maps the same way no matter where it came from.
//! Absent or null wire fields stay `None`; counts and timestamps are parsed
//! only when present and a malformed value is an error.

use crate::core::{
    AutocompleteEntry, AutocompleteKind, Channel, ChannelSummary, Comment, EmbeddedChannel,
    Mention, Paginated, Song, Video, VideoFull, VideoWithChannel, VideoWithComments,
};
use crate::error::HolodexError;
use crate::platform::wire::{
    ApiAutocompleteEntry, ApiChannel, ApiChannelMin, ApiComment, ApiEmbeddedChannel, ApiMention,
    ApiPaginated, ApiSong, ApiVideo, ApiVideoFull, ApiVideoWithChannel, ApiVideoWithComments,
    WireCount,
};
use chrono::{DateTime, Utc};

type Result<T> = std::result::Result<T, HolodexError>;

/// Parse an optional count; an empty string counts as absent
pub fn parse_count(field: &'static str, value: Option<WireCount>) -> Result<Option<u64>> {
    match value {
        None => Ok(None),
        Some(WireCount::Number(n)) => Ok(Some(n)),
        Some(WireCount::Text(text)) if text.is_empty() => Ok(None),
        Some(WireCount::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| HolodexError::InvalidCount { field, value: text }),
    }
}

/// Parse an optional RFC 3339 timestamp; an empty string counts as absent
pub fn parse_timestamp(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<DateTime<Utc>>> {
    match value {
        Some(text) if !text.is_empty() => parse_required_timestamp(field, text).map(Some),
        _ => Ok(None),
    }
}

fn parse_required_timestamp(field: &'static str, value: String) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&value)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|source| HolodexError::InvalidTimestamp {
            field,
            value,
            source,
        })
}

pub fn map_channel_summary(channel: ApiChannelMin) -> ChannelSummary {
    ChannelSummary {
        id: channel.id,
        name: channel.name,
        english_name: channel.english_name,
        channel_type: channel.channel_type,
        photo: channel.photo,
    }
}

pub fn map_channel(channel: ApiChannel) -> Result<Channel> {
    Ok(Channel {
        summary: map_channel_summary(channel.summary),
        org: channel.org,
        sub_org: channel.suborg,
        banner: channel.banner,
        twitter: channel.twitter,
        video_count: parse_count("video_count", channel.video_count)?,
        subscriber_count: parse_count("subscriber_count", channel.subscriber_count)?,
        view_count: parse_count("view_count", channel.view_count)?,
        clip_count: parse_count("clip_count", channel.clip_count)?,
        lang: channel.lang,
        published_at: parse_required_timestamp("published_at", channel.published_at)?,
        inactive: channel.inactive,
        description: channel.description,
    })
}

pub fn map_channels(channels: Vec<ApiChannel>) -> Result<Vec<Channel>> {
    channels.into_iter().map(map_channel).collect()
}

/// Map a channel embedded in a video, keeping whatever subset was sent
pub fn map_embedded_channel(channel: ApiEmbeddedChannel) -> Result<EmbeddedChannel> {
    Ok(EmbeddedChannel {
        summary: map_channel_summary(channel.summary),
        org: channel.org,
        sub_org: channel.suborg,
        banner: channel.banner,
        twitter: channel.twitter,
        video_count: parse_count("video_count", channel.video_count)?,
        subscriber_count: parse_count("subscriber_count", channel.subscriber_count)?,
        view_count: parse_count("view_count", channel.view_count)?,
        clip_count: parse_count("clip_count", channel.clip_count)?,
        lang: channel.lang,
        published_at: parse_timestamp("published_at", channel.published_at)?,
        inactive: channel.inactive,
        description: channel.description,
    })
}

pub fn map_mentions(mentions: Vec<ApiMention>) -> Vec<Mention> {
    mentions
        .into_iter()
        .map(|mention| Mention {
            channel: map_channel_summary(mention.summary),
            org: mention.org,
        })
        .collect()
}

pub fn map_comments(comments: Vec<ApiComment>) -> Vec<Comment> {
    comments
        .into_iter()
        .map(|comment| Comment {
            comment_key: comment.comment_key,
            video_id: comment.video_id,
            message: comment.message,
        })
        .collect()
}

/// Map the common video fields; `owner` supplies the channel id when the
/// record embeds its channel instead of carrying `channel_id`
fn map_video(video: ApiVideo, owner: Option<&str>) -> Result<Video> {
    let channel_id = video
        .channel_id
        .or_else(|| owner.map(str::to_string))
        .ok_or(HolodexError::MissingField("channel_id"))?;

    Ok(Video {
        id: video.id,
        title: video.title,
        video_type: video.video_type,
        topic_id: video.topic_id,
        published_at: parse_timestamp("published_at", video.published_at)?,
        available_at: parse_timestamp("available_at", video.available_at)?,
        duration: video.duration,
        status: video.status,
        start_scheduled: parse_timestamp("start_scheduled", video.start_scheduled)?,
        start_actual: parse_timestamp("start_actual", video.start_actual)?,
        end_actual: parse_timestamp("end_actual", video.end_actual)?,
        live_viewers: video.live_viewers,
        description: video.description,
        song_count: video.songcount,
        channel_id,
    })
}

fn map_video_with_channel(video: ApiVideoWithChannel) -> Result<VideoWithChannel> {
    let channel = map_channel_summary(video.channel);
    Ok(VideoWithChannel {
        video: map_video(video.video, Some(channel.id.as_str()))?,
        channel,
    })
}

/// Map a batch of videos that embed their channel
///
/// Clips, sources, refers, simulcasts, recommendations and search results
/// all share this shape.
pub fn map_videos_with_channel(videos: Vec<ApiVideoWithChannel>) -> Result<Vec<VideoWithChannel>> {
    videos.into_iter().map(map_video_with_channel).collect()
}

fn map_related(videos: Option<Vec<ApiVideoWithChannel>>) -> Result<Option<Vec<VideoWithChannel>>> {
    videos.map(map_videos_with_channel).transpose()
}

pub fn map_songs(songs: Vec<ApiSong>) -> Vec<Song> {
    songs
        .into_iter()
        .map(|song| Song {
            name: song.name,
            original_artist: song.original_artist,
            start: song.start,
            end: song.end,
            itunes_id: song.itunesid,
            art: song.art,
        })
        .collect()
}

fn map_video_full(video: ApiVideoFull) -> Result<VideoFull> {
    let channel = video.channel.map(map_embedded_channel).transpose()?;
    let owner = channel.as_ref().map(EmbeddedChannel::id);

    Ok(VideoFull {
        video: map_video(video.video, owner)?,
        clips: map_related(video.clips)?,
        sources: map_related(video.sources)?,
        refers: map_related(video.refers)?,
        simulcasts: map_related(video.simulcasts)?,
        mentions: video.mentions.map(map_mentions),
        comments: video.comments.map(map_comments),
        recommendations: map_related(video.recommendations)?,
        songs: video.songs.map(map_songs),
        channel,
    })
}

/// Map a batch of full video records
pub fn map_videos(videos: Vec<ApiVideoFull>) -> Result<Vec<VideoFull>> {
    videos.into_iter().map(map_video_full).collect()
}

/// Map a single full video through the batch mapper
pub fn map_single_video(video: ApiVideoFull) -> Result<VideoFull> {
    map_videos(vec![video])?
        .into_iter()
        .next()
        .ok_or(HolodexError::EmptyResponse)
}

pub fn map_videos_with_comments(
    videos: Vec<ApiVideoWithComments>,
) -> Result<Vec<VideoWithComments>> {
    videos
        .into_iter()
        .map(|hit| {
            Ok(VideoWithComments {
                video: map_video_with_channel(hit.video)?,
                comments: map_comments(hit.comments),
            })
        })
        .collect()
}

/// Map a paginated envelope using the batch mapper for its items
pub fn map_page<W, D, F>(page: ApiPaginated<W>, map_items: F) -> Result<Paginated<D>>
where
    F: FnOnce(Vec<W>) -> Result<Vec<D>>,
{
    let total = parse_count("total", Some(page.total))?.ok_or(HolodexError::MissingField("total"))?;
    Ok(Paginated {
        total,
        items: map_items(page.items)?,
    })
}

/// Map autocomplete entries, keeping only `filter` kinds when given
pub fn map_autocomplete(
    entries: Vec<ApiAutocompleteEntry>,
    filter: Option<AutocompleteKind>,
) -> Vec<AutocompleteEntry> {
    entries
        .into_iter()
        .map(|entry| AutocompleteEntry {
            kind: entry.kind,
            value: entry.value,
            text: entry.text,
        })
        .filter(|entry| filter.map_or(true, |kind| entry.is_kind(kind)))
        .collect()
}
