//! Output formatting

use crate::cli::args::VerbosityLevel;
use crate::core::{
    AutocompleteEntry, Channel, Listing, Song, Video, VideoFull, VideoStatus, VideoWithChannel,
    VideoWithComments,
};
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::time::Duration;

/// One line of human readable output
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Video {
    fn render(&self) -> String {
        let when = self
            .start_time()
            .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "-".to_string());

        let mut line = format!("{} {} {}", status_badge(self.status), self.title.bold(), when.dimmed());
        if self.duration > 0 {
            line.push_str(&format!(" ({})", format_duration(Duration::from_secs(self.duration))));
        }
        if let Some(viewers) = self.live_viewers.filter(|_| self.is_live()) {
            line.push_str(&format!(" {} watching", format_count(viewers)));
        }
        line.push_str(&format!(" {}", self.id.dimmed()));
        line
    }
}

impl Render for VideoWithChannel {
    fn render(&self) -> String {
        format!("{} {}", self.video.render(), self.channel.display_name().cyan())
    }
}

impl Render for VideoFull {
    fn render(&self) -> String {
        match &self.channel {
            Some(channel) => format!("{} {}", self.video.render(), channel.display_name().cyan()),
            None => self.video.render(),
        }
    }
}

impl Render for Song {
    fn render(&self) -> String {
        let at = format_duration(Duration::from_secs(self.start));
        match &self.original_artist {
            Some(artist) => format!("{} {} / {}", at.dimmed(), self.name, artist),
            None => format!("{} {}", at.dimmed(), self.name),
        }
    }
}

impl Render for VideoWithComments {
    fn render(&self) -> String {
        let mut out = self.video.render();
        for comment in &self.comments {
            out.push_str(&format!("\n    {} {}", ">".dimmed(), comment.message));
        }
        out
    }
}

impl Render for Channel {
    fn render(&self) -> String {
        let mut line = format!("{}", self.display_name().bold());
        if let Some(org) = &self.org {
            line.push_str(&format!(" [{}]", org));
        }
        if let Some(subscribers) = self.subscriber_count {
            line.push_str(&format!(" {} subscribers", format_count(subscribers)));
        }
        if self.inactive {
            line.push_str(&format!(" {}", "inactive".yellow()));
        }
        line.push_str(&format!(" {}", self.id().dimmed()));
        line
    }
}

impl Render for AutocompleteEntry {
    fn render(&self) -> String {
        match &self.text {
            Some(text) => format!("{:<8} {} {}", self.kind.cyan(), text, self.value.dimmed()),
            None => format!("{:<8} {}", self.kind.cyan(), self.value),
        }
    }
}

fn status_badge(status: VideoStatus) -> ColoredString {
    let label = format!("{:<8}", status.as_str());
    match status {
        VideoStatus::Live => label.red().bold(),
        VideoStatus::Upcoming => label.yellow(),
        VideoStatus::New => label.green(),
        VideoStatus::Past => label.normal(),
        VideoStatus::Missing => label.dimmed(),
    }
}

/// Output formatter for holodex
pub struct OutputFormatter {
    verbosity: VerbosityLevel,
    json: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(verbosity: VerbosityLevel, json: bool) -> Self {
        Self { verbosity, json }
    }

    /// Print one record
    pub fn print_item<T: Render + Serialize>(&self, item: &T) -> Result<(), serde_json::Error> {
        if self.json {
            return print_json(item);
        }
        println!("{}", item.render());
        Ok(())
    }

    /// Print a sequence of records
    pub fn print_items<T: Render + Serialize>(&self, items: &[T]) -> Result<(), serde_json::Error> {
        if self.json {
            return print_json(&items);
        }
        for item in items {
            println!("{}", item.render());
        }
        if items.is_empty() {
            self.info("No results");
        }
        Ok(())
    }

    /// Print a listing, with its total when paginated
    pub fn print_listing<T: Render + Serialize>(
        &self,
        listing: &Listing<T>,
    ) -> Result<(), serde_json::Error> {
        if self.json {
            return print_json(listing);
        }
        self.print_items(listing.items())?;
        if let Some(total) = listing.total() {
            self.info(&format!("Showing {} of {}", listing.items().len(), total));
        }
        Ok(())
    }

    /// Print a video with its related content
    pub fn print_video_detail(&self, video: &VideoFull) -> Result<(), serde_json::Error> {
        if self.json {
            return print_json(video);
        }

        println!("{}", video.render());
        if let Some(topic) = &video.video.topic_id {
            println!("  topic: {}", topic);
        }
        match video.songs.as_ref().filter(|s| !s.is_empty()) {
            Some(songs) => {
                println!("  {}:", "songs".bold());
                for song in songs {
                    println!("    {}", song.render());
                }
            }
            None => {
                if let Some(count) = video.video.song_count.filter(|&n| n > 0) {
                    println!("  songs: {}", count);
                }
            }
        }
        if self.verbosity == VerbosityLevel::Verbose && !video.video.description.is_empty() {
            println!();
            println!("{}", video.video.description);
            println!();
        }

        let related = [
            ("clips", &video.clips),
            ("sources", &video.sources),
            ("refers", &video.refers),
            ("simulcasts", &video.simulcasts),
            ("recommendations", &video.recommendations),
        ];
        for (label, videos) in related {
            let Some(videos) = videos.as_ref().filter(|v| !v.is_empty()) else {
                continue;
            };
            println!("  {}:", label.bold());
            for related in videos {
                println!("    {}", related.render());
            }
        }

        if let Some(mentions) = video.mentions.as_ref().filter(|m| !m.is_empty()) {
            let names: Vec<&str> = mentions.iter().map(|m| m.channel.display_name()).collect();
            println!("  {}: {}", "mentions".bold(), names.join(", "));
        }
        if let Some(comments) = video.comments.as_ref().filter(|c| !c.is_empty()) {
            println!("  {}:", "comments".bold());
            for comment in comments {
                println!("    {} {}", ">".dimmed(), comment.message);
            }
        }
        Ok(())
    }

    /// Print info message
    pub fn info(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            eprintln!("{}", message.dimmed());
        }
    }

    /// Print warning message
    pub fn warning(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        }
    }

    /// Print error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }

    /// Print debug message
    pub fn debug(&self, message: &str) {
        if self.verbosity == VerbosityLevel::Verbose {
            eprintln!("{} {}", "debug:".blue(), message);
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format large counts compactly, e.g. 1.2M
fn format_count(count: u64) -> String {
    const UNITS: &[(u64, &str)] = &[(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    for &(threshold, unit) in UNITS {
        if count >= threshold {
            return format!("{:.1}{}", count as f64 / threshold as f64, unit);
        }
    }
    count.to_string()
}

/// Format duration as human-readable string
fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    if total_seconds < 60 {
        format!("{}s", total_seconds)
    } else if total_seconds < 3600 {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        if seconds == 0 {
            format!("{}m", minutes)
        } else {
            format!("{}m {}s", minutes, seconds)
        }
    } else {
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        if minutes == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, minutes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChannelSummary, ChannelType, Comment, Paginated, VideoType};

    fn video(status: VideoStatus) -> Video {
        Video {
            id: "abc123".to_string(),
            title: "Morning stream".to_string(),
            video_type: VideoType::Stream,
            topic_id: Some("chatting".to_string()),
            published_at: None,
            available_at: None,
            duration: 3660,
            status,
            start_scheduled: None,
            start_actual: None,
            end_actual: None,
            live_viewers: Some(12_345),
            description: String::new(),
            song_count: None,
            channel_id: "UC1".to_string(),
        }
    }

    fn summary() -> ChannelSummary {
        ChannelSummary {
            id: "UC1".to_string(),
            name: "Channel".to_string(),
            english_name: Some("English Name".to_string()),
            channel_type: ChannelType::Vtuber,
            photo: None,
        }
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1.0K");
        assert_eq!(format_count(1_250_000), "1.2M");
        assert_eq!(format_count(3_000_000_000), "3.0B");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30s");
        assert_eq!(format_duration(Duration::from_secs(60)), "1m");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h");
        assert_eq!(format_duration(Duration::from_secs(3660)), "1h 1m");
    }

    #[test]
    fn test_render_video() {
        plain();
        let line = video(VideoStatus::Live).render();
        assert!(line.contains("live"));
        assert!(line.contains("Morning stream"));
        assert!(line.contains("(1h 1m)"));
        assert!(line.contains("12.3K watching"));
        assert!(line.ends_with("abc123"));

        let line = video(VideoStatus::Past).render();
        assert!(!line.contains("watching"));
    }

    #[test]
    fn test_render_video_with_channel_uses_english_name() {
        plain();
        let item = VideoWithChannel {
            video: video(VideoStatus::Upcoming),
            channel: summary(),
        };
        assert!(item.render().ends_with("English Name"));
    }

    #[test]
    fn test_render_comments_indented() {
        plain();
        let item = VideoWithComments {
            video: VideoWithChannel {
                video: video(VideoStatus::Past),
                channel: summary(),
            },
            comments: vec![Comment {
                comment_key: "k".to_string(),
                video_id: "abc123".to_string(),
                message: "12:34 song".to_string(),
            }],
        };
        let rendered = item.render();
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.lines().nth(1).unwrap().contains("12:34 song"));
    }

    #[test]
    fn test_render_song() {
        plain();
        let song = Song {
            name: "Stellar Stellar".to_string(),
            original_artist: Some("Suisei".to_string()),
            start: 90,
            end: 330,
            itunes_id: None,
            art: None,
        };
        assert_eq!(song.render(), "1m 30s Stellar Stellar / Suisei");
    }

    #[test]
    fn test_render_autocomplete() {
        plain();
        let entry = AutocompleteEntry {
            kind: "topic".to_string(),
            value: "singing".to_string(),
            text: None,
        };
        assert!(entry.render().contains("singing"));
    }

    #[test]
    fn test_print_does_not_fail() {
        let formatter = OutputFormatter::new(VerbosityLevel::Quiet, false);
        let listing = Listing::Paginated(Paginated {
            total: 10,
            items: vec![VideoWithChannel {
                video: video(VideoStatus::Live),
                channel: summary(),
            }],
        });
        assert!(formatter.print_listing(&listing).is_ok());

        let formatter = OutputFormatter::new(VerbosityLevel::Normal, true);
        assert!(formatter.print_listing(&listing).is_ok());
        assert!(formatter.print_items::<VideoWithChannel>(&[]).is_ok());
    }

    #[test]
    fn test_verbosity_levels() {
        let formatter = OutputFormatter::new(VerbosityLevel::Quiet, false);
        assert_eq!(formatter.verbosity, VerbosityLevel::Quiet);
        // These should not print anything in quiet mode
        formatter.info("test");
        formatter.warning("test");
        formatter.debug("test");

        // Error should always print
        formatter.error("test");
    }
}
