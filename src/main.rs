//! Main entry point for the holodex CLI

use anyhow::Context;
use clap::Parser;
use holodex::cli::args::is_inverted_window;
use holodex::cli::{Args, Command, OutputFormatter, VerbosityLevel};
use holodex::HolodexClient;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    init_logging(args.verbosity_level());
    debug!("Starting holodex with args: {:?}", args.command);

    let formatter = OutputFormatter::new(args.verbosity_level(), args.json);

    let config = args.client_config()?;
    let client = HolodexClient::with_config(config).context("failed to create Holodex client")?;

    let start_time = Instant::now();
    if let Err(e) = run(&client, &args.command, &formatter).await {
        formatter.error(&format!("{:#}", e));
        std::process::exit(1);
    }
    formatter.debug(&format!("Request completed in {:?}", start_time.elapsed()));

    Ok(())
}

/// Dispatch one subcommand and print its result
async fn run(
    client: &HolodexClient,
    command: &Command,
    formatter: &OutputFormatter,
) -> anyhow::Result<()> {
    match command {
        Command::Live(filter) => {
            let listing = client.videos().live(&filter.to_filter()).await?;
            formatter.print_listing(&listing)?;
        }
        Command::Videos { filter, from, to } => {
            if is_inverted_window(*from, *to) {
                formatter.warning("--from is after --to, no video can match");
            }
            let options = Command::videos_options(filter, *from, *to);
            let listing = client.videos().list(&options).await?;
            formatter.print_listing(&listing)?;
        }
        Command::ChannelVideos {
            channel_id,
            kind,
            include,
            lang,
            limit,
            offset,
            paginated,
        } => {
            let options =
                Command::channel_videos_options(include, lang, *limit, *offset, *paginated);
            let listing = client
                .videos()
                .channel_videos(channel_id, (*kind).into(), &options)
                .await
                .with_context(|| format!("failed to list videos of channel {}", channel_id))?;
            formatter.print_listing(&listing)?;
        }
        Command::Video {
            video_id,
            comments,
            lang,
        } => {
            let options = Command::get_video_options(*comments, lang);
            let video = client
                .videos()
                .get(video_id, &options)
                .await
                .with_context(|| format!("failed to get video {}", video_id))?;
            formatter.print_video_detail(&video)?;
        }
        Command::UsersLive { channel_ids } => {
            let videos = client.videos().simple_live(channel_ids).await?;
            formatter.print_items(&videos)?;
        }
        Command::Channels {
            org,
            lang,
            limit,
            offset,
            order,
            sort,
            channel_type,
        } => {
            let options = Command::list_channels_options(
                org,
                lang,
                *limit,
                *offset,
                *order,
                sort,
                *channel_type,
            );
            let channels = client.channels().list(&options).await?;
            formatter.print_items(&channels)?;
        }
        Command::Channel { channel_id } => {
            let channel = client
                .channels()
                .get(channel_id)
                .await
                .with_context(|| format!("failed to get channel {}", channel_id))?;
            formatter.print_item(&channel)?;
        }
        Command::Search { conditions, scope } => {
            let options = Command::video_search_options(conditions, scope);
            let listing = client.search().videos(&options).await?;
            formatter.print_listing(&listing)?;
        }
        Command::Comments { comment, scope } => {
            let options = Command::comment_search_options(comment, scope);
            let listing = client.search().comments(&options).await?;
            formatter.print_listing(&listing)?;
        }
        Command::Autocomplete { query, kind } => {
            let entries = client
                .search()
                .autocomplete(query, kind.map(Into::into))
                .await?;
            formatter.print_items(&entries)?;
        }
    }

    Ok(())
}

/// Initialize logging system
fn init_logging(verbosity: VerbosityLevel) {
    let default_level = match verbosity {
        VerbosityLevel::Quiet => "error",
        VerbosityLevel::Normal => "warn",
        VerbosityLevel::Verbose => "holodex=debug,info",
    };

    // RUST_LOG wins over the verbosity flags
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
