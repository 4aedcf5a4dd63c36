use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use console::Emoji;

use dirplay::http::DEFAULT_TIMEOUT;
use dirplay::{
    ExclusionRule, FeedFetcher, PatternExtractor, PlaylistResolver, ReadErrorPolicy,
    ReqwestClient, ResolverConfig, RssExtractor,
};

// Emoji with fallback for terminals without Unicode support
static NOTES: Emoji<'_, '_> = Emoji("🎶 ", "");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");

/// Build a playlist from a music library folder
#[derive(Parser, Debug)]
#[command(name = "dirplay")]
#[command(about = "Build a playlist from a music library folder")]
#[command(version)]
struct Args {
    /// Base path of the music library
    library: PathBuf,

    /// Folder to resolve, relative to the library
    #[arg(default_value = ".")]
    folder: PathBuf,

    /// Include all sub-folders
    #[arg(short, long)]
    recursive: bool,

    /// File endings to skip, replacing the default set
    #[arg(short, long, value_delimiter = ',')]
    exclude: Option<Vec<String>>,

    /// Seconds to wait for a podcast feed before giving up
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Parse podcast feeds as strict RSS instead of scanning for enclosures
    #[arg(long)]
    strict_feeds: bool,

    /// Abort on unreadable folders or list files instead of skipping them
    #[arg(long)]
    fail_on_read_error: bool,

    /// Print the playlist as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let client = ReqwestClient::with_timeout(Duration::from_secs(args.timeout))
        .context("Failed to create HTTP client")?;
    let fetcher = if args.strict_feeds {
        FeedFetcher::with_extractor(client, Box::new(RssExtractor))
    } else {
        FeedFetcher::with_extractor(client, Box::new(PatternExtractor::new()))
    };

    let exclusions = match args.exclude {
        Some(endings) => ExclusionRule::new(endings).context("Invalid --exclude value")?,
        None => ExclusionRule::default(),
    };
    let config = ResolverConfig {
        exclusions,
        read_errors: if args.fail_on_read_error {
            ReadErrorPolicy::Propagate
        } else {
            ReadErrorPolicy::SkipAndLog
        },
    };

    let resolver = PlaylistResolver::with_fetcher(&args.library, config, fetcher);
    let playlist = resolver
        .resolve(&args.folder, args.recursive)
        .context("Failed to resolve playlist")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&playlist)?);
        return Ok(());
    }

    println!(
        "\n{}{} {}",
        NOTES,
        "dirplay".bold().magenta(),
        format!("- {} entries", playlist.len()).dimmed()
    );
    println!(
        "{FOLDER}{}\n",
        playlist.folder().display().to_string().cyan()
    );
    println!("{playlist}");

    Ok(())
}
