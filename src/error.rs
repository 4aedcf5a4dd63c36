use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when fetching or reading a podcast feed
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Failed to fetch feed from {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid feed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse RSS feed: {0}")]
    ParseFailed(#[from] rss::Error),
}

/// Errors that can occur while resolving a folder into a playlist
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Folder does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read list file {path}: {source}")]
    ListFileReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised when building resolver configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid exclusion pattern: {0}")]
    InvalidExclusionPattern(#[from] regex::Error),
}
