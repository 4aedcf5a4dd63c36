pub mod config;
pub mod error;
pub mod feed;
pub mod http;
pub mod playlist;

// Re-export main types for convenience
pub use config::{ReadErrorPolicy, ResolverConfig};
pub use error::{ConfigError, FeedError, ResolveError};
pub use feed::{EnclosureExtractor, FeedFetcher, PatternExtractor, RssExtractor};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use playlist::{ExclusionRule, Playlist, PlaylistResolver};
