mod extract;
mod fetch;

pub use extract::{EnclosureExtractor, PatternExtractor, RssExtractor};
pub use fetch::{FeedFetcher, is_feed_reference, is_url};
