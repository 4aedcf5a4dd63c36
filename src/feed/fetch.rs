// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use url::Url;

use crate::error::FeedError;
use crate::http::HttpClient;

use super::extract::{EnclosureExtractor, PatternExtractor};

/// Expands podcast feed URLs into the media URLs they enclose
pub struct FeedFetcher<C: HttpClient> {
    client: C,
    extractor: Box<dyn EnclosureExtractor>,
}

impl<C: HttpClient> FeedFetcher<C> {
    /// Create a fetcher using the lenient pattern extractor
    pub fn new(client: C) -> Self {
        Self::with_extractor(client, Box::new(PatternExtractor::new()))
    }

    /// Create a fetcher with a custom enclosure extractor
    pub fn with_extractor(client: C, extractor: Box<dyn EnclosureExtractor>) -> Self {
        Self { client, extractor }
    }

    /// Fetch `url` and return every enclosure URL found in the body
    ///
    /// Failures never reach the caller: they are logged and the feed simply
    /// contributes no entries.
    pub fn fetch_enclosures(&self, url: &str) -> Vec<String> {
        match self.try_fetch_enclosures(url) {
            Ok(enclosures) => {
                if enclosures.is_empty() {
                    log::error!("Zero file entries in parsed content from '{url}'");
                }
                enclosures
            }
            Err(e) => {
                log::error!("{e}");
                Vec::new()
            }
        }
    }

    fn try_fetch_enclosures(&self, url: &str) -> Result<Vec<String>, FeedError> {
        Url::parse(url)?;

        let response = self
            .client
            .get_text(url)
            .map_err(|e| FeedError::FetchFailed {
                url: url.to_string(),
                source: e,
            })?;

        // Some servers answer with an error status but still deliver the feed.
        if response.status != 200 {
            log::error!("Got error code {} fetching from '{url}'", response.status);
        }

        self.extractor.extract(&response.body)
    }
}

/// Determine if a folder playlist line is a verbatim stream URI
pub fn is_url(line: &str) -> bool {
    line.starts_with("http://") || line.starts_with("https://") || line.starts_with("ftp://")
}

/// Determine if a folder playlist line points at a podcast feed
pub fn is_feed_reference(line: &str) -> bool {
    line.ends_with(".xml") || line.ends_with(".podcast")
}
