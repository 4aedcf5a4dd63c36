// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use regex::Regex;

use crate::error::FeedError;

/// Pulls media enclosure URLs out of a feed body
pub trait EnclosureExtractor {
    /// Return every enclosure URL in `body`, in document order
    fn extract(&self, body: &str) -> Result<Vec<String>, FeedError>;
}

/// Lenient extractor that scans the body for `enclosure ... url="..."`
///
/// No XML parsing happens, so truncated or slightly malformed feeds still
/// produce whatever enclosures they contain.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    pattern: Regex,
}

impl PatternExtractor {
    pub fn new() -> Self {
        // Case-sensitive: feeds emit lowercase tag and attribute names.
        // Quoted values are skipped whole, they may contain a bare `>`.
        let pattern = Regex::new(r#"enclosure\b(?:[^>"]|"[^"]*")*?\burl="([^"]*)""#)
            .expect("enclosure pattern is valid");
        Self { pattern }
    }
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EnclosureExtractor for PatternExtractor {
    fn extract(&self, body: &str) -> Result<Vec<String>, FeedError> {
        Ok(self
            .pattern
            .captures_iter(body)
            .map(|caps| caps[1].to_string())
            .collect())
    }
}

/// Strict extractor backed by a full RSS parser
#[derive(Debug, Clone, Copy, Default)]
pub struct RssExtractor;

impl EnclosureExtractor for RssExtractor {
    fn extract(&self, body: &str) -> Result<Vec<String>, FeedError> {
        let channel = rss::Channel::read_from(body.as_bytes())?;

        Ok(channel
            .items()
            .iter()
            .filter_map(|item| item.enclosure())
            .map(|enclosure| enclosure.url().to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <title>Test Podcast</title>
    <description>A test podcast</description>
    <item>
      <title>Episode 1</title>
      <enclosure url="https://example.com/ep1.mp3" length="19204101" type="audio/mpeg"/>
    </item>
    <item>
      <title>Episode 2</title>
      <enclosure url="https://example.com/ep2.mp3" type="audio/mpeg"/>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn pattern_finds_enclosures_in_body_order() {
        let urls = PatternExtractor::new().extract(SAMPLE_FEED).unwrap();
        assert_eq!(
            urls,
            vec!["https://example.com/ep1.mp3", "https://example.com/ep2.mp3"]
        );
    }

    #[test]
    fn pattern_handles_enclosures_on_one_line() {
        let body = r#"<enclosure url="a.mp3"/><enclosure type="audio/mpeg" url="b.mp3"/>"#;
        let urls = PatternExtractor::new().extract(body).unwrap();
        assert_eq!(urls, vec!["a.mp3", "b.mp3"]);
    }

    #[test]
    fn pattern_skips_angle_brackets_inside_attribute_values() {
        let body = "<enclosure title=\"Part 1 > 2\" url=\"https://example.com/1.mp3\"/>\n\
                    <enclosure url=\"https://example.com/2.mp3\"/>";
        let urls = PatternExtractor::new().extract(body).unwrap();
        assert_eq!(
            urls,
            vec!["https://example.com/1.mp3", "https://example.com/2.mp3"]
        );
    }

    #[test]
    fn pattern_does_not_leak_into_the_next_element() {
        let body = r#"<enclosure type="audio/mpeg"/><link url="https://example.com/page"/>"#;
        assert!(PatternExtractor::new().extract(body).unwrap().is_empty());
    }

    #[test]
    fn pattern_is_case_sensitive() {
        let body = r#"<ENCLOSURE URL="https://example.com/loud.mp3"/>"#;
        assert!(PatternExtractor::new().extract(body).unwrap().is_empty());
    }

    #[test]
    fn pattern_ignores_url_attributes_outside_enclosures() {
        let body =
            r#"<itunes:image href="x.jpg"/><media:content url="https://example.com/v.mp4"/>"#;
        assert!(PatternExtractor::new().extract(body).unwrap().is_empty());
    }

    #[test]
    fn pattern_tolerates_broken_xml() {
        let body = r#"<rss><item><enclosure url="https://example.com/ep.mp3" "#;
        let urls = PatternExtractor::new().extract(body).unwrap();
        assert_eq!(urls, vec!["https://example.com/ep.mp3"]);
    }

    #[test]
    fn rss_extractor_reads_items() {
        let urls = RssExtractor.extract(SAMPLE_FEED).unwrap();
        assert_eq!(
            urls,
            vec!["https://example.com/ep1.mp3", "https://example.com/ep2.mp3"]
        );
    }

    #[test]
    fn rss_extractor_rejects_non_rss() {
        assert!(RssExtractor.extract("<html><body>nope</body></html>").is_err());
    }
}
