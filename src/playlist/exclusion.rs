// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use regex::{Regex, RegexBuilder};

use crate::error::ConfigError;

/// File endings skipped by default: archives, sources, databases, images,
/// config files and editor backups
pub const DEFAULT_EXCLUDED_ENDINGS: &[&str] = &[
    "zip", "py", "db", "png", "jpg", "conf", "yaml", "json", ".*~", ".*#",
];

/// Compiled set of file endings that never make it into a playlist
///
/// Each ending is a regex fragment matched against whatever follows the last
/// dot of a filename, case-insensitively. Plain extensions like `zip` match
/// literally, while `.*~` catches backup files such as `song.mp3~`.
#[derive(Debug, Clone)]
pub struct ExclusionRule {
    endings: Vec<String>,
    pattern: Option<Regex>,
}

impl ExclusionRule {
    /// Build a rule from a list of endings
    pub fn new<I, S>(endings: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let endings: Vec<String> = endings.into_iter().map(Into::into).collect();

        let pattern = if endings.is_empty() {
            None
        } else {
            let alternatives = endings
                .iter()
                .map(|ending| format!("({ending})"))
                .collect::<Vec<_>>()
                .join("|");
            let source = format!(r"^.*\.(?:{alternatives})$");
            log::debug!("Exclusion regex: '{source}'");

            Some(RegexBuilder::new(&source).case_insensitive(true).build()?)
        };

        Ok(Self { endings, pattern })
    }

    /// The endings this rule was built from
    pub fn endings(&self) -> &[String] {
        &self.endings
    }

    /// Whether `filename` carries one of the excluded endings
    pub fn is_excluded(&self, filename: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(filename))
    }
}

impl Default for ExclusionRule {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_ENDINGS.iter().copied())
            .expect("default exclusion endings compile")
    }
}
