mod classify;
mod exclusion;
mod listfile;
mod resolver;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

pub use classify::{FileKind, classify};
pub use exclusion::{DEFAULT_EXCLUDED_ENDINGS, ExclusionRule};
pub use listfile::{normalize_path, read_list_lines};
pub use resolver::PlaylistResolver;

/// Ordered list of URIs and library-relative file paths built from a folder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Playlist {
    folder: PathBuf,
    recursive: bool,
    entries: Vec<String>,
}

impl Playlist {
    /// An empty playlist for `folder`
    pub fn new(folder: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            folder: folder.into(),
            recursive,
            entries: Vec::new(),
        }
    }

    /// Absolute folder the playlist was resolved from
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    pub(crate) fn extend(&mut self, entries: Vec<String>) {
        self.entries.extend(entries);
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Playlist for '{}' (recursive={})",
            self.folder.display(),
            self.recursive
        )?;
        if self.entries.is_empty() {
            write!(f, "    -- empty --")?;
        }
        for (idx, entry) in self.entries.iter().enumerate() {
            writeln!(f, "{idx:>4}: {entry}")?;
        }
        Ok(())
    }
}

impl IntoIterator for Playlist {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_playlist_renders_marker() {
        let playlist = Playlist::new("/music/Traumfaenger", false);
        assert_eq!(
            playlist.to_string(),
            "Playlist for '/music/Traumfaenger' (recursive=false)\n    -- empty --"
        );
    }

    #[test]
    fn entries_are_numbered_from_zero() {
        let mut playlist = Playlist::new("/music", true);
        playlist.extend(vec!["a.mp3".to_string(), "http://radio/live".to_string()]);

        assert_eq!(
            playlist.to_string(),
            "Playlist for '/music' (recursive=true)\n   0: a.mp3\n   1: http://radio/live\n"
        );
    }

    #[test]
    fn playlist_iterates_in_insertion_order() {
        let mut playlist = Playlist::new("/music", false);
        playlist.extend(vec!["b".to_string(), "a".to_string(), "b".to_string()]);

        let collected: Vec<&String> = (&playlist).into_iter().collect();
        assert_eq!(collected, vec!["b", "a", "b"]);
        assert_eq!(playlist.len(), 3);
        assert_eq!(playlist.into_entries(), vec!["b", "a", "b"]);
    }

    #[test]
    fn playlist_serializes_to_json() {
        let mut playlist = Playlist::new("/music", false);
        playlist.extend(vec!["a.mp3".to_string()]);

        let json = serde_json::to_value(&playlist).unwrap();
        assert_eq!(json["entries"][0], "a.mp3");
        assert_eq!(json["recursive"], false);
    }
}
