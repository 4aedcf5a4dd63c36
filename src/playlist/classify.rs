/// How a directory entry contributes to its folder's playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Lines are stream URIs, added verbatim
    Livestream,
    /// Lines are feed URLs, expanded into their enclosures
    PodcastList,
    /// Any other text file; contributes nothing
    IgnoredText,
    /// Replaces the folder's playlist with its own content
    FolderPlaylist,
    /// Added as a path relative to the library base
    Media,
}

/// Suffix classifiers, most specific first. The first match wins.
const CLASSIFIERS: &[(&str, FileKind)] = &[
    ("livestream.txt", FileKind::Livestream),
    ("podcast.txt", FileKind::PodcastList),
    (".txt", FileKind::IgnoredText),
    (".m3u", FileKind::FolderPlaylist),
];

/// Classify a filename by its (case-insensitive) suffix
pub fn classify(filename: &str) -> FileKind {
    let name = filename.to_lowercase();

    CLASSIFIERS
        .iter()
        .find(|(suffix, _)| name.ends_with(suffix))
        .map_or(FileKind::Media, |&(_, kind)| kind)
}
