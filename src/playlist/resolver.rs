// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{ReadErrorPolicy, ResolverConfig};
use crate::error::{ConfigError, ResolveError};
use crate::feed::{FeedFetcher, is_feed_reference, is_url};
use crate::http::{HttpClient, ReqwestClient};

use super::Playlist;
use super::classify::{FileKind, classify};
use super::exclusion::ExclusionRule;
use super::listfile::{normalize_path, read_list_lines};

/// A file that survived the hidden/exclusion filters of a folder listing
#[derive(Debug)]
struct DirectoryEntry {
    name: String,
    path: PathBuf,
}

/// Builds playlists from folders below a music library base path
///
/// Playlist entries for files are relative to the base path, so the result
/// can be handed to a player that shares the same library root.
pub struct PlaylistResolver<C: HttpClient = ReqwestClient> {
    base_path: PathBuf,
    config: ResolverConfig,
    fetcher: FeedFetcher<C>,
}

impl PlaylistResolver<ReqwestClient> {
    /// Create a resolver with default configuration and a reqwest-backed fetcher
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self::with_fetcher(
            base_path,
            ResolverConfig::default(),
            FeedFetcher::new(ReqwestClient::new()),
        )
    }
}

impl<C: HttpClient> PlaylistResolver<C> {
    /// Create a resolver with explicit configuration and feed fetcher
    pub fn with_fetcher(
        base_path: impl AsRef<Path>,
        config: ResolverConfig,
        fetcher: FeedFetcher<C>,
    ) -> Self {
        let base_path = base_path.as_ref();
        let absolute =
            std::path::absolute(base_path).unwrap_or_else(|_| base_path.to_path_buf());

        Self {
            base_path: normalize_path(&absolute),
            config,
            fetcher,
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Replace the excluded file endings for all following resolutions
    pub fn set_exclusion_endings<I, S>(&mut self, endings: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.exclusions = ExclusionRule::new(endings)?;
        Ok(())
    }

    /// Resolve `folder` (relative to the base path) into a playlist
    ///
    /// A missing folder or a path that is not a directory is logged and
    /// yields an empty playlist. Errors further down only surface when the
    /// configuration asks for [`ReadErrorPolicy::Propagate`].
    pub fn resolve(
        &self,
        folder: impl AsRef<Path>,
        recursive: bool,
    ) -> Result<Playlist, ResolveError> {
        let folder = normalize_path(&self.base_path.join(folder));
        let mut playlist = Playlist::new(folder.clone(), recursive);

        match fs::metadata(&folder) {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => {
                log::error!("{}", ResolveError::NotADirectory(folder));
                return Ok(playlist);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::error!("{}", ResolveError::PathNotFound(folder));
                return Ok(playlist);
            }
            Err(e) => {
                log::error!(
                    "{}",
                    ResolveError::ReadDirectoryFailed {
                        path: folder,
                        source: e,
                    }
                );
                return Ok(playlist);
            }
        }

        // An unlistable root is a path error, whatever the read error policy.
        if let Err(e) = fs::read_dir(&folder) {
            log::error!(
                "{}",
                ResolveError::ReadDirectoryFailed {
                    path: folder,
                    source: e,
                }
            );
            return Ok(playlist);
        }

        let entries = if recursive {
            self.resolve_tree(&folder)?
        } else {
            self.resolve_folder(&folder)?
        };
        playlist.extend(entries);

        Ok(playlist)
    }

    /// Build the playlist contribution of a single folder
    ///
    /// Files are handled in case-insensitive name order. The first `.m3u`
    /// file discards everything collected so far, supplies the folder's
    /// entries on its own and ends processing of the folder.
    pub fn resolve_folder(&self, path: &Path) -> Result<Vec<String>, ResolveError> {
        let entries = self.tolerate(self.list_directory(path))?;
        let mut folder_playlist = Vec::new();

        for entry in entries {
            match classify(&entry.name) {
                FileKind::Livestream => {
                    log::debug!("Decode livestream: '{}'", entry.path.display());
                    folder_playlist.extend(self.tolerate(read_list_file(&entry.path))?);
                }
                FileKind::PodcastList => {
                    log::debug!("Decode podcast: '{}'", entry.path.display());
                    for feed_url in self.tolerate(read_list_file(&entry.path))? {
                        folder_playlist.extend(self.fetcher.fetch_enclosures(&feed_url));
                    }
                }
                FileKind::IgnoredText => {}
                FileKind::FolderPlaylist => {
                    log::debug!(
                        "Decode M3U '{}'. Replacing current folder playlist",
                        entry.path.display()
                    );
                    folder_playlist.clear();
                    for line in self.tolerate(read_list_file(&entry.path))? {
                        if is_feed_reference(&line) {
                            folder_playlist.extend(self.fetcher.fetch_enclosures(&line));
                        } else if is_url(&line) {
                            folder_playlist.push(line);
                        } else {
                            folder_playlist.push(self.library_path(path, &line));
                        }
                    }
                    break;
                }
                FileKind::Media => {
                    folder_playlist.push(self.library_path(path, &entry.name));
                }
            }
        }

        Ok(folder_playlist)
    }

    /// Concatenate the folder playlists of every directory below `root`
    ///
    /// Directories are visited in case-insensitive order of their full path,
    /// following symbolic links. `root` itself is included.
    fn resolve_tree(&self, root: &Path) -> Result<Vec<String>, ResolveError> {
        let mut directories = Vec::new();

        for entry in WalkDir::new(root).follow_links(true) {
            match entry {
                Ok(entry) if entry.file_type().is_dir() => {
                    if entry.path().to_str().is_some() {
                        directories.push(entry.into_path());
                    } else {
                        log::warn!(
                            "Skipping folder with non UTF-8 name: {}",
                            entry.path().display()
                        );
                    }
                }
                Ok(_) => {}
                Err(e) => log::warn!("Skipping path below '{}': {e}", root.display()),
            }
        }

        directories.sort_by_cached_key(|dir| sort_key(&dir.to_string_lossy()));

        let mut playlist = Vec::new();
        for directory in &directories {
            playlist.extend(self.resolve_folder(directory)?);
        }
        Ok(playlist)
    }

    /// List the regular files of `path` that may contribute to a playlist,
    /// sorted case-insensitively by name
    fn list_directory(&self, path: &Path) -> Result<Vec<DirectoryEntry>, ResolveError> {
        let read_failed = |source| ResolveError::ReadDirectoryFailed {
            path: path.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(read_failed)? {
            let entry = entry.map_err(read_failed)?;
            let Ok(name) = entry.file_name().into_string() else {
                log::warn!("Skipping file with non UTF-8 name: {}", entry.path().display());
                continue;
            };

            if name.starts_with('.') || self.config.exclusions.is_excluded(&name) {
                continue;
            }

            let path = entry.path();
            if path.is_file() {
                entries.push(DirectoryEntry { name, path });
            }
        }

        entries.sort_by(|a, b| {
            sort_key(&a.name)
                .cmp(&sort_key(&b.name))
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(entries)
    }

    /// Playlist entry for `name` inside `folder`, relative to the base path
    fn library_path(&self, folder: &Path, name: &str) -> String {
        let relative = folder.strip_prefix(&self.base_path).unwrap_or(folder);
        normalize_path(&relative.join(name))
            .to_string_lossy()
            .into_owned()
    }

    /// Apply the read error policy to a fallible folder step
    fn tolerate<T: Default>(&self, result: Result<T, ResolveError>) -> Result<T, ResolveError> {
        match result {
            Err(e) if self.config.read_errors == ReadErrorPolicy::SkipAndLog => {
                log::warn!("{e}");
                Ok(T::default())
            }
            other => other,
        }
    }
}

/// Caseless ordering key, so `Straße` and `STRASSE` sort alike
fn sort_key(name: &str) -> String {
    caseless::default_case_fold_str(name)
}

fn read_list_file(path: &Path) -> Result<Vec<String>, ResolveError> {
    read_list_lines(path).map_err(|source| ResolveError::ListFileReadFailed {
        path: path.to_path_buf(),
        source,
    })
}
