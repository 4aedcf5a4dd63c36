use std::path::{Component, Path, PathBuf};

/// Read a list file and return its meaningful lines
///
/// Lines are trimmed; blank lines and `#` comments are dropped. Invalid
/// UTF-8 is replaced rather than rejected.
pub fn read_list_lines(path: &Path) -> std::io::Result<Vec<String>> {
    let bytes = std::fs::read(path)?;
    Ok(list_lines(&String::from_utf8_lossy(&bytes)))
}

fn list_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component. The filesystem is never consulted.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let content = "# header\n\nhttp://a/stream\n   \n  http://b/stream  \n#http://c\n";
        let lines = list_lines(content);
        assert_eq!(lines, vec!["http://a/stream", "http://b/stream"]);
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let lines = list_lines("one.mp3\r\ntwo.mp3\r\n");
        assert_eq!(lines, vec!["one.mp3", "two.mp3"]);
    }

    #[test]
    fn read_list_lines_reads_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("radio-livestream.txt");
        std::fs::write(&path, "#EXTM3U\nhttp://radio/1\n").unwrap();

        assert_eq!(read_list_lines(&path).unwrap(), vec!["http://radio/1"]);
    }

    #[test]
    fn read_list_lines_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        assert!(read_list_lines(&dir.path().join("missing.m3u")).is_err());
    }

    #[test]
    fn normalize_folds_dot_components() {
        assert_eq!(
            normalize_path(Path::new("a/./b/../c.mp3")),
            PathBuf::from("a/c.mp3")
        );
        assert_eq!(normalize_path(Path::new("./c.mp3")), PathBuf::from("c.mp3"));
        assert_eq!(normalize_path(Path::new("/music/../x")), PathBuf::from("/x"));
    }

    #[test]
    fn normalize_keeps_leading_parent_components() {
        assert_eq!(
            normalize_path(Path::new("../up/song.mp3")),
            PathBuf::from("../up/song.mp3")
        );
        assert_eq!(normalize_path(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[test]
    fn normalize_never_returns_empty() {
        assert_eq!(normalize_path(Path::new("")), PathBuf::from("."));
        assert_eq!(normalize_path(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    fn normalize_does_not_climb_above_root() {
        assert_eq!(normalize_path(Path::new("/../a")), PathBuf::from("/a"));
    }
}
