//! File discovery module for finding video files to probe.
//!
//! Walks the whole tree under the root (every depth) and yields regular files
//! whose extension is in the accepted set, compared case-insensitively.
//! Entries are yielded lazily in the order the filesystem reports them, so
//! the caller can probe each file before the walk advances.

use crate::utils::has_accepted_extension;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazily yields video files under `root`.
///
/// Directories and non-matching files are skipped silently. Entries that
/// cannot be read (permission errors, vanished files) are logged and skipped.
/// `extensions` must be normalized (lowercase, leading dot).
///
/// # Examples
///
/// ```rust,no_run
/// use vidscan_core::discovery::video_files;
/// use std::path::Path;
///
/// let exts = vec![".mp4".to_string()];
/// for file in video_files(Path::new("/path/to/videos"), &exts) {
///     println!("{}", file.display());
/// }
/// ```
pub fn video_files<'a>(
    root: &'a Path,
    extensions: &'a [String],
) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("Skipping unreadable entry: {err}");
                None
            }
        })
        .map(walkdir::DirEntry::into_path)
        .filter(move |path| path.is_file() && has_accepted_extension(path, extensions))
}

/// Collects every video file under `root` into a vector.
///
/// Convenience wrapper over [`video_files`] for callers that want the full
/// list up front; the scanner itself iterates lazily.
pub fn find_video_files(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let files: Vec<PathBuf> = video_files(root, extensions).collect();
    log::debug!("Found {} video files under {}", files.len(), root.display());
    files
}
