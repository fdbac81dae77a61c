//! Recursive directory walking
//!
//! Thin layer over `ignore::WalkBuilder`. The root is always visited; every
//! other directory is descended into only when `keep_dir` accepts it, which
//! is how test discovery prunes non-package trees.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

/// Options shared by all recursive walks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Respect `.gitignore` / `.ignore` files and skip hidden entries.
    pub honor_ignore_files: bool,
}

impl WalkOptions {
    pub fn with_ignore_files(mut self, honor: bool) -> Self {
        self.honor_ignore_files = honor;
        self
    }
}

/// Collect every file under `root` whose name satisfies `keep_file`,
/// descending only into directories accepted by `keep_dir`.
///
/// Entries that cannot be read are skipped. Results are absolute when
/// `root` is absolute, sorted by path.
pub fn walk_files<D, F>(root: &Path, options: WalkOptions, keep_dir: D, keep_file: F) -> Vec<PathBuf>
where
    D: Fn(&Path) -> bool + Send + Sync + 'static,
    F: Fn(&str) -> bool,
{
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(options.honor_ignore_files)
        .follow_links(false)
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            entry.depth() == 0 || !is_dir || keep_dir(entry.path())
        });
    if options.honor_ignore_files {
        // Outside a git checkout the .gitignore files still count
        builder.require_git(false);
    }

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(root = %root.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .map(|name| keep_file(name))
            .unwrap_or(false);
        if matches {
            files.push(entry.into_path());
        }
    }

    files.sort();
    files
}

/// Resolve `path` against the current directory without touching symlinks.
pub fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
