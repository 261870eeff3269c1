use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "java";

/// Maps a dotted package name onto the directory that backs it under `root`.
pub fn package_dir(root: &Path, package_name: &str) -> PathBuf {
    package_name
        .split('.')
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

/// Collects every regular file below `root` carrying `extension`.
///
/// Ignore files and hidden-file filtering are disabled so the walk sees the
/// whole tree. Symlinked directories are not descended into, but a symlink
/// that resolves to a regular file is kept. Entries come back sorted by file
/// name within each directory.
pub fn scan_source_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    std::fs::metadata(root)
        .with_context(|| format!("Failed to access source root: {}", root.display()))?;

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .parents(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        let path = entry.path();
        if path.extension().is_some_and(|e| e == extension) && path.is_file() {
            tracing::debug!(path = %path.display(), "found source file");
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}
