//! Enumerate the files a rule applies to.
//!
//! Enumeration happens once, before any file is touched: files created
//! while the run is in progress are not picked up.

use crate::error::PatchError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// `*` never matches across `/`, and never matches a leading `.`.
const MATCH_OPTIONS: glob::MatchOptions = glob::MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// List every path under `root` matching the glob `pattern`.
///
/// `*` matches exactly one path segment, so `app/tools/*/page.tsx` never
/// descends past the first level below `app/tools`. Metacharacters in
/// `root` itself are escaped. Results come back in the glob crate's
/// alphabetical order; callers should not depend on it. Matches that are
/// not readable files (directories, dangling symlinks) are still returned
/// and fail when opened.
pub fn matching_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, PatchError> {
    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    let full_pattern = Path::new(&escaped_root).join(pattern);
    let full_pattern = full_pattern.to_string_lossy();

    let entries =
        glob::glob_with(&full_pattern, MATCH_OPTIONS).map_err(|source| PatchError::Pattern {
            pattern: full_pattern.to_string(),
            source,
        })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| PatchError::Enumerate {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        files.push(path);
    }

    debug!(pattern = %full_pattern, count = files.len(), "enumerated matches");
    Ok(files)
}

/// Path as it should be shown to the user: relative to `root` when possible.
pub fn display_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
