use crate::error::PatchError;
use crate::rule::FixRule;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Whether a rewrite touches the disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write the result back, even when nothing changed
    #[default]
    InPlace,
    /// Compute the result only
    DryRun,
}

/// Result of one read-modify-write cycle on a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "RewriteResult should be reported"]
pub struct RewriteResult {
    /// Path that was read (and written, unless dry-running)
    pub file: PathBuf,
    /// Occurrences of the search literal that were replaced
    pub replacements: usize,
    /// Content before the rule was applied
    pub original: String,
    /// Content after the rule was applied
    pub patched: String,
    /// Whether the patched content was written back
    pub written: bool,
}

impl RewriteResult {
    pub fn changed(&self) -> bool {
        self.original != self.patched
    }
}

/// Read `path`, apply `rule`, and write the full result back.
///
/// The write happens whether or not the rule matched, so a file without
/// the search literal is rewritten with identical content. Non-UTF-8
/// content fails the read.
pub fn rewrite_file(
    path: &Path,
    rule: &FixRule,
    mode: WriteMode,
) -> Result<RewriteResult, PatchError> {
    let original = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let rewrite = rule.apply(&original);

    let written = match mode {
        WriteMode::InPlace => {
            replace_contents(path, rewrite.text.as_bytes()).map_err(|source| {
                PatchError::Write {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            true
        }
        WriteMode::DryRun => false,
    };

    debug!(
        path = %path.display(),
        replacements = rewrite.replacements,
        written,
        "rewrote file"
    );

    Ok(RewriteResult {
        file: path.to_path_buf(),
        replacements: rewrite.replacements,
        original,
        patched: rewrite.text,
        written,
    })
}

/// Truncate `path` and write `content` through a single write handle.
///
/// The file is opened in place, so symlinks, hard links, ownership and
/// permissions are all left as they were.
fn replace_contents(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)?;
    file.write_all(content)?;
    file.sync_all()?;

    Ok(())
}
