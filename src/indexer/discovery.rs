use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};

/// Discover journey documents matching `pattern` below `root`
///
/// The pattern is relative to `root` and follows glob syntax (`content/journey/*.md`).
/// Only regular files are returned; a directory that happens to match is skipped.
///
/// # Returns
///
/// Paths in enumeration order, which is lexicographic within a directory. An empty
/// Vec is returned when nothing matches, including when the content directory is
/// missing.
///
/// # Errors
///
/// Returns an error if:
/// - The pattern is not valid glob syntax
/// - A matching entry cannot be read during enumeration
pub fn discover_documents(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let root = Pattern::escape(&root.to_string_lossy());
    let full_pattern = format!("{}/{}", root.trim_end_matches('/'), pattern);

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    let entries = glob::glob_with(&full_pattern, options)
        .with_context(|| format!("Invalid discovery pattern: {}", pattern))?;

    let mut documents = Vec::new();
    for entry in entries {
        let path = entry.context("Failed to read entry while discovering documents")?;
        if path.is_file() {
            documents.push(path);
        }
    }

    Ok(documents)
}
