//! Job configuration: where journeys are read from and where the mapping is written

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Glob pattern, relative to the site root, matching journey documents
pub const DEFAULT_PATTERN: &str = "content/journey/*.md";

/// Output file, relative to the site root
pub const DEFAULT_OUTPUT: &str = "data/journeys.json";

/// What to do when two documents resolve to the same slug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The later document in discovery order replaces the earlier one
    #[default]
    Overwrite,
    /// Abort the run
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperConfig {
    pub root: PathBuf,
    pub pattern: String,
    pub output: PathBuf,
    pub duplicates: DuplicatePolicy,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            pattern: DEFAULT_PATTERN.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl MapperConfig {
    /// Default layout rooted at `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), ..Self::default() }
    }

    /// Output path resolved against the site root (absolute paths are kept)
    pub fn output_path(&self) -> PathBuf {
        resolve(&self.root, &self.output)
    }

    /// Check the configuration before any filesystem work happens
    pub fn validate(&self) -> Result<()> {
        if self.pattern.trim().is_empty() {
            bail!("Discovery pattern must not be empty");
        }
        let output = self.output_path();
        if output.is_dir() {
            bail!("Output path is a directory: {}", output.display());
        }
        Ok(())
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { root.join(path) }
}
