//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use journey_mapper::{FrontMatterParser, JourneyMapper, LogSink, MapperConfig};
use tempfile::TempDir;

/// Builder for creating test site directory structures
pub struct SiteBuilder {
    temp_dir: TempDir,
}

impl SiteBuilder {
    /// Create a new builder with empty `content/journey` and `data` directories
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("content/journey"))
            .expect("Failed to create journey dir");
        fs::create_dir_all(temp_dir.path().join("data")).expect("Failed to create data dir");
        Self { temp_dir }
    }

    /// Get the path to the site root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a journey document under `content/journey`
    pub fn with_journey(self, journey: JourneyDocBuilder) -> Self {
        journey.create_in(&self.temp_dir.path().join("content/journey"));
        self
    }

    /// Add a raw file relative to the site root
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create parent dir");
        fs::write(path, content).expect("Failed to write file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for SiteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for journey markdown documents
pub struct JourneyDocBuilder {
    filename: String,
    title: Option<String>,
    slug: Option<String>,
    body: String,
}

impl JourneyDocBuilder {
    /// Create a new document with the given filename and no metadata
    pub fn new(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            title: None,
            slug: None,
            body: "Some journey description.\n".to_string(),
        }
    }

    /// Set the title
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the slug
    pub fn slug(mut self, slug: &str) -> Self {
        self.slug = Some(slug.to_string());
        self
    }

    /// Render as markdown with YAML front matter
    pub fn to_markdown(&self) -> String {
        let mut front_matter = String::new();
        if let Some(title) = &self.title {
            front_matter.push_str(&format!("title: \"{}\"\n", title));
        }
        if let Some(slug) = &self.slug {
            front_matter.push_str(&format!("slug: \"{}\"\n", slug));
        }
        format!("---\n{}---\n\n{}", front_matter, self.body)
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) {
        fs::write(dir.join(&self.filename), self.to_markdown())
            .expect("Failed to write journey document");
    }
}

/// Log sink that records every line for later assertions
#[derive(Clone, Default)]
pub struct RecordingSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.lines().into_iter().filter_map(|l| l.strip_prefix("INFO ").map(String::from)).collect()
    }
}

impl LogSink for RecordingSink {
    fn info(&self, message: &str) {
        self.lines.borrow_mut().push(format!("INFO {}", message));
    }

    fn warn(&self, message: &str) {
        self.lines.borrow_mut().push(format!("WARN {}", message));
    }
}

/// Journey mapper over `root` with the front matter parser and a recording sink
pub fn mapper_for(root: &Path, sink: &RecordingSink) -> JourneyMapper {
    JourneyMapper::new(
        MapperConfig::with_root(root),
        Box::new(FrontMatterParser),
        Box::new(sink.clone()),
    )
}

/// Path of the default output file below `root`
pub fn output_path(root: &Path) -> PathBuf {
    root.join("data").join("journeys.json")
}

/// The two-journey site used by end-to-end tests
pub fn alpine_and_coastal_site() -> TempDir {
    SiteBuilder::new()
        .with_journey(JourneyDocBuilder::new("a.md").title("Alpine Trail").slug("alpine-trail"))
        .with_journey(JourneyDocBuilder::new("b.md").title("Coastal Loop").slug("coastal-loop"))
        .build()
}
