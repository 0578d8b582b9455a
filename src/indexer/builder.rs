//! The journey mapper job: discover, parse, aggregate, persist.
//!
//! # Error Handling Strategy
//!
//! This module is **fail-fast**. The mapping is a contract with the site templates, so a
//! partial mapping is worse than none:
//!
//! - **Parse errors**: The first document that fails to parse aborts the run. The error
//!   names the document path and wraps the parser's cause.
//! - **Ordering**: Every document is parsed before anything is written, so a parse failure
//!   leaves an existing `data/journeys.json` untouched.
//! - **Duplicates**: Governed by [`DuplicatePolicy`]. The default keeps the later document.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::config::{DuplicatePolicy, MapperConfig};
use crate::index_storage::save_mapping;
use crate::indexer::discovery::discover_documents;
use crate::logging::LogSink;
use crate::models::{Journey, JourneyMapping, MappingEntry};
use crate::parsers::DocumentParser;
use crate::runner::Runner;

/// Name the job reports to the runner
pub const JOURNEY_MAPPER_NAME: &str = "journey mapper";

/// Generates the journey mapping out of all journey documents of a site.
///
/// The mapping is used by the side menu and for linking between posts and journeys.
pub struct JourneyMapper {
    config: MapperConfig,
    parser: Box<dyn DocumentParser>,
    log: Box<dyn LogSink>,
}

impl JourneyMapper {
    pub fn new(
        config: MapperConfig,
        parser: Box<dyn DocumentParser>,
        log: Box<dyn LogSink>,
    ) -> Self {
        Self { config, parser, log }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Parse every discovered document, stopping at the first failure
    pub fn find_journeys(&self) -> Result<Vec<Journey>> {
        let candidates = discover_documents(&self.config.root, &self.config.pattern)?;
        let mut journeys = Vec::with_capacity(candidates.len());

        for path in candidates {
            let journey = self
                .parse_journey(&path)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            self.log.info(&format!("Found {}", path.display()));
            journeys.push(journey);
        }

        Ok(journeys)
    }

    fn parse_journey(&self, path: &Path) -> Result<Journey> {
        let mut file = File::open(path).context("Failed to open document")?;
        let document = self.parser.parse(&mut file, path)?;
        Ok(Journey { slug: document.slug, name: document.title })
    }

    /// Aggregate journeys into the slug-keyed mapping
    ///
    /// # Errors
    ///
    /// Returns an error if two journeys share a slug and the policy is
    /// [`DuplicatePolicy::Reject`].
    pub fn build_mapping(&self, journeys: &[Journey]) -> Result<JourneyMapping> {
        let mut mapping = JourneyMapping::new();

        for journey in journeys {
            let entry = MappingEntry { title: journey.name.clone() };
            if let Some(previous) = mapping.insert(journey.slug.clone(), entry) {
                match self.config.duplicates {
                    DuplicatePolicy::Overwrite => self.log.warn(&format!(
                        "Duplicate slug '{}': \"{}\" replaces \"{}\"",
                        journey.slug, journey.name, previous.title
                    )),
                    DuplicatePolicy::Reject => {
                        bail!("Duplicate slug '{}' found in journey documents", journey.slug)
                    }
                }
            }
        }

        Ok(mapping)
    }

    /// Write `data/journeys.json` from the current content
    pub fn build_journey_mapping(&self) -> Result<JourneyMapping> {
        self.config.validate()?;
        let target = self.config.output_path();

        let journeys = self.find_journeys()?;
        let mapping = self.build_mapping(&journeys)?;
        save_mapping(&target, &mapping)?;

        self.log.info(&format!("{} updated", target.display()));
        Ok(mapping)
    }
}

impl Runner for JourneyMapper {
    fn name(&self) -> &str {
        JOURNEY_MAPPER_NAME
    }

    fn run(&mut self) -> Result<()> {
        self.build_journey_mapping().map(|_| ())
    }
}
