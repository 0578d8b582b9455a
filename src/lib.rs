//! Journey Mapper - build-time journey index for a static site
//!
//! This library scans the journey documents of a site's content tree and writes the
//! lookup file templates use to resolve a post's parent journey. It supports:
//!
//! - Discovering journey documents under `content/journey/*.md`
//! - Extracting title and slug from YAML, TOML or JSON front matter
//! - Aggregating the results into a slug-keyed mapping
//! - Persisting the mapping to `data/journeys.json` with an atomic replace
//!
//! # Example
//!
//! ```no_run
//! use journey_mapper::{FrontMatterParser, JourneyMapper, MapperConfig, Runner, TracingSink};
//!
//! let mut mapper = JourneyMapper::new(
//!     MapperConfig::default(),
//!     Box::new(FrontMatterParser),
//!     Box::new(TracingSink::default()),
//! );
//! mapper.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod index_storage;
pub mod indexer;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod runner;

// Re-export commonly used types
pub use config::{DuplicatePolicy, MapperConfig};
pub use index_storage::save_mapping;
pub use indexer::{JourneyMapper, discover_documents};
pub use logging::{LogSink, TracingSink};
pub use models::{Journey, JourneyMapping, MappingEntry};
pub use parsers::{Document, DocumentParser, FrontMatterParser};
pub use runner::{Runner, run_all};
