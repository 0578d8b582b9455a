//! Journey indexing: document discovery and the mapper job
//!
//! # Error Handling Strategy
//!
//! The indexer is a linear batch transform with no local recovery:
//!
//! - **Discovery**: An invalid glob pattern or an unreadable directory entry is an error.
//!   A missing content directory simply yields no documents.
//!
//! - **Parsing**: The first document that fails to parse aborts the run, naming its path.
//!
//! - **Persistence**: Only reached once every document has parsed, so a failed run never
//!   leaves a mapping that mixes old and new content.

pub mod builder;
pub mod discovery;

pub use builder::{JOURNEY_MAPPER_NAME, JourneyMapper};
pub use discovery::discover_documents;
