//! Data models for the journey index.
//!
//! - [`Journey`] - Title and slug parsed from one journey document
//! - [`MappingEntry`] - The persisted per-slug record
//! - [`JourneyMapping`] - Slug-keyed aggregate written to `data/journeys.json`
//!
//! `MappingEntry` is the contract with the site templates: its serialized shape is
//! `{"title": "..."}` and nothing else.

pub mod journey;
pub mod mapping;

pub use journey::Journey;
pub use mapping::{JourneyMapping, MappingEntry};
