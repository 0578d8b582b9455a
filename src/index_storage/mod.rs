//! Persistent journey mapping
//!
//! The mapping is written to a single JSON file (`data/journeys.json` by default) that the
//! site templates read by slug. Each run rewrites the whole file: it is a snapshot of the
//! content tree, never a patch.

pub mod persistence;

pub use persistence::save_mapping;
