use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-slug record read by the templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub title: String,
}

/// Slug to entry. Ordered so the serialized file is stable between runs.
pub type JourneyMapping = BTreeMap<String, MappingEntry>;
