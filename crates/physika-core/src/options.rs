//! Configuration options for mesh construction.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options controlling how a volumetric mesh lays out its lookup data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshOptions {
    /// How ragged meshes find the start of an element's connectivity.
    pub offset_lookup: OffsetLookup,
}

impl MeshOptions {
    /// Parses options from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the offset lookup strategy.
    #[must_use]
    pub fn with_offset_lookup(mut self, offset_lookup: OffsetLookup) -> Self {
        self.offset_lookup = offset_lookup;
        self
    }
}

/// Strategy for locating an element's first connectivity entry in a ragged mesh.
///
/// Uniform meshes always compute `element * vertices_per_element` and ignore
/// this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OffsetLookup {
    /// Prefix-sum table built once at construction. O(1) per query.
    #[default]
    PrefixTable,
    /// Sum the counts of all preceding elements on every query.
    LinearScan,
}
