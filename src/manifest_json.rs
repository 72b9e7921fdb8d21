//! Icon map for a browser extension `manifest.json`
//!
//! Extension manifests reference their icons through an `"icons"` object
//! keyed by pixel size:
//!
//! ```json
//! {
//!   "icons": {
//!     "16": "icons/icon16.png",
//!     "48": "icons/icon48.png"
//!   }
//! }
//! ```
//!
//! The structures here produce that fragment so a build can merge it into
//! its manifest next to the generated PNGs.

use anyhow::{Context, Result};
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::path::Path;

/// Root of the manifest fragment
#[derive(Serialize, Debug, Clone, Default)]
pub struct IconManifest {
    /// Size to path entries, serialized as a JSON object in insertion order
    pub icons: IconMap,
}

/// Ordered `size -> path` entries
///
/// JSON object keys are strings, so sizes are written as `"16"`, `"48"`, ...
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconMap {
    entries: Vec<(u32, String)>,
}

impl IconManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the icon path for `size`
    pub fn add_icon(&mut self, size: u32, path: String) {
        self.icons.insert(size, path);
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize manifest icons")
    }
}

impl IconMap {
    fn insert(&mut self, size: u32, path: String) {
        match self.entries.iter_mut().find(|(s, _)| *s == size) {
            Some(entry) => entry.1 = path,
            None => self.entries.push((size, path)),
        }
    }

    pub fn get(&self, size: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| *s == size)
            .map(|(_, path)| path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for IconMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (size, path) in &self.entries {
            map.serialize_entry(&size.to_string(), path)?;
        }
        map.end()
    }
}

/// Writes the manifest fragment to `path`
pub fn write_manifest_json(path: &Path, manifest: &IconManifest) -> Result<()> {
    let json = manifest.to_json()?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write manifest icons to {}", path.display()))
}
