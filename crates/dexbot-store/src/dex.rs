//! Dex metadata: display details per species label.
//!
//! Loaded once at startup from a JSON object keyed by species name, read-only
//! thereafter. Absent entries are a normal condition — the response formatter
//! synthesizes a fallback — so lookup is a typed present/absent result, never
//! an implicit default.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use dexbot_core::labels::capitalize;
use serde::Deserialize;
use tracing::info;

use crate::StoreError;

/// Display metadata for one species.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DexEntry {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub color: String,
}

/// Read-only dex metadata store, keyed by canonical species name.
pub struct Dex {
    entries: HashMap<String, DexEntry>,
}

impl Dex {
    /// Load dex metadata from a JSON file: `{"Pikachu": {"title": ...}, ...}`.
    ///
    /// Keys are canonicalized on load so lookups match the label registry's
    /// normalization.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path)?;
        let parsed: HashMap<String, DexEntry> = serde_json::from_str(&raw)?;
        let entries = parsed
            .into_iter()
            .map(|(name, entry)| (capitalize(&name), entry))
            .collect::<HashMap<_, _>>();
        info!(entries = entries.len(), path = %path.display(), "loaded dex metadata");
        Ok(Self { entries })
    }

    /// Look up the entry for a species name, if one was loaded.
    pub fn entry(&self, name: &str) -> Option<&DexEntry> {
        self.entries.get(&capitalize(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
