//! Label registry: bidirectional species name ↔ model output index mapping.
//!
//! Built once at startup from the fixed label list the model was trained
//! against. Name lookups are case-normalized so `pikachu`, `PIKACHU`, and
//! `Pikachu` all resolve; index lookups outside the known range answer with
//! [`UNKNOWN_LABEL`] rather than failing.

use std::collections::HashMap;

/// Returned by [`LabelRegistry::name_for`] for out-of-range indices.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Immutable bijection between label names and model output indices.
pub struct LabelRegistry {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelRegistry {
    /// Build a registry from the ordered label list.
    ///
    /// Names are stored in canonical capitalized form; the position in the
    /// input list is the model output index.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names.into_iter().map(|n| capitalize(n.as_ref())).collect();
        let index = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        Self { names, index }
    }

    /// Resolve a label name to its model output index.
    ///
    /// The input is capitalized before lookup. `None` means the name is not a
    /// known label — callers must not conflate this with index 0.
    pub fn name_to_index(&self, name: &str) -> Option<usize> {
        self.index.get(&capitalize(name)).copied()
    }

    /// Resolve a model output index to its label name.
    ///
    /// Out-of-range indices return [`UNKNOWN_LABEL`].
    pub fn name_for(&self, index: usize) -> &str {
        self.names.get(index).map_or(UNKNOWN_LABEL, String::as_str)
    }

    /// Number of known labels.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Canonical label form: first character uppercased, the rest lowercased.
///
/// Shared by every name-keyed lookup (registry, dex metadata) so the same
/// input always normalizes the same way.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
