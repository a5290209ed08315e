//! Name lookup for the search control

use crate::data::feature::{CountryFeature, FeatureId};
use fxhash::FxHashMap;

/// Maps country display names to their rendered polygon.
///
/// When two features share a name the later one wins the lookup, while the
/// name keeps the list position of its first appearance.
#[derive(Debug, Clone, Default)]
pub struct CountryIndex {
    by_name: FxHashMap<String, FeatureId>,
    names: Vec<String>,
    sorted_names: Vec<String>,
}

impl CountryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build<'a>(features: impl IntoIterator<Item = &'a CountryFeature>) -> Self {
        let mut index = Self::new();
        for feature in features {
            index.insert(&feature.name, feature.id);
        }
        index.finish();
        index
    }

    fn insert(&mut self, name: &str, id: FeatureId) {
        if name.is_empty() {
            return;
        }
        if self.by_name.insert(name.to_string(), id).is_none() {
            self.names.push(name.to_string());
        }
    }

    fn finish(&mut self) {
        let mut sorted = self.names.clone();
        sorted.sort_by_key(|name| name.to_lowercase());
        self.sorted_names = sorted;
    }

    pub fn get(&self, name: &str) -> Option<FeatureId> {
        self.by_name.get(name).copied()
    }

    /// Names in first-appearance order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Names sorted case-insensitively, computed once at build time
    pub fn sorted_names(&self) -> &[String] {
        &self.sorted_names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolves free text to a feature: case-insensitive exact match first,
    /// then the first case-insensitive prefix match in list order.
    pub fn resolve(&self, query: &str) -> Option<FeatureId> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        let needle = query.to_lowercase();

        let exact = self.names.iter().find(|name| name.to_lowercase() == needle);
        let matched = exact.or_else(|| {
            self.names
                .iter()
                .find(|name| name.to_lowercase().starts_with(&needle))
        })?;

        self.get(matched)
    }

    /// Autocomplete candidates from the sorted list containing `query`
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        self.sorted_names
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}
