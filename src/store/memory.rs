use super::LinkStore;
use super::types::{LinkRecord, Properties};

use anyhow::{Context, Result};
use dashmap::DashMap;
use std::collections::HashMap;
use std::path::Path;

/// In-memory link index.
///
/// Match policy: a link matches when its tag set contains every query tag.
/// Order policy: lexicographic by link id, so responses are deterministic.
pub struct MemoryStore {
    links: DashMap<String, LinkRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }

    /// Loads seed data from a JSON file mapping link id to its record.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        let records: HashMap<String, LinkRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("invalid seed file {}", path.display()))?;

        let store = Self::new();
        for (link, record) in records {
            store.links.insert(link, record);
        }
        tracing::info!("Loaded {} links from {}", store.links.len(), path.display());
        Ok(store)
    }

    pub fn insert(&self, link: impl Into<String>, record: LinkRecord) {
        self.links.insert(link.into(), record);
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkStore for MemoryStore {
    fn sorted_links(&self, tags: &[String]) -> Vec<String> {
        let mut matches: Vec<String> = self
            .links
            .iter()
            .filter(|entry| tags.iter().all(|tag| entry.value().tags.contains(tag)))
            .map(|entry| entry.key().clone())
            .collect();
        matches.sort();
        matches
    }

    fn get_link_properties(&self, link: &str) -> Option<Properties> {
        self.links.get(link).map(|entry| entry.properties.clone())
    }

    fn complete_tags(&self, prefix: &str) -> Vec<String> {
        let mut completions: Vec<String> = Vec::new();
        for entry in self.links.iter() {
            for tag in entry.value().tags.iter() {
                if tag.starts_with(prefix) && !completions.contains(tag) {
                    completions.push(tag.clone());
                }
            }
        }
        completions.sort();
        completions
    }
}
