use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Arbitrary key/value metadata attached to a link (title, description, ...).
///
/// A `BTreeMap` keeps property serialization deterministic.
pub type Properties = BTreeMap<String, String>;

/// A stored link: its tag set and its property mapping.
///
/// This is also the value shape of the JSON seed file, keyed by link id:
/// `{ "<link id>": { "tags": [...], "properties": { ... } } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRecord {
    pub tags: HashSet<String>,
    #[serde(default)]
    pub properties: Properties,
}
