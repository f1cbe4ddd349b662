//! Entity resolver — turn a resolved type name into an enumerable record set.

pub mod json_source;

use anyhow::Result;
use std::collections::HashMap;

/// One record of a domain entity. Only the stable identifier matters here;
/// it is rendered in its natural string form when substituted into a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    pub id: String,
}

impl EntityRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// An enumerable source of records for one entity: "give me all records".
pub trait EntitySource {
    /// Materialize the full record set into memory. Called once per matching
    /// hint; a route with two hints on the same entity enumerates twice.
    fn all(&self) -> Result<Vec<EntityRecord>>;
}

/// Record sources keyed by entity type name.
///
/// Lookup tries the fully-qualified name first, then the bare short name, so
/// catalogs seeded from a data directory (one file per entity) still resolve
/// imports like `crate::models::User`.
#[derive(Default)]
pub struct EntityCatalog {
    sources: HashMap<String, Box<dyn EntitySource>>,
}

impl EntityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record source under a type name.
    pub fn register(&mut self, name: impl Into<String>, source: Box<dyn EntitySource>) {
        self.sources.insert(name.into(), source);
    }

    /// Resolve a fully-qualified type name to its record source.
    pub fn resolve(&self, qualified: &str) -> Option<&dyn EntitySource> {
        if let Some(source) = self.sources.get(qualified) {
            return Some(source.as_ref());
        }
        let short = qualified.rsplit("::").next()?;
        self.sources.get(short).map(|s| s.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// A fixed in-memory record source, useful for explicit registration and
/// tests.
pub struct StaticSource {
    records: Vec<EntityRecord>,
}

impl StaticSource {
    pub fn new(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            records: ids.into_iter().map(EntityRecord::new).collect(),
        }
    }
}

impl EntitySource for StaticSource {
    fn all(&self) -> Result<Vec<EntityRecord>> {
        Ok(self.records.clone())
    }
}
