//! JSON-file record sources, seeded from a data directory.
//!
//! The CLI's stand-in for a live database: each `<Entity>.json` file in the
//! directory holds an array of records, each with an `id` field.

use super::{EntityCatalog, EntityRecord, EntitySource};
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Record source backed by one JSON file.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EntitySource for JsonFileSource {
    fn all(&self) -> Result<Vec<EntityRecord>> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let value: Value = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        let Value::Array(items) = value else {
            bail!("{} is not a JSON array of records", self.path.display());
        };

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            let Some(id) = item.get("id") else {
                bail!("record without an `id` field in {}", self.path.display());
            };
            records.push(EntityRecord::new(render_id(id)));
        }
        Ok(records)
    }
}

/// Render an identifier in its natural string form: strings as-is, numbers
/// and other scalars via their JSON text.
fn render_id(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Seed a catalog with one [`JsonFileSource`] per `*.json` file in `dir`,
/// registered under the file stem (the entity's short name).
///
/// A missing directory yields an empty catalog; dynamic routes will then be
/// dropped with "no record source" rather than failing the run.
pub fn catalog_from_dir(dir: &Path) -> Result<EntityCatalog> {
    let mut catalog = EntityCatalog::new();
    if !dir.is_dir() {
        return Ok(catalog);
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read entity directory {}", dir.display()))?
    {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        debug!(entity = stem, path = %path.display(), "registered record source");
        catalog.register(stem, Box::new(JsonFileSource::new(&path)));
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_source_renders_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("User.json");
        std::fs::write(
            &path,
            r#"[{"id": 1, "name": "a"}, {"id": 2}, {"id": "slug-three"}]"#,
        )
        .unwrap();

        let records = JsonFileSource::new(&path).all().unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "slug-three"]);
    }

    #[test]
    fn test_record_without_id_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("User.json");
        std::fs::write(&path, r#"[{"name": "a"}]"#).unwrap();
        assert!(JsonFileSource::new(&path).all().is_err());
    }

    #[test]
    fn test_catalog_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("User.json"), r#"[{"id": 1}]"#).unwrap();
        std::fs::write(dir.path().join("Post.json"), r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let catalog = catalog_from_dir(dir.path()).unwrap();
        assert_eq!(
            catalog.resolve("crate::models::Post").unwrap().all().unwrap().len(),
            2
        );
        assert!(catalog.resolve("notes").is_none());
    }

    #[test]
    fn test_missing_dir_is_empty_catalog() {
        let catalog = catalog_from_dir(Path::new("/nonexistent/entities")).unwrap();
        assert!(catalog.is_empty());
    }
}
