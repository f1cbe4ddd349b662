//! Persist the assembled sitemap under the public root.

use crate::error::MapError;
use crate::sitemap::SitemapDocument;
use std::path::Path;
use tracing::info;

/// Write the document to `path`, fully overwriting any prior file.
///
/// The write is a single plain overwrite; a partial file on crash is an
/// accepted risk of the design. Parent directories are created if missing.
pub fn persist(doc: &SitemapDocument, path: &Path) -> Result<(), MapError> {
    let xml = doc.to_xml().map_err(|source| MapError::WriteSitemap {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| MapError::WriteSitemap {
            path: path.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, xml).map_err(|source| MapError::WriteSitemap {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), entries = doc.len(), "sitemap written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::SitemapEntry;

    #[test]
    fn test_persist_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public/sitemap.xml");

        let mut doc = SitemapDocument::new();
        doc.push(SitemapEntry {
            loc: "https://example.com/a".to_string(),
            lastmod: "2026-01-01T00:00:00+00:00".to_string(),
        });
        persist(&doc, &path).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        assert!(first.contains("example.com/a"));

        let mut doc = SitemapDocument::new();
        doc.push(SitemapEntry {
            loc: "https://example.com/b".to_string(),
            lastmod: "2026-01-01T00:00:00+00:00".to_string(),
        });
        persist(&doc, &path).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert!(second.contains("example.com/b"));
        assert!(!second.contains("example.com/a"));
    }
}
