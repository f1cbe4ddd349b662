//! Sitemap document assembly and XML serialization.

pub mod writer;

use chrono::{SecondsFormat, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Namespace of the sitemap protocol's `urlset` root element.
pub const SITEMAP_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const CHANGEFREQ: &str = "daily";
const PRIORITY: &str = "0.5";

/// One `url` element: a concrete, crawlable location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
}

impl SitemapEntry {
    /// Build an entry for `loc`, stamped with the current time.
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            lastmod: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        }
    }
}

/// The assembled document: entries in emission order, no deduplication, no
/// sorting. Built once per run and discarded after persistence.
#[derive(Debug, Default)]
pub struct SitemapDocument {
    entries: Vec<SitemapEntry>,
}

impl SitemapDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: SitemapEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    /// Serialize to the sitemap-protocol XML form.
    pub fn to_xml(&self) -> std::io::Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", SITEMAP_XMLNS));
        writer.write_event(Event::Start(urlset))?;

        for entry in &self.entries {
            writer.write_event(Event::Start(BytesStart::new("url")))?;
            write_text_element(&mut writer, "loc", &entry.loc)?;
            write_text_element(&mut writer, "lastmod", &entry.lastmod)?;
            write_text_element(&mut writer, "changefreq", CHANGEFREQ)?;
            write_text_element(&mut writer, "priority", PRIORITY)?;
            writer.write_event(Event::End(BytesEnd::new("url")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("urlset")))?;

        let bytes = writer.into_inner();
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> std::io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
