//! Sitemap generation.
//!
//! Renders composed sitemap entries as a sitemaps.org `urlset`.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://realnet-web.co.za/about-us</loc>
//!     <lastmod>2025-01-01T00:00:00Z</lastmod>
//!     <changefreq>yearly</changefreq>
//!     <priority>0.8</priority>
//!   </url>
//! </urlset>
//! ```

use super::{minify_xml, write_output};
use crate::{
    config::SiteConfig,
    log,
    seo::{MetadataComposer, SitemapEntry},
    utils::html::escape_xml,
};
use anyhow::Result;
use rustc_hash::FxHashSet;
use std::path::PathBuf;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Entries for the static pages listed under `[sitemap.routes]`.
pub fn route_entries(composer: &MetadataComposer<'_>) -> Vec<SitemapEntry> {
    composer
        .config()
        .sitemap
        .routes
        .iter()
        .map(|route| composer.sitemap_entry(&route.path, route.options()))
        .collect()
}

/// Write `sitemap.xml` into the output directory.
pub fn build_sitemap(config: &SiteConfig, entries: Vec<SitemapEntry>) -> Result<PathBuf> {
    let sitemap = Sitemap::from_entries(entries);
    let count = sitemap.len();
    let xml = sitemap.into_xml();
    let xml = minify_xml(&xml, config.build.minify);

    let path = write_output(&config.output_dir(), &config.sitemap.path, &xml)?;
    log!("sitemap"; "{} ({} urls)", path.display(), count);
    Ok(path)
}

pub struct Sitemap {
    entries: Vec<SitemapEntry>,
}

impl Sitemap {
    /// Collect entries, keeping the first one seen for each URL.
    pub fn from_entries(entries: impl IntoIterator<Item = SitemapEntry>) -> Self {
        let mut seen = FxHashSet::default();
        let entries = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.url.clone()))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.entries.len() * 160);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.entries {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.url));
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&entry.last_modified.to_rfc3339());
            xml.push_str("</lastmod>\n    <changefreq>");
            xml.push_str(entry.change_frequency.as_str());
            xml.push_str("</changefreq>\n    <priority>");
            xml.push_str(&format!("{:.1}", entry.priority));
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}
