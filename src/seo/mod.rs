//! SEO metadata and structured-data composition.
//!
//! [`MetadataComposer`] turns a page's descriptive fields into:
//!
//! - **Metadata**: title, description, canonical URL, Open Graph, Twitter
//!   card and robots directives ([`SeoMetadata`])
//! - **Structured data**: a schema.org JSON-LD record ([`StructuredDataRecord`])
//! - **Sitemap entries**: URL plus lastmod/changefreq/priority ([`SitemapEntry`])
//!
//! All operations are pure functions of their input and the read-only
//! [`SiteConfig`]; a composer can be shared freely across threads.
//!
//! # Example
//!
//! ```ignore
//! let config = SiteConfig::default();
//! let composer = MetadataComposer::new(&config);
//!
//! let meta = composer.compose_seo_metadata(&PageSeoInput::new().path("/about-us"));
//! assert_eq!(meta.page().alternates.canonical, "https://realnet-web.co.za/about-us");
//! ```

pub mod head;
mod input;
mod metadata;
mod sitemap;
mod structured;
mod tags;

pub use head::{render_head, render_json_ld};
pub use input::{PageKind, PageSeoInput, SchemaType, StructuredDataInput};
pub use metadata::{
    Alternates, GoogleBot, OgImage, OgKind, OpenGraph, PageMetadata, Robots, SeoMetadata,
    TwitterCard,
};
pub use sitemap::{ChangeFrequency, SitemapEntry, SitemapOptions};
pub use structured::{
    ArticleSchema, ContactPoint, ImageObject, Organization, Person, PostalAddress, SchemaKind,
    SearchAction, StructuredDataRecord,
};
pub use tags::normalize_tags;

use crate::config::SiteConfig;

/// Composes page metadata from partial input and site-wide defaults.
#[derive(Debug, Clone, Copy)]
pub struct MetadataComposer<'a> {
    config: &'a SiteConfig,
}

impl<'a> MetadataComposer<'a> {
    pub const fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &'a SiteConfig {
        self.config
    }

    /// `base_url + path`, or the bare base URL for an empty path.
    ///
    /// No slash normalization or percent-encoding is applied.
    pub fn canonical_url(&self, path: &str) -> String {
        let base = &self.config.site.base_url;
        if path.is_empty() {
            base.clone()
        } else {
            format!("{base}{path}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_url() {
        let config = SiteConfig::default();
        let composer = MetadataComposer::new(&config);

        assert_eq!(composer.canonical_url(""), "https://realnet-web.co.za");
        assert_eq!(
            composer.canonical_url("/contact-us"),
            "https://realnet-web.co.za/contact-us"
        );
    }

    #[test]
    fn test_canonical_url_follows_config() {
        let mut config = SiteConfig::default();
        config.site.base_url = "http://localhost:3000".into();
        let composer = MetadataComposer::new(&config);

        assert_eq!(composer.canonical_url("/blog"), "http://localhost:3000/blog");
    }

    #[test]
    fn test_composer_is_shareable_across_threads() {
        let config = SiteConfig::default();
        let composer = MetadataComposer::new(&config);

        std::thread::scope(|scope| {
            let handles: Vec<_> = ["/a", "/b", "/c"]
                .into_iter()
                .map(|path| {
                    scope.spawn(move || {
                        composer
                            .compose_seo_metadata(&PageSeoInput::new().path(path))
                            .page()
                            .alternates
                            .canonical
                            .clone()
                    })
                })
                .collect();

            let urls: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(
                urls,
                [
                    "https://realnet-web.co.za/a",
                    "https://realnet-web.co.za/b",
                    "https://realnet-web.co.za/c"
                ]
            );
        });
    }
}
