//! Head tag rendering.
//!
//! Maps a composed [`SeoMetadata`] record onto the `<head>` elements it
//! stands for, and embeds a [`StructuredDataRecord`] as a JSON-LD script.
//! Attribute values are HTML-escaped; relative image URLs are resolved
//! against `metadataBase` because crawlers require absolute `og:image` URLs.

use super::{OgKind, Robots, SeoMetadata, StructuredDataRecord};
use crate::utils::html::{escape, escape_attr, escape_script_json};
use anyhow::{Context, Result};
use url::Url;

/// Accumulates head elements, one per line.
struct HeadWriter {
    out: String,
}

impl HeadWriter {
    fn new() -> Self {
        Self {
            out: String::with_capacity(2048),
        }
    }

    fn title(&mut self, text: &str) {
        self.out.push_str("<title>");
        self.out.push_str(&escape(text));
        self.out.push_str("</title>\n");
    }

    fn meta_name(&mut self, name: &str, content: &str) {
        self.meta("name", name, content);
    }

    fn meta_property(&mut self, property: &str, content: &str) {
        self.meta("property", property, content);
    }

    fn meta(&mut self, key: &str, value: &str, content: &str) {
        self.out.push_str(&format!(
            "<meta {key}=\"{value}\" content=\"{}\">\n",
            escape_attr(content)
        ));
    }

    fn link(&mut self, rel: &str, href: &str) {
        self.out.push_str(&format!(
            "<link rel=\"{rel}\" href=\"{}\">\n",
            escape_attr(href)
        ));
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Resolve `href` against `base`; unparseable input is returned verbatim.
pub fn absolute_url(base: &str, href: &str) -> String {
    Url::parse(base)
        .and_then(|base| base.join(href))
        .map(String::from)
        .unwrap_or_else(|_| href.to_owned())
}

/// `robots` content string, e.g. `index, follow`.
fn robots_directive(index: bool, follow: bool) -> String {
    format!(
        "{}, {}",
        if index { "index" } else { "noindex" },
        if follow { "follow" } else { "nofollow" }
    )
}

fn googlebot_directive(robots: &Robots) -> String {
    let bot = &robots.google_bot;
    format!(
        "{}, max-video-preview:{}, max-image-preview:{}, max-snippet:{}",
        robots_directive(bot.index, bot.follow),
        bot.max_video_preview,
        bot.max_image_preview,
        bot.max_snippet
    )
}

/// Render the head elements for a page.
pub fn render_head(meta: &SeoMetadata) -> String {
    let page = meta.page();
    let og = &page.open_graph;
    let mut head = HeadWriter::new();

    head.title(&page.title);
    head.meta_name("description", &page.description);
    if let Some(keywords) = &page.keywords {
        head.meta_name("keywords", keywords);
    }
    if let Some(authors) = meta.authors() {
        for author in authors {
            head.meta_name("author", author);
        }
    }
    if let Some(publisher) = meta.publisher() {
        head.meta_name("publisher", publisher);
    }
    head.link("canonical", &page.alternates.canonical);
    head.meta_name(
        "robots",
        &robots_directive(page.robots.index, page.robots.follow),
    );
    head.meta_name("googlebot", &googlebot_directive(&page.robots));

    // Open Graph
    head.meta_property("og:title", &og.title);
    head.meta_property("og:description", &og.description);
    head.meta_property("og:url", &og.url);
    head.meta_property("og:site_name", &og.site_name);
    head.meta_property("og:locale", &og.locale);
    head.meta_property("og:type", og.kind.as_str());
    for image in &og.images {
        head.meta_property("og:image", &absolute_url(&page.metadata_base, &image.url));
        head.meta_property("og:image:width", &image.width.to_string());
        head.meta_property("og:image:height", &image.height.to_string());
        head.meta_property("og:image:alt", &image.alt);
    }
    if let OgKind::Article {
        published_time,
        modified_time,
    } = &og.kind
    {
        if let Some(time) = published_time {
            head.meta_property("article:published_time", time);
        }
        if let Some(time) = modified_time {
            head.meta_property("article:modified_time", time);
        }
        for author in meta.authors().unwrap_or_default() {
            head.meta_property("article:author", author);
        }
    }

    // Twitter
    let twitter = &page.twitter;
    head.meta_name("twitter:card", twitter.card);
    head.meta_name("twitter:title", &twitter.title);
    head.meta_name("twitter:description", &twitter.description);
    for image in &twitter.images {
        head.meta_name("twitter:image", &absolute_url(&page.metadata_base, image));
    }
    head.meta_name("twitter:creator", &twitter.creator);

    head.finish()
}

/// Render a JSON-LD `<script>` element for the record.
pub fn render_json_ld(record: &StructuredDataRecord) -> Result<String> {
    let json = record
        .to_json()
        .context("Failed to serialize structured data")?;
    Ok(format!(
        "<script type=\"application/ld+json\">{}</script>\n",
        escape_script_json(&json)
    ))
}
