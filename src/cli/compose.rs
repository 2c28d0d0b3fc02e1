//! `meta`, `schema`, `post` and `tags` commands.
//!
//! Each returns the text to print; JSON output is pretty-printed.

use super::input::read_input;
use crate::{
    blog::{PostResponse, post_seo_input},
    config::SiteConfig,
    seo::{
        MetadataComposer, PageSeoInput, StructuredDataInput, normalize_tags, render_head,
        render_json_ld,
    },
};
use anyhow::Result;
use serde_json::{Value, json};
use std::path::Path;

pub fn meta(config: &SiteConfig, file: &Path, html: bool) -> Result<String> {
    let input: PageSeoInput = read_input(file)?;
    let meta = MetadataComposer::new(config).compose_seo_metadata(&input);

    if html {
        Ok(render_head(&meta))
    } else {
        Ok(serde_json::to_string_pretty(&meta)?)
    }
}

pub fn schema(config: &SiteConfig, file: &Path, script: bool) -> Result<String> {
    let input: StructuredDataInput = read_input(file)?;
    let record = MetadataComposer::new(config).compose_structured_data(&input);

    if script {
        render_json_ld(&record)
    } else {
        Ok(serde_json::to_string_pretty(&record)?)
    }
}

/// Metadata plus JSON-LD for a saved single-post response.
///
/// A file that cannot be loaded is treated like a failed fetch: the output
/// carries the not-found metadata and no structured data.
pub fn post(config: &SiteConfig, file: &Path) -> Result<String> {
    let composer = MetadataComposer::new(config);
    let response = read_input::<PostResponse>(file);

    let structured = response
        .as_ref()
        .ok()
        .and_then(|response| response.post.as_ref())
        .map(|post| composer.compose_structured_data(&post.structured_input(&config.site.base_url)));
    let meta = composer.compose_seo_metadata(&post_seo_input(response));

    let output = json!({
        "metadata": meta,
        "structuredData": structured,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

pub fn tags(value: &str) -> Result<String> {
    let tags = normalize_tags(&Value::String(value.to_owned()));
    Ok(serde_json::to_string(&tags)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_meta_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "about.json", r#"{"title": "About Us", "path": "/about-us"}"#);

        let out = meta(&SiteConfig::default(), &file, false).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["title"], "About Us");
        assert_eq!(
            value["alternates"]["canonical"],
            "https://realnet-web.co.za/about-us"
        );
        assert!(value.get("authors").is_none());
    }

    #[test]
    fn test_meta_accepts_numeric_title() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "page.json", r#"{"title": 42}"#);

        let out = meta(&SiteConfig::default(), &file, false).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["title"], "42");
    }

    #[test]
    fn test_meta_html() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "about.toml", "title = \"About Us\"");

        let out = meta(&SiteConfig::default(), &file, true).unwrap();
        assert!(out.starts_with("<title>About Us</title>"));
    }

    #[test]
    fn test_schema_script() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "services.json", r#"{"type": "Service"}"#);

        let out = schema(&SiteConfig::default(), &file, true).unwrap();
        assert!(out.contains(r#""@type":"Service""#));
        assert!(out.contains(r#""@type":"ContactPoint""#));
    }

    #[test]
    fn test_post_found() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(
            dir.path(),
            "post.json",
            r#"{"post": {"slug": "hello", "title": "Hello", "tags": "a, b"}}"#,
        );

        let out = post(&SiteConfig::default(), &file).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["metadata"]["openGraph"]["type"], "article");
        assert_eq!(value["metadata"]["keywords"], "a, b");
        assert_eq!(
            value["structuredData"]["url"],
            "https://realnet-web.co.za/blog/hello"
        );
    }

    #[test]
    fn test_post_unreadable_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing.json");

        let out = post(&SiteConfig::default(), &file).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["metadata"]["title"], "Blog Post Not Found");
        assert_eq!(value["metadata"]["robots"]["index"], false);
        assert!(value["structuredData"].is_null());
    }

    #[test]
    fn test_tags() {
        assert_eq!(tags("web, seo").unwrap(), r#"["web","seo"]"#);
        assert_eq!(tags(r#"["a,b"]"#).unwrap(), r#"["a,b"]"#);
        assert_eq!(tags("  ").unwrap(), "[]");
    }
}
