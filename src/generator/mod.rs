//! Crawler-facing files written into the build output.
//!
//! - **Sitemap**: `sitemap.xml` from composed [`SitemapEntry`](crate::seo::SitemapEntry) values
//! - **Robots**: `robots.txt` pointing crawlers at the sitemap

pub mod robots;
pub mod sitemap;

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// Minify XML content if enabled.
pub fn minify_xml(content: &str, enabled: bool) -> Cow<'_, str> {
    if enabled {
        let minified = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified)
    } else {
        Cow::Borrowed(content)
    }
}

/// Write `content` to `output_dir/name`, creating the directory if needed.
fn write_output(output_dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let path = output_dir.join(name);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_xml_basic() {
        let xml = r#"<?xml version="1.0"?>
<root>
  <item>Hello</item>
</root>"#;
        let result = minify_xml(xml, true);

        assert_eq!(result, r#"<?xml version="1.0"?><root><item>Hello</item></root>"#);
    }

    #[test]
    fn test_minify_xml_removes_empty_lines() {
        let xml = "<root>\n\n  <item/>\n\n</root>";
        assert_eq!(minify_xml(xml, true), "<root><item/></root>");
    }

    #[test]
    fn test_minify_xml_disabled() {
        let xml = "<root>\n  <item/>\n</root>";
        assert!(matches!(minify_xml(xml, false), Cow::Borrowed(s) if s == xml));
    }

    #[test]
    fn test_write_output_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("public/nested");

        let path = write_output(&out, "robots.txt", "User-agent: *\n").unwrap();
        assert_eq!(path, out.join("robots.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "User-agent: *\n");
    }
}
