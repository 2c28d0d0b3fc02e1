//! `robots.txt` generation.

use super::write_output;
use crate::{config::SiteConfig, log};
use anyhow::Result;
use std::fmt::Write;
use std::path::PathBuf;

/// Render robots.txt: allow everything except the configured prefixes and
/// point crawlers at the absolute sitemap URL.
pub fn robots_txt(config: &SiteConfig) -> String {
    let mut out = String::from("User-agent: *\nAllow: /\n");
    for path in &config.robots.disallow {
        let _ = writeln!(out, "Disallow: {path}");
    }
    let _ = writeln!(
        out,
        "\nSitemap: {}/{}",
        config.site.base_url, config.sitemap.path
    );
    out
}

/// Write `robots.txt` into the output directory.
pub fn build_robots(config: &SiteConfig) -> Result<PathBuf> {
    let path = write_output(
        &config.output_dir(),
        &config.robots.path,
        &robots_txt(config),
    )?;
    log!("robots"; "{}", path.display());
    Ok(path)
}
