//! `sitemap` command: static routes plus blog posts, then robots.txt.

use super::input::read_input;
use crate::{
    blog::{PostsResponse, blog_sitemap_entries},
    config::SiteConfig,
    generator::{robots::build_robots, sitemap::{build_sitemap, route_entries}},
    log,
    seo::MetadataComposer,
};
use anyhow::{Context, Result};
use std::path::Path;

pub fn generate(config: &SiteConfig, posts: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let mut config = config.clone();
    if let Some(output) = output {
        config.build.output = std::env::current_dir()
            .context("Failed to get current working directory")?
            .join(output);
    }

    let composer = MetadataComposer::new(&config);
    let mut entries = route_entries(&composer);

    if let Some(posts) = posts {
        match read_input::<PostsResponse>(posts) {
            Ok(response) => entries.extend(blog_sitemap_entries(&composer, &response)),
            Err(err) => log!("blog"; "skipping posts: {err:#}"),
        }
    }

    build_sitemap(&config, entries)?;
    build_robots(&config)?;
    Ok(())
}
