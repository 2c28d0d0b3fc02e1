//! RealNet - SEO metadata, JSON-LD and sitemap generation for the RealNet website.

#![allow(dead_code)]

mod blog;
mod cli;
mod config;
mod generator;
mod logger;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli.config)?;
    debug!("config"; "base url {}", config.site.base_url);

    cli::run(&cli.command, &config)
}
