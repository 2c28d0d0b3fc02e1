//! Command-line interface module.

mod args;
mod compose;
mod input;
mod sitemap;

pub use args::{Cli, Commands};

use crate::config::SiteConfig;
use anyhow::Result;

/// Run a subcommand; composed output goes to stdout.
pub fn run(command: &Commands, config: &SiteConfig) -> Result<()> {
    let output = match command {
        Commands::Meta { file, html } => compose::meta(config, file, *html)?,
        Commands::Schema { file, script } => compose::schema(config, file, *script)?,
        Commands::Post { file } => compose::post(config, file)?,
        Commands::Tags { value } => compose::tags(value)?,
        Commands::Sitemap { posts, output } => {
            return sitemap::generate(config, posts.as_deref(), output.as_deref());
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}
