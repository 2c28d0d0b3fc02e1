//! Command-line interface definitions.

use crate::config::DEFAULT_CONFIG_NAME;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// SEO metadata, JSON-LD and sitemap generator for the RealNet website
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: realnet.toml)
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG_NAME, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compose SEO metadata from a page input file (JSON or TOML)
    #[command(visible_alias = "m")]
    Meta {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Print `<head>` tags instead of JSON
        #[arg(long)]
        html: bool,
    },

    /// Compose a JSON-LD record from a structured-data input file
    Schema {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Wrap the record in a `<script type="application/ld+json">` element
        #[arg(long)]
        script: bool,
    },

    /// Compose metadata for a blog post from a saved content API response
    #[command(visible_alias = "p")]
    Post {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Normalize a tags value (JSON list, comma-separated or single tag)
    Tags { value: String },

    /// Write sitemap.xml and robots.txt
    #[command(visible_alias = "s")]
    Sitemap {
        /// Saved post listing whose posts are added to the sitemap
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        posts: Option<PathBuf>,

        /// Output directory (overrides `[build] output`)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,
    },
}
