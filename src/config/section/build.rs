//! `[build]` and `[robots]` sections: where generated files go.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory for sitemap.xml and robots.txt, relative to the config file.
    pub output: PathBuf,
    /// Strip indentation from generated XML.
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            minify: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    /// Output file name inside the build output directory.
    pub path: String,
    /// Path prefixes crawlers should skip.
    pub disallow: Vec<String>,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            path: "robots.txt".into(),
            disallow: vec!["/api/".into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(!config.build.minify);
        assert_eq!(config.robots.disallow, vec!["/api/"]);
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            "[build]\noutput = \"dist\"\nminify = true\n[robots]\ndisallow = []",
        );
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(config.build.minify);
        assert!(config.robots.disallow.is_empty());
    }
}
