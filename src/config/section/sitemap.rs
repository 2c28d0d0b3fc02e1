//! `[sitemap]` section: entry defaults and the static page routes.
//!
//! # Example
//!
//! ```toml
//! [sitemap]
//! default_change_frequency = "monthly"
//! default_priority = 0.7
//!
//! [[sitemap.routes]]
//! path = "/about-us"
//! change_frequency = "yearly"
//! priority = 0.8
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::seo::{ChangeFrequency, SitemapOptions};
use serde::{Deserialize, Serialize};

/// A static page listed in the sitemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Site-relative path, `""` for the home page.
    pub path: String,
    #[serde(default)]
    pub change_frequency: Option<ChangeFrequency>,
    #[serde(default)]
    pub priority: Option<f32>,
}

impl RouteConfig {
    fn new(path: &str, change_frequency: ChangeFrequency, priority: f32) -> Self {
        Self {
            path: path.into(),
            change_frequency: Some(change_frequency),
            priority: Some(priority),
        }
    }

    /// Per-route overrides for `MetadataComposer::sitemap_entry`.
    pub fn options(&self) -> SitemapOptions {
        SitemapOptions {
            last_modified: None,
            change_frequency: self.change_frequency,
            priority: self.priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Output file name inside the build output directory.
    pub path: String,
    pub default_change_frequency: ChangeFrequency,
    pub default_priority: f32,
    pub routes: Vec<RouteConfig>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        use ChangeFrequency::{Monthly, Weekly, Yearly};

        Self {
            path: "sitemap.xml".into(),
            default_change_frequency: Monthly,
            default_priority: 0.7,
            routes: vec![
                RouteConfig::new("", Weekly, 1.0),
                RouteConfig::new("/about-us", Yearly, 0.8),
                RouteConfig::new("/services", Monthly, 0.9),
                RouteConfig::new("/contact-us", Yearly, 0.8),
                RouteConfig::new("/blog", Weekly, 0.8),
                RouteConfig::new("/get-a-quote", Monthly, 0.7),
            ],
        }
    }
}

impl SitemapConfig {
    const DEFAULT_PRIORITY: FieldPath = FieldPath::new("sitemap.default_priority");
    const ROUTES: FieldPath = FieldPath::new("sitemap.routes");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !(0.0..=1.0).contains(&self.default_priority) {
            diag.error_with_hint(
                Self::DEFAULT_PRIORITY,
                format!("priority {} is outside 0.0..=1.0", self.default_priority),
                "sitemap priorities range from 0.0 to 1.0",
            );
        }

        for route in &self.routes {
            if !route.path.is_empty() && !route.path.starts_with('/') {
                diag.error_with_hint(
                    Self::ROUTES,
                    format!("route path '{}' is not site-relative", route.path),
                    format!("use \"/{}\"", route.path),
                );
            }
            if let Some(priority) = route.priority
                && !(0.0..=1.0).contains(&priority)
            {
                diag.error(
                    Self::ROUTES,
                    format!("route '{}' priority {priority} is outside 0.0..=1.0", route.path),
                );
            }
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
        assert_eq!(
            config.sitemap.default_change_frequency,
            ChangeFrequency::Monthly
        );
        assert!((config.sitemap.default_priority - 0.7).abs() < f32::EPSILON);
        assert!(config.sitemap.routes.iter().any(|r| r.path == "/about-us"));
        assert_eq!(config.sitemap.routes[0].path, "");
    }

    #[test]
    fn test_routes_replace_defaults() {
        let config = test_parse_config(
            "[[sitemap.routes]]\npath = \"/pricing\"\nchange_frequency = \"daily\"",
        );
        assert_eq!(config.sitemap.routes.len(), 1);
        let route = &config.sitemap.routes[0];
        assert_eq!(route.change_frequency, Some(ChangeFrequency::Daily));
        assert_eq!(route.priority, None);
    }

    #[test]
    fn test_validate_priority_range() {
        let mut diag = ConfigDiagnostics::new();
        let sitemap = SitemapConfig {
            default_priority: 1.5,
            routes: vec![RouteConfig {
                path: "blog".into(),
                change_frequency: None,
                priority: Some(-0.1),
            }],
            ..Default::default()
        };
        sitemap.validate(&mut diag);
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_route_options() {
        let route = RouteConfig::new("/services", ChangeFrequency::Monthly, 0.9);
        let options = route.options();
        assert_eq!(options.priority, Some(0.9));
        assert!(options.last_modified.is_none());
    }
}
