//! Sitemap entries.
//!
//! An entry is built from a site-relative path plus optional overrides merged
//! over the `[sitemap]` defaults (`lastModified = now`, `monthly`, `0.7`).
//! XML output lives in `generator::sitemap`.

use super::MetadataComposer;
use crate::utils::date::DateTimeUtc;
use serde::{Deserialize, Serialize};

/// How often a page is expected to change (`<changefreq>`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// Per-entry overrides; `None` keeps the configured default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SitemapOptions {
    pub last_modified: Option<DateTimeUtc>,
    pub change_frequency: Option<ChangeFrequency>,
    pub priority: Option<f32>,
}

impl SitemapOptions {
    pub fn last_modified(mut self, at: DateTimeUtc) -> Self {
        self.last_modified = Some(at);
        self
    }

    pub fn change_frequency(mut self, freq: ChangeFrequency) -> Self {
        self.change_frequency = Some(freq);
        self
    }

    pub fn priority(mut self, priority: f32) -> Self {
        self.priority = Some(priority);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTimeUtc,
    pub change_frequency: ChangeFrequency,
    /// Always within `0.0..=1.0`.
    pub priority: f32,
}

impl MetadataComposer<'_> {
    /// Build a sitemap entry for `path`.
    ///
    /// The URL is always `base_url + path`. Out-of-range priorities are
    /// clamped into `0.0..=1.0`.
    pub fn sitemap_entry(&self, path: &str, overrides: SitemapOptions) -> SitemapEntry {
        let defaults = &self.config().sitemap;

        SitemapEntry {
            url: format!("{}{}", self.config().site.base_url, path),
            last_modified: overrides.last_modified.unwrap_or_else(DateTimeUtc::now),
            change_frequency: overrides
                .change_frequency
                .unwrap_or(defaults.default_change_frequency),
            priority: overrides
                .priority
                .unwrap_or(defaults.default_priority)
                .clamp(0.0, 1.0),
        }
    }
}
