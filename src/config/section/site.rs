//! `[site]` section: site-wide SEO defaults.
//!
//! Every field a page leaves out of its `PageSeoInput` is filled from here.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site-wide fallbacks for page metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteDefaults {
    /// Absolute site URL without trailing slash; canonical URLs are `base_url + path`.
    pub base_url: String,
    pub title: String,
    pub description: String,
    /// Default Open Graph / Twitter image, usually site-relative.
    pub image: String,
    pub author: String,
    /// `og:site_name`.
    pub site_name: String,
    /// `og:locale`, e.g. "en_ZA".
    pub locale: String,
    /// `twitter:creator` handle.
    pub twitter_creator: String,
}

impl Default for SiteDefaults {
    fn default() -> Self {
        Self {
            base_url: "https://realnet-web.co.za".into(),
            title: "RealNet Web Solutions | Web & Software Development Agency".into(),
            description: "RealNet Web Solutions builds fast, modern websites, web applications \
                          and custom software for businesses across South Africa."
                .into(),
            image: "/og-image.jpg".into(),
            author: "Themba Real Lukhele".into(),
            site_name: "RealNet Web Solutions".into(),
            locale: "en_ZA".into(),
            twitter_creator: "@realnetweb".into(),
        }
    }
}

impl SiteDefaults {
    const BASE_URL: FieldPath = FieldPath::new("site.base_url");
    const TITLE: FieldPath = FieldPath::new("site.title");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `base_url` must be an http(s) URL with a host
    /// - `base_url` must not end with `/` (paths are appended verbatim)
    /// - `title` must not be empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.base_url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::BASE_URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::BASE_URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::BASE_URL,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }

        if self.base_url.ends_with('/') {
            diag.error_with_hint(
                Self::BASE_URL,
                "trailing slash would double up in canonical URLs",
                format!("use \"{}\"", self.base_url.trim_end_matches('/')),
            );
        }

        if self.title.trim().is_empty() {
            diag.error(Self::TITLE, "site title must not be empty");
        }
    }
}
