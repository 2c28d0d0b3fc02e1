//! Composer inputs as pages and content adapters construct them.
//!
//! Every field is optional; `MetadataComposer` fills gaps from
//! [`SiteDefaults`](crate::config::SiteDefaults). Field names follow the
//! camelCase keys page data files use. Text fields accept any JSON value:
//! `null` counts as absent and non-string values keep their JSON text.

use crate::utils::de::lenient_string;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

// ============================================================================
// Page metadata input
// ============================================================================

/// Open Graph page type.
///
/// Unrecognized type strings resolve to `Website`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PageKind {
    #[default]
    Website,
    Article,
}

impl From<String> for PageKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "article" => Self::Article,
            _ => Self::Website,
        }
    }
}

/// Descriptive fields of a single page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageSeoInput {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    /// Free text, emitted as-is.
    #[serde(deserialize_with = "lenient_string")]
    pub keywords: Option<String>,
    /// Site-relative path, e.g. `/about-us`; empty or absent means the root.
    #[serde(deserialize_with = "lenient_string")]
    pub path: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub published_time: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub modified_time: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub author: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<PageKind>,
    pub noindex: Option<bool>,
}

impl PageSeoInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn kind(mut self, kind: PageKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn noindex(mut self, noindex: bool) -> Self {
        self.noindex = Some(noindex);
        self
    }
}

// ============================================================================
// Structured data input
// ============================================================================

/// schema.org type of the JSON-LD record.
///
/// Values outside the known set are kept verbatim as `Other` and get the
/// generic SearchAction treatment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SchemaType {
    #[default]
    WebSite,
    Service,
    Article,
    Other(String),
}

impl SchemaType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::WebSite => "WebSite",
            Self::Service => "Service",
            Self::Article => "Article",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for SchemaType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "WebSite" => Self::WebSite,
            "Service" => Self::Service,
            "Article" => Self::Article,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for SchemaType {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchemaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Fields describing the entity a page's JSON-LD block is about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StructuredDataInput {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub published_date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub modified_date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub author: Option<String>,
    /// Raw tags in any shape `normalize_tags` accepts.
    pub tags: Value,
}
