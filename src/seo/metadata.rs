//! Per-page SEO metadata: title, description, canonical URL, Open Graph,
//! Twitter card and robots directives.
//!
//! The record serializes to the camelCase shape a page's head-tag layer
//! consumes (`metadataBase`, `alternates.canonical`, `openGraph`, ...).
//! `authors` and `publisher` exist only on [`SeoMetadata::Article`].

use super::{MetadataComposer, PageKind, PageSeoInput};
use serde::Serialize;

/// Open Graph image dimensions, sized for large link previews.
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

const TWITTER_CARD: &str = "summary_large_image";

// ============================================================================
// Output records
// ============================================================================

/// Composed metadata for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeoMetadata {
    Website(PageMetadata),
    Article {
        #[serde(flatten)]
        page: PageMetadata,
        authors: Vec<String>,
        publisher: String,
    },
}

impl SeoMetadata {
    /// Fields shared by every page type.
    pub fn page(&self) -> &PageMetadata {
        match self {
            Self::Website(page) | Self::Article { page, .. } => page,
        }
    }

    pub fn authors(&self) -> Option<&[String]> {
        match self {
            Self::Website(_) => None,
            Self::Article { authors, .. } => Some(authors),
        }
    }

    pub fn publisher(&self) -> Option<&str> {
        match self {
            Self::Website(_) => None,
            Self::Article { publisher, .. } => Some(publisher),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    pub metadata_base: String,
    pub alternates: Alternates,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternates {
    pub canonical: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub images: Vec<OgImage>,
    pub locale: String,
    #[serde(flatten)]
    pub kind: OgKind,
}

/// `og:type` plus the fields only articles carry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OgKind {
    Website,
    Article {
        #[serde(rename = "publishedTime", skip_serializing_if = "Option::is_none")]
        published_time: Option<String>,
        #[serde(rename = "modifiedTime", skip_serializing_if = "Option::is_none")]
        modified_time: Option<String>,
    },
}

impl OgKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article { .. } => "article",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub creator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    #[serde(rename = "googleBot")]
    pub google_bot: GoogleBot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    #[serde(rename = "max-video-preview")]
    pub max_video_preview: i32,
    #[serde(rename = "max-image-preview")]
    pub max_image_preview: &'static str,
    #[serde(rename = "max-snippet")]
    pub max_snippet: i32,
}

impl Robots {
    /// One flag drives top-level and googleBot directives alike.
    pub const fn new(noindex: bool) -> Self {
        let allow = !noindex;
        Self {
            index: allow,
            follow: allow,
            google_bot: GoogleBot {
                index: allow,
                follow: allow,
                max_video_preview: -1,
                max_image_preview: "large",
                max_snippet: -1,
            },
        }
    }
}

// ============================================================================
// Composition
// ============================================================================

impl MetadataComposer<'_> {
    /// Compose the metadata record for one page.
    ///
    /// Absent input fields fall back to the site defaults. Content is not
    /// validated; paths and image URLs are used verbatim.
    pub fn compose_seo_metadata(&self, input: &PageSeoInput) -> SeoMetadata {
        let site = &self.config().site;

        let title = input.title.as_deref().unwrap_or(&site.title);
        let description = input.description.as_deref().unwrap_or(&site.description);
        let image = input.image.as_deref().unwrap_or(&site.image);
        let author = input.author.as_deref().unwrap_or(&site.author);
        let canonical = self.canonical_url(input.path.as_deref().unwrap_or_default());
        let kind = input.kind.unwrap_or_default();

        let og_kind = match kind {
            PageKind::Website => OgKind::Website,
            PageKind::Article => OgKind::Article {
                published_time: input.published_time.clone(),
                modified_time: input.modified_time.clone(),
            },
        };

        let page = PageMetadata {
            title: title.to_owned(),
            description: description.to_owned(),
            keywords: input.keywords.clone(),
            metadata_base: site.base_url.clone(),
            alternates: Alternates {
                canonical: canonical.clone(),
            },
            open_graph: OpenGraph {
                title: title.to_owned(),
                description: description.to_owned(),
                url: canonical,
                site_name: site.site_name.clone(),
                images: vec![OgImage {
                    url: image.to_owned(),
                    width: OG_IMAGE_WIDTH,
                    height: OG_IMAGE_HEIGHT,
                    alt: title.to_owned(),
                }],
                locale: site.locale.clone(),
                kind: og_kind,
            },
            twitter: TwitterCard {
                card: TWITTER_CARD,
                title: title.to_owned(),
                description: description.to_owned(),
                images: vec![image.to_owned()],
                creator: site.twitter_creator.clone(),
            },
            robots: Robots::new(input.noindex.unwrap_or(false)),
        };

        match kind {
            PageKind::Website => SeoMetadata::Website(page),
            PageKind::Article => SeoMetadata::Article {
                page,
                authors: vec![author.to_owned()],
                publisher: self.config().organization.name.clone(),
            },
        }
    }
}
