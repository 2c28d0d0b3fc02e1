//! Blog content adapter.
//!
//! Maps content API payloads onto composer inputs and sitemap entries.
//! Fetching is the caller's job; this module only sees the decoded
//! responses, or the error a failed fetch produced.

use crate::{
    debug, log,
    seo::{
        ChangeFrequency, MetadataComposer, PageKind, PageSeoInput, SchemaType, SitemapEntry,
        SitemapOptions, StructuredDataInput, normalize_tags,
    },
    utils::{
        date::DateTimeUtc,
        de::{lenient_string, lenient_string_or_default, null_as_default},
    },
};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

const NOT_FOUND_TITLE: &str = "Blog Post Not Found";
const NOT_FOUND_DESCRIPTION: &str = "The blog post you are looking for does not exist or has been removed.";

const POST_PRIORITY: f32 = 0.6;

/// One post as returned by the content API.
///
/// Every field tolerates `null` or a missing key, so one incomplete post
/// cannot fail a whole listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    #[serde(deserialize_with = "lenient_string_or_default")]
    pub slug: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub image: Option<String>,
    /// Any of the shapes `normalize_tags` accepts.
    pub tags: Value,
    #[serde(deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub author: Option<String>,
}

/// `GET /posts` payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PostsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub posts: Vec<BlogPost>,
}

/// `GET /posts/{slug}` payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PostResponse {
    pub post: Option<BlogPost>,
}

impl BlogPost {
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    /// Article metadata input for the post page.
    pub fn seo_input(&self) -> PageSeoInput {
        let tags = normalize_tags(&self.tags);
        PageSeoInput {
            title: self.title.clone(),
            description: self.excerpt.clone(),
            keywords: (!tags.is_empty()).then(|| tags.join(", ")),
            path: Some(self.path()),
            image: self.image.clone(),
            published_time: self.created_at.clone(),
            modified_time: self.updated_at.clone(),
            author: self.author.clone(),
            kind: Some(PageKind::Article),
            noindex: None,
        }
    }

    /// `Article` JSON-LD input; `base_url` makes the post URL absolute.
    pub fn structured_input(&self, base_url: &str) -> StructuredDataInput {
        StructuredDataInput {
            schema_type: SchemaType::Article,
            title: self.title.clone(),
            description: self.excerpt.clone(),
            url: Some(format!("{base_url}{}", self.path())),
            image: self.image.clone(),
            published_date: self.created_at.clone(),
            modified_date: self.updated_at.clone(),
            author: self.author.clone(),
            tags: self.tags.clone(),
        }
    }

    /// Most recent parseable timestamp, preferring `updated_at`.
    pub fn last_modified(&self) -> Option<DateTimeUtc> {
        [&self.updated_at, &self.created_at]
            .into_iter()
            .flatten()
            .find_map(|s| DateTimeUtc::parse(s))
    }
}

/// Metadata for a slug the content API does not know.
pub fn not_found_input() -> PageSeoInput {
    PageSeoInput::new()
        .title(NOT_FOUND_TITLE)
        .description(NOT_FOUND_DESCRIPTION)
        .noindex(true)
}

/// Metadata input for a post page, or the not-found input when the fetch
/// failed or returned no post.
pub fn post_seo_input<E: fmt::Display>(response: Result<PostResponse, E>) -> PageSeoInput {
    match response {
        Ok(PostResponse { post: Some(post) }) => post.seo_input(),
        Ok(PostResponse { post: None }) => {
            debug!("blog"; "response has no post, using not-found metadata");
            not_found_input()
        }
        Err(err) => {
            log!("blog"; "failed to load post: {err}");
            not_found_input()
        }
    }
}

/// Sitemap entries for every listed post.
///
/// An unsuccessful listing contributes nothing.
pub fn blog_sitemap_entries(
    composer: &MetadataComposer<'_>,
    response: &PostsResponse,
) -> Vec<SitemapEntry> {
    if !response.success {
        log!("blog"; "post listing unsuccessful, skipping blog entries");
        return Vec::new();
    }

    response
        .posts
        .iter()
        .filter(|post| {
            let has_slug = !post.slug.trim().is_empty();
            if !has_slug {
                debug!("blog"; "skipping post without slug");
            }
            has_slug
        })
        .map(|post| {
            let mut options = SitemapOptions::default()
                .change_frequency(ChangeFrequency::Weekly)
                .priority(POST_PRIORITY);
            options.last_modified = post.last_modified();
            composer.sitemap_entry(&post.path(), options)
        })
        .collect()
}
