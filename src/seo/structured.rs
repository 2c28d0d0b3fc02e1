//! JSON-LD structured data (schema.org vocabulary).
//!
//! Every record carries the organization's identity and contact details.
//! What follows depends on the schema type:
//!
//! | `@type`            | `potentialAction` | Extra fields                                  |
//! |--------------------|-------------------|-----------------------------------------------|
//! | `Article`          | SearchAction      | dates, author, publisher, keywords (if tags)  |
//! | `WebSite`/`Service`| ContactPoint      | -                                             |
//! | anything else      | SearchAction      | -                                             |

use super::{MetadataComposer, SchemaType, StructuredDataInput, normalize_tags};
use crate::config::OrganizationConfig;
use serde::Serialize;

const SCHEMA_CONTEXT: &str = "https://schema.org";
const SEARCH_QUERY_INPUT: &str = "required name=search_term_string";

// ============================================================================
// Output records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredDataRecord {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    pub name: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub telephone: String,
    pub email: String,
    pub address: PostalAddress,
    #[serde(rename = "sameAs")]
    pub same_as: Vec<String>,
    #[serde(flatten)]
    pub kind: SchemaKind,
}

/// Type-specific part of a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaKind {
    Article(ArticleSchema),
    Contact {
        #[serde(rename = "potentialAction")]
        potential_action: ContactPoint,
    },
    Generic {
        #[serde(rename = "potentialAction")]
        potential_action: SearchAction,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSchema {
    pub potential_action: SearchAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    pub author: Person,
    pub publisher: Organization,
    /// Tags joined with `", "`; absent when there are no tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    pub address_locality: String,
    pub address_region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub address_country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub struct SearchAction {
    pub target: String,
    #[serde(rename = "query-input")]
    pub query_input: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct ContactPoint {
    pub telephone: String,
    pub email: String,
    pub contact_type: String,
    pub area_served: String,
    pub available_language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub struct Person {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub struct Organization {
    pub name: String,
    pub logo: ImageObject,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub struct ImageObject {
    pub url: String,
}

impl StructuredDataRecord {
    pub fn potential_action_type(&self) -> &'static str {
        match self.kind {
            SchemaKind::Contact { .. } => "ContactPoint",
            SchemaKind::Article(_) | SchemaKind::Generic { .. } => "SearchAction",
        }
    }

    /// Serialize for embedding in a `<script type="application/ld+json">`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// ============================================================================
// Builders from organization config
// ============================================================================

impl From<&OrganizationConfig> for PostalAddress {
    fn from(org: &OrganizationConfig) -> Self {
        let address = &org.address;
        Self {
            street_address: address.street_address.clone(),
            address_locality: address.locality.clone(),
            address_region: address.region.clone(),
            postal_code: address.postal_code.clone(),
            address_country: address.country.clone(),
        }
    }
}

impl From<&OrganizationConfig> for SearchAction {
    fn from(org: &OrganizationConfig) -> Self {
        Self {
            target: org.search_target.clone(),
            query_input: SEARCH_QUERY_INPUT,
        }
    }
}

impl From<&OrganizationConfig> for ContactPoint {
    fn from(org: &OrganizationConfig) -> Self {
        Self {
            telephone: org.telephone.clone(),
            email: org.email.clone(),
            contact_type: org.contact_type.clone(),
            area_served: org.area_served.clone(),
            available_language: org.available_language.clone(),
        }
    }
}

impl From<&OrganizationConfig> for Organization {
    fn from(org: &OrganizationConfig) -> Self {
        Self {
            name: org.name.clone(),
            logo: ImageObject {
                url: org.logo.clone(),
            },
        }
    }
}

// ============================================================================
// Composition
// ============================================================================

impl MetadataComposer<'_> {
    /// Compose the JSON-LD record for a page.
    ///
    /// Dates are copied verbatim. Unknown schema types keep the generic
    /// SearchAction.
    pub fn compose_structured_data(&self, input: &StructuredDataInput) -> StructuredDataRecord {
        let site = &self.config().site;
        let org = &self.config().organization;

        let kind = match &input.schema_type {
            SchemaType::Article => {
                let tags = normalize_tags(&input.tags);
                SchemaKind::Article(ArticleSchema {
                    potential_action: SearchAction::from(org),
                    date_published: input.published_date.clone(),
                    date_modified: input.modified_date.clone(),
                    author: Person {
                        name: input.author.clone().unwrap_or_else(|| site.author.clone()),
                    },
                    publisher: Organization::from(org),
                    keywords: (!tags.is_empty()).then(|| tags.join(", ")),
                })
            }
            SchemaType::WebSite | SchemaType::Service => SchemaKind::Contact {
                potential_action: ContactPoint::from(org),
            },
            SchemaType::Other(_) => SchemaKind::Generic {
                potential_action: SearchAction::from(org),
            },
        };

        StructuredDataRecord {
            context: SCHEMA_CONTEXT,
            schema_type: input.schema_type.clone(),
            name: input.title.clone().unwrap_or_else(|| site.title.clone()),
            description: input
                .description
                .clone()
                .unwrap_or_else(|| site.description.clone()),
            url: input.url.clone().unwrap_or_else(|| site.base_url.clone()),
            image: input.image.clone().unwrap_or_else(|| site.image.clone()),
            telephone: org.telephone.clone(),
            email: org.email.clone(),
            address: PostalAddress::from(org),
            same_as: org.same_as.clone(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use serde_json::{Value, json};

    fn compose(input: &StructuredDataInput) -> Value {
        let config = SiteConfig::default();
        let record = MetadataComposer::new(&config).compose_structured_data(input);
        serde_json::to_value(record).unwrap()
    }

    fn article(tags: Value) -> StructuredDataInput {
        StructuredDataInput {
            schema_type: SchemaType::Article,
            title: Some("Why Your Business Needs a Website".into()),
            url: Some("https://realnet-web.co.za/blog/why-website".into()),
            published_date: Some("2024-06-15T08:00:00Z".into()),
            modified_date: Some("not-a-date".into()),
            author: Some("Jane Doe".into()),
            tags,
            ..Default::default()
        }
    }

    #[test]
    fn test_base_schema_always_present() {
        for schema_type in ["WebSite", "Service", "Article", "Thing"] {
            let value = compose(&StructuredDataInput {
                schema_type: schema_type.into(),
                ..Default::default()
            });
            assert_eq!(value["@context"], "https://schema.org");
            assert_eq!(value["@type"], schema_type);
            assert_eq!(value["telephone"], "+27-71-234-5678");
            assert_eq!(value["email"], "info@realnet-web.co.za");
            assert_eq!(value["address"]["@type"], "PostalAddress");
            assert_eq!(value["address"]["addressCountry"], "ZA");
            assert_eq!(value["sameAs"].as_array().unwrap().len(), 4);
        }
    }

    #[test]
    fn test_defaults_fill_missing_identity() {
        let value = compose(&StructuredDataInput::default());
        let site = SiteConfig::default().site;
        assert_eq!(value["name"], site.title);
        assert_eq!(value["url"], site.base_url);
        assert_eq!(value["image"], "/og-image.jpg");
    }

    #[test]
    fn test_website_and_service_use_contact_point() {
        for schema_type in [SchemaType::WebSite, SchemaType::Service] {
            let value = compose(&StructuredDataInput {
                schema_type,
                ..Default::default()
            });
            let action = &value["potentialAction"];
            assert_eq!(action["@type"], "ContactPoint");
            assert_eq!(action["areaServed"], "ZA");
            assert_eq!(action["availableLanguage"], "en");
            assert_eq!(action["telephone"], "+27-71-234-5678");
            assert!(action.get("target").is_none());
        }
    }

    #[test]
    fn test_unknown_type_keeps_search_action() {
        let value = compose(&StructuredDataInput {
            schema_type: "LocalBusiness".into(),
            ..Default::default()
        });
        assert_eq!(value["potentialAction"]["@type"], "SearchAction");
        assert_eq!(
            value["potentialAction"]["query-input"],
            "required name=search_term_string"
        );
        assert!(value.get("author").is_none());
    }

    #[test]
    fn test_article_fields() {
        let value = compose(&article(json!(["web", "seo"])));

        assert_eq!(value["potentialAction"]["@type"], "SearchAction");
        assert_eq!(value["datePublished"], "2024-06-15T08:00:00Z");
        // Dates are not validated
        assert_eq!(value["dateModified"], "not-a-date");
        assert_eq!(value["author"], json!({"@type": "Person", "name": "Jane Doe"}));
        assert_eq!(value["publisher"]["@type"], "Organization");
        assert_eq!(
            value["publisher"]["logo"],
            json!({"@type": "ImageObject", "url": "https://realnet-web.co.za/logo.png"})
        );
        assert_eq!(value["keywords"], "web, seo");
    }

    #[test]
    fn test_article_keywords_from_string_tags() {
        let value = compose(&article(json!(r#"["design","hosting"]"#)));
        assert_eq!(value["keywords"], "design, hosting");

        let value = compose(&article(json!("design , hosting")));
        assert_eq!(value["keywords"], "design, hosting");
    }

    #[test]
    fn test_article_without_tags_has_no_keywords() {
        for tags in [json!([]), Value::Null, json!(""), json!(7)] {
            let value = compose(&article(tags));
            assert!(value.get("keywords").is_none());
        }
    }

    #[test]
    fn test_article_default_author() {
        let value = compose(&StructuredDataInput {
            schema_type: SchemaType::Article,
            ..Default::default()
        });
        assert_eq!(value["author"]["name"], "Themba Real Lukhele");
        assert!(value.get("datePublished").is_none());
    }

    #[test]
    fn test_potential_action_type_helper() {
        let config = SiteConfig::default();
        let composer = MetadataComposer::new(&config);
        let record = composer.compose_structured_data(&StructuredDataInput::default());
        assert_eq!(record.potential_action_type(), "ContactPoint");
    }

    #[test]
    fn test_compose_is_deterministic() {
        let input = article(json!("a, b"));
        assert_eq!(compose(&input), compose(&input));
    }
}
