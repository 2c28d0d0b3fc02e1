//! `[organization]` section: business identity embedded in JSON-LD.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Postal address of the business (`schema.org/PostalAddress`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressConfig {
    pub street_address: Option<String>,
    pub locality: String,
    pub region: String,
    pub postal_code: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

impl Default for AddressConfig {
    fn default() -> Self {
        Self {
            street_address: None,
            locality: "Johannesburg".into(),
            region: "Gauteng".into(),
            postal_code: None,
            country: "ZA".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    pub name: String,
    pub telephone: String,
    pub email: String,
    /// Absolute URL of the logo used for article publishers.
    pub logo: String,
    /// Social profile links (`sameAs`).
    pub same_as: Vec<String>,
    /// Site search URL template; `{search_term_string}` is the query slot.
    pub search_target: String,
    /// `areaServed` of the contact point.
    pub area_served: String,
    /// `availableLanguage` of the contact point.
    pub available_language: String,
    pub contact_type: String,
    pub address: AddressConfig,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            name: "RealNet Web Solutions".into(),
            telephone: "+27-71-234-5678".into(),
            email: "info@realnet-web.co.za".into(),
            logo: "https://realnet-web.co.za/logo.png".into(),
            same_as: vec![
                "https://www.facebook.com/realnetweb".into(),
                "https://www.linkedin.com/company/realnet-web".into(),
                "https://www.instagram.com/realnetweb".into(),
                "https://x.com/realnetweb".into(),
            ],
            search_target: "https://realnet-web.co.za/search?q={search_term_string}".into(),
            area_served: "ZA".into(),
            available_language: "en".into(),
            contact_type: "customer service".into(),
            address: AddressConfig::default(),
        }
    }
}

impl OrganizationConfig {
    const SEARCH_TARGET: FieldPath = FieldPath::new("organization.search_target");
    const SAME_AS: FieldPath = FieldPath::new("organization.same_as");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.search_target.contains("{search_term_string}") {
            diag.error_with_hint(
                Self::SEARCH_TARGET,
                "search target has no query placeholder",
                "include {search_term_string}, e.g.: \"https://example.com/search?q={search_term_string}\"",
            );
        }

        for link in &self.same_as {
            if url::Url::parse(link).is_err() {
                diag.error(Self::SAME_AS, format!("'{link}' is not an absolute URL"));
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
        assert_eq!(config.organization.address.country, "ZA");
        assert_eq!(config.organization.same_as.len(), 4);
        assert_eq!(config.organization.area_served, "ZA");
    }

    #[test]
    fn test_nested_address_override() {
        let config = test_parse_config("[organization.address]\nlocality = \"Pretoria\"");
        assert_eq!(config.organization.address.locality, "Pretoria");
        assert_eq!(config.organization.address.region, "Gauteng");
    }

    #[test]
    fn test_validate_rejects_relative_social_link() {
        let mut diag = ConfigDiagnostics::new();
        let org = OrganizationConfig {
            same_as: vec!["facebook.com/realnetweb".into()],
            ..Default::default()
        };
        org.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "organization.same_as");
    }

    #[test]
    fn test_validate_requires_search_placeholder() {
        let mut diag = ConfigDiagnostics::new();
        let org = OrganizationConfig {
            search_target: "https://realnet-web.co.za/search".into(),
            ..Default::default()
        };
        org.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
