//! Permissive field deserializers for externally supplied page data.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field, treating `null` as the type's default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Deserialize an optional text field from any JSON value.
///
/// `null` is absent, strings are kept as-is and every other value keeps its
/// JSON text (`42` becomes `"42"`).
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// [`lenient_string`] with `null` mapped to an empty string.
pub fn lenient_string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Fields {
        #[serde(deserialize_with = "null_as_default")]
        flag: bool,
        #[serde(deserialize_with = "lenient_string")]
        text: Option<String>,
        #[serde(deserialize_with = "lenient_string_or_default")]
        slug: String,
    }

    #[test]
    fn test_nulls_become_defaults() {
        let fields: Fields =
            serde_json::from_value(json!({"flag": null, "text": null, "slug": null})).unwrap();
        assert!(!fields.flag);
        assert_eq!(fields.text, None);
        assert_eq!(fields.slug, "");
    }

    #[test]
    fn test_scalars_keep_json_text() {
        let fields: Fields =
            serde_json::from_value(json!({"text": 42, "slug": true})).unwrap();
        assert_eq!(fields.text.as_deref(), Some("42"));
        assert_eq!(fields.slug, "true");

        let fields: Fields = serde_json::from_value(json!({"text": ["a"]})).unwrap();
        assert_eq!(fields.text.as_deref(), Some(r#"["a"]"#));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let fields: Fields = serde_json::from_value(json!({})).unwrap();
        assert!(fields.text.is_none());
        assert!(fields.slug.is_empty());
    }

    #[test]
    fn test_toml_strings() {
        let fields: Fields = toml::from_str("text = \"About\"\nflag = true").unwrap();
        assert_eq!(fields.text.as_deref(), Some("About"));
        assert!(fields.flag);
    }
}
