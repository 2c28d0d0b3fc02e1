//! Input file loading for the composer commands.

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read a JSON or TOML input file, chosen by extension.
pub fn read_input<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display())),
        Some("toml") => {
            toml::from_str(&content).with_context(|| format!("Invalid TOML in {}", path.display()))
        }
        _ => bail!(
            "Unsupported input format: {} (expected .json or .toml)",
            path.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::{PageKind, PageSeoInput};

    #[test]
    fn test_read_json_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        fs::write(&path, r#"{"title": "Services", "type": "article"}"#).unwrap();

        let input: PageSeoInput = read_input(&path).unwrap();
        assert_eq!(input.title.as_deref(), Some("Services"));
        assert_eq!(input.kind, Some(PageKind::Article));
    }

    #[test]
    fn test_read_toml_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.toml");
        fs::write(&path, "title = \"Contact Us\"\npath = \"/contact-us\"\nnoindex = false").unwrap();

        let input: PageSeoInput = read_input(&path).unwrap();
        assert_eq!(input.path.as_deref(), Some("/contact-us"));
        assert_eq!(input.noindex, Some(false));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.yaml");
        fs::write(&path, "title: x").unwrap();

        let err = read_input::<PageSeoInput>(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported input format"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_input::<PageSeoInput>(Path::new("/nonexistent/page.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
