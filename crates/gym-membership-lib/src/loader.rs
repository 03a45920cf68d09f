use crate::catalog::Catalog;
use crate::data_structures::CatalogEntry;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    plans: Vec<CatalogEntry>,
    #[serde(default)]
    features: Vec<CatalogEntry>,
}

pub struct CatalogLoader;

impl CatalogLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Catalog> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to open file: {}", path.as_ref().display()))?;

        let catalog = self
            .parse(&content)
            .with_context(|| format!("Invalid catalog file: {}", path.as_ref().display()))?;

        tracing::info!(
            path = %path.as_ref().display(),
            plans = catalog.plans().len(),
            features = catalog.features().len(),
            "loaded catalog"
        );

        Ok(catalog)
    }

    pub fn parse(&self, content: &str) -> Result<Catalog> {
        let file: CatalogFile = serde_json::from_str(content).context("Failed to parse JSON")?;

        Catalog::new(file.plans, file.features)
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_valid_catalog() {
        let loader = CatalogLoader::new();
        let content = r#"{"plans": [{"name": "Day Pass", "cost": 12.5}], "features": [{"name": "Sauna", "cost": 8, "available": false}]}"#;

        let catalog = loader.parse(content).unwrap();
        assert_eq!(catalog.plan_names(), vec!["Day Pass"]);
        assert_eq!(catalog.lookup_plan("Day Pass").unwrap().cost(), 12.5);
        assert!(!catalog.lookup_feature("Sauna").unwrap().is_available());
    }

    #[test]
    fn test_features_are_optional() {
        let loader = CatalogLoader::new();
        let catalog = loader.parse(r#"{"plans": []}"#).unwrap();
        assert!(catalog.feature_names().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let loader = CatalogLoader::new();
        let mut temp_file = NamedTempFile::new().unwrap();

        let content = r#"{
  "plans": [
    {"name": "Basic", "cost": 50, "available": true},
    {"name": "Premium", "cost": 100, "available": true}
  ],
  "features": [
    {"name": "Exclusive Lounge", "cost": 75, "available": true}
  ]
}"#;

        temp_file.write_all(content.as_bytes()).unwrap();

        let catalog = loader.load_from_file(temp_file.path()).unwrap();
        assert_eq!(catalog.plan_names(), vec!["Basic", "Premium"]);
        assert_eq!(catalog.feature_names(), vec!["Exclusive Lounge"]);
    }

    #[test]
    fn test_missing_file() {
        let loader = CatalogLoader::new();
        assert!(loader.load_from_file("/nonexistent/catalog.json").is_err());
    }

    #[test]
    fn test_invalid_json() {
        let loader = CatalogLoader::new();
        assert!(loader.parse(r#"{"plans": "#).is_err());
    }

    #[test]
    fn test_negative_cost_rejected() {
        let loader = CatalogLoader::new();
        let content = r#"{"plans": [{"name": "Refund", "cost": -5}]}"#;
        assert!(loader.parse(content).is_err());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let loader = CatalogLoader::new();
        let content = r#"{"plans": [], "features": [{"name": "Sauna", "cost": 5}, {"name": "Sauna", "cost": 6}]}"#;

        let err = loader.parse(content).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }
}
