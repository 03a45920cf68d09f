use crate::data_structures::CatalogEntry;
use anyhow::{bail, Result};
use std::collections::HashSet;

/// Read-only lookup of plans and features, kept in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    plans: Vec<CatalogEntry>,
    features: Vec<CatalogEntry>,
}

impl Catalog {
    /// Rejects negative or non-finite costs and names listed twice in the
    /// same catalog.
    pub fn new(plans: Vec<CatalogEntry>, features: Vec<CatalogEntry>) -> Result<Self> {
        validate("plan", &plans)?;
        validate("feature", &features)?;
        Ok(Self { plans, features })
    }

    /// The gym's standard price list.
    pub fn standard() -> Self {
        let plans = vec![
            CatalogEntry::new("Basic", 50.0, true),
            CatalogEntry::new("Premium", 100.0, true),
            CatalogEntry::new("Family", 150.0, true),
        ];

        let features = vec![
            CatalogEntry::new("Personal Training", 50.0, true),
            CatalogEntry::new("Group Classes", 30.0, true),
            CatalogEntry::new("Nutritionist", 40.0, true),
        ];

        Self { plans, features }
    }

    pub fn lookup_plan(&self, name: &str) -> Option<&CatalogEntry> {
        self.plans.iter().find(|entry| entry.name() == name)
    }

    pub fn lookup_feature(&self, name: &str) -> Option<&CatalogEntry> {
        self.features.iter().find(|entry| entry.name() == name)
    }

    pub fn plan_names(&self) -> Vec<&str> {
        self.plans.iter().map(|entry| entry.name()).collect()
    }

    pub fn feature_names(&self) -> Vec<&str> {
        self.features.iter().map(|entry| entry.name()).collect()
    }

    pub fn plans(&self) -> &[CatalogEntry] {
        &self.plans
    }

    pub fn features(&self) -> &[CatalogEntry] {
        &self.features
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate(kind: &str, entries: &[CatalogEntry]) -> Result<()> {
    let mut seen = HashSet::new();

    for entry in entries {
        if !entry.cost().is_finite() || entry.cost() < 0.0 {
            bail!("{} '{}' has invalid cost {}", kind, entry.name(), entry.cost());
        }
        if !seen.insert(entry.name()) {
            bail!("{} '{}' is listed more than once", kind, entry.name());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_names_keep_catalog_order() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.plan_names(), vec!["Basic", "Premium", "Family"]);
        assert_eq!(
            catalog.feature_names(),
            vec!["Personal Training", "Group Classes", "Nutritionist"]
        );
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.lookup_plan("Family").unwrap().cost(), 150.0);
        assert!(catalog.lookup_plan("family").is_none());
        assert!(catalog.lookup_feature("Nutritionist ").is_none());
    }

    #[test]
    fn test_lookup_reports_unavailable_entries() {
        let catalog = Catalog::new(
            vec![CatalogEntry::new("Student", 30.0, false)],
            Vec::new(),
        )
        .unwrap();

        let entry = catalog.lookup_plan("Student").unwrap();
        assert!(!entry.is_available());
        assert_eq!(catalog.plan_names(), vec!["Student"]);
    }

    #[test]
    fn test_new_rejects_duplicate_names() {
        let result = Catalog::new(
            Vec::new(),
            vec![
                CatalogEntry::new("Sauna", 5.0, true),
                CatalogEntry::new("Sauna", 6.0, true),
            ],
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_new_rejects_invalid_costs() {
        let negative = Catalog::new(vec![CatalogEntry::new("Refund", -5.0, true)], Vec::new());
        assert!(negative.is_err());

        let infinite = Catalog::new(Vec::new(), vec![CatalogEntry::new("Spa", f64::INFINITY, true)]);
        assert!(infinite.is_err());
    }

    #[test]
    fn test_same_name_in_both_catalogs_is_allowed() {
        let catalog = Catalog::new(
            vec![CatalogEntry::new("Swim", 20.0, true)],
            vec![CatalogEntry::new("Swim", 10.0, true)],
        )
        .unwrap();
        assert_eq!(catalog.lookup_feature("Swim").unwrap().cost(), 10.0);
    }
}
