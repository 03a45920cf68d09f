use serde::{Deserialize, Serialize};

fn default_available() -> bool {
    true
}

/// A priced item in either the plan or the feature catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    name: String,
    cost: f64,
    #[serde(default = "default_available")]
    available: bool,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, cost: f64, available: bool) -> Self {
        Self {
            name: name.into(),
            cost,
            available,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn is_available(&self) -> bool {
        self.available
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedPlan {
    name: String,
    cost: f64,
}

impl SelectedPlan {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl From<&CatalogEntry> for SelectedPlan {
    fn from(entry: &CatalogEntry) -> Self {
        Self::new(entry.name(), entry.cost())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddedFeature {
    name: String,
    cost: f64,
}

impl AddedFeature {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl From<&CatalogEntry> for AddedFeature {
    fn from(entry: &CatalogEntry) -> Self {
        Self::new(entry.name(), entry.cost())
    }
}

/// Every intermediate value of one pass through the pricing pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    base_cost: f64,
    features_cost: f64,
    subtotal: f64,
    special_offer_discount: f64,
    premium_surcharge: bool,
    group_discount: bool,
    total: f64,
}

impl CostBreakdown {
    pub fn new(
        base_cost: f64,
        features_cost: f64,
        special_offer_discount: f64,
        premium_surcharge: bool,
        group_discount: bool,
        total: f64,
    ) -> Self {
        Self {
            base_cost,
            features_cost,
            subtotal: base_cost + features_cost,
            special_offer_discount,
            premium_surcharge,
            group_discount,
            total,
        }
    }

    pub fn base_cost(&self) -> f64 {
        self.base_cost
    }

    pub fn features_cost(&self) -> f64 {
        self.features_cost
    }

    /// Plan plus features, before any discount or surcharge.
    pub fn subtotal(&self) -> f64 {
        self.subtotal
    }

    pub fn special_offer_discount(&self) -> f64 {
        self.special_offer_discount
    }

    pub fn premium_surcharge(&self) -> bool {
        self.premium_surcharge
    }

    pub fn group_discount(&self) -> bool {
        self.group_discount
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}
