pub mod calculator;
pub mod catalog;
pub mod data_structures;
pub mod error;
pub mod loader;
pub mod manager;

pub use calculator::{Calculator, PricingRules};
pub use catalog::Catalog;
pub use data_structures::{AddedFeature, CatalogEntry, CostBreakdown, SelectedPlan};
pub use error::SelectionError;
pub use loader::CatalogLoader;
pub use manager::{MembershipManager, NO_PLAN_TOTAL};

pub use anyhow::Result;

pub mod prelude {
    pub use crate::calculator::PricingRules;
    pub use crate::catalog::Catalog;
    pub use crate::data_structures::{CostBreakdown, SelectedPlan};
    pub use crate::loader::CatalogLoader;
    pub use crate::manager::{MembershipManager, NO_PLAN_TOTAL};
    pub use anyhow::Result;
}
