use crate::calculator::{Calculator, PricingRules};
use crate::catalog::Catalog;
use crate::data_structures::{AddedFeature, CostBreakdown, SelectedPlan};
use crate::error::SelectionError;
use std::sync::Arc;

/// Returned by [`MembershipManager::calculate_total`] when no plan is selected.
pub const NO_PLAN_TOTAL: f64 = -1.0;

/// One quoting session: the selected plan, added features and member count.
///
/// Mutations either succeed completely or leave the session untouched.
pub struct MembershipManager {
    catalog: Arc<Catalog>,
    calculator: Calculator,
    selected_plan: Option<SelectedPlan>,
    features: Vec<AddedFeature>,
    members_count: u32,
}

impl MembershipManager {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_rules(catalog, PricingRules::default())
    }

    pub fn with_rules(catalog: Arc<Catalog>, rules: PricingRules) -> Self {
        Self {
            catalog,
            calculator: Calculator::with_rules(rules),
            selected_plan: None,
            features: Vec::new(),
            members_count: 1,
        }
    }

    pub fn select_plan(&mut self, name: &str) -> bool {
        report(self.try_select_plan(name))
    }

    pub fn clear_plan(&mut self) {
        if let Some(plan) = self.selected_plan.take() {
            tracing::debug!(plan = plan.name(), "plan cleared");
        }
    }

    pub fn set_members_count(&mut self, count: i64) -> bool {
        report(self.try_set_members_count(count))
    }

    pub fn add_feature(&mut self, name: &str) -> bool {
        report(self.try_add_feature(name))
    }

    pub fn remove_feature(&mut self, name: &str) -> bool {
        report(self.try_remove_feature(name))
    }

    fn try_select_plan(&mut self, name: &str) -> Result<(), SelectionError> {
        let entry = self
            .catalog
            .lookup_plan(name)
            .ok_or_else(|| SelectionError::PlanNotFound(name.to_string()))?;

        if !entry.is_available() {
            return Err(SelectionError::PlanUnavailable(name.to_string()));
        }

        tracing::debug!(plan = name, cost = entry.cost(), "plan selected");
        self.selected_plan = Some(SelectedPlan::from(entry));
        Ok(())
    }

    fn try_set_members_count(&mut self, count: i64) -> Result<(), SelectionError> {
        let members =
            u32::try_from(count).map_err(|_| SelectionError::InvalidMemberCount(count))?;
        if members < 1 {
            return Err(SelectionError::InvalidMemberCount(count));
        }

        tracing::debug!(members, "member count updated");
        self.members_count = members;
        Ok(())
    }

    fn try_add_feature(&mut self, name: &str) -> Result<(), SelectionError> {
        let entry = self
            .catalog
            .lookup_feature(name)
            .ok_or_else(|| SelectionError::FeatureNotFound(name.to_string()))?;

        if !entry.is_available() {
            return Err(SelectionError::FeatureUnavailable(name.to_string()));
        }

        if self.features.iter().any(|feature| feature.name() == name) {
            return Err(SelectionError::DuplicateFeature(name.to_string()));
        }

        tracing::debug!(feature = name, cost = entry.cost(), "feature added");
        self.features.push(AddedFeature::from(entry));
        Ok(())
    }

    fn try_remove_feature(&mut self, name: &str) -> Result<(), SelectionError> {
        let index = self
            .features
            .iter()
            .position(|feature| feature.name() == name)
            .ok_or_else(|| SelectionError::FeatureNotAdded(name.to_string()))?;

        tracing::debug!(feature = name, "feature removed");
        self.features.remove(index);
        Ok(())
    }

    pub fn plan_names(&self) -> Vec<&str> {
        self.catalog.plan_names()
    }

    pub fn feature_names(&self) -> Vec<&str> {
        self.catalog.feature_names()
    }

    pub fn selected_plan(&self) -> Option<&SelectedPlan> {
        self.selected_plan.as_ref()
    }

    pub fn features(&self) -> &[AddedFeature] {
        &self.features
    }

    pub fn members_count(&self) -> u32 {
        self.members_count
    }

    pub fn rules(&self) -> &PricingRules {
        self.calculator.rules()
    }

    pub fn has_premium_feature(&self) -> bool {
        self.calculator.has_premium(&self.features)
    }

    pub fn cost_breakdown(&self) -> Option<CostBreakdown> {
        self.selected_plan
            .as_ref()
            .map(|plan| {
                self.calculator
                    .calculate(plan, &self.features, self.members_count)
            })
    }

    /// Final rounded price, or [`NO_PLAN_TOTAL`] when no plan is selected.
    pub fn calculate_total(&self) -> f64 {
        self.cost_breakdown()
            .map(|breakdown| breakdown.total())
            .unwrap_or(NO_PLAN_TOTAL)
    }
}

impl Default for MembershipManager {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::standard()))
    }
}

fn report(result: Result<(), SelectionError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(reason = %e, "selection rejected");
            false
        }
    }
}
