use crate::data_structures::{AddedFeature, CostBreakdown, SelectedPlan};

/// Spend thresholds, surcharge and group discount applied to every quote.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRules {
    /// Checked in order; only the first tier the subtotal exceeds applies.
    pub special_offers: Vec<(f64, f64)>,
    pub premium_keywords: Vec<String>,
    pub premium_surcharge_factor: f64,
    pub group_min_members: u32,
    pub group_discount_factor: f64,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            special_offers: vec![(400.0, 50.0), (200.0, 20.0)],
            premium_keywords: vec![
                "Training".to_string(),
                "Exclusive".to_string(),
                "Specialized".to_string(),
            ],
            premium_surcharge_factor: 1.15,
            group_min_members: 2,
            group_discount_factor: 0.9,
        }
    }
}

pub struct Calculator {
    rules: PricingRules,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_rules(PricingRules::default())
    }

    pub fn with_rules(rules: PricingRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    pub fn is_premium(&self, feature_name: &str) -> bool {
        let name = feature_name.to_lowercase();
        self.rules
            .premium_keywords
            .iter()
            .any(|keyword| name.contains(&keyword.to_lowercase()))
    }

    pub fn has_premium(&self, features: &[AddedFeature]) -> bool {
        features.iter().any(|feature| self.is_premium(feature.name()))
    }

    pub fn special_offer_discount(&self, subtotal: f64) -> f64 {
        self.rules
            .special_offers
            .iter()
            .find(|(threshold, _)| subtotal > *threshold)
            .map(|(_, discount)| *discount)
            .unwrap_or(0.0)
    }

    /// Runs the pipeline: special offer, premium surcharge, group discount,
    /// then rounding. The order changes results and must not be altered.
    pub fn calculate(
        &self,
        plan: &SelectedPlan,
        features: &[AddedFeature],
        members_count: u32,
    ) -> CostBreakdown {
        let base_cost = plan.cost();
        let features_cost: f64 = features.iter().map(|feature| feature.cost()).sum();
        let mut total = base_cost + features_cost;

        let discount = self.special_offer_discount(total);
        total -= discount;

        let premium = self.has_premium(features);
        if premium {
            total *= self.rules.premium_surcharge_factor;
        }

        let group = members_count >= self.rules.group_min_members;
        if group {
            total *= self.rules.group_discount_factor;
        }

        CostBreakdown::new(
            base_cost,
            features_cost,
            discount,
            premium,
            group,
            round_to_cents(total),
        )
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Two decimal places, ties to even on the exact binary value.
///
/// Must not scale by 100 first: `54.855 * 100.0` lands on 5485.5 although
/// the stored value is just below 54.855.
pub fn round_to_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
