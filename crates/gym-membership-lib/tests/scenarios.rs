use gym_membership_pricing::{Catalog, CatalogEntry, MembershipManager, NO_PLAN_TOTAL};
use std::sync::Arc;

fn standard_manager() -> MembershipManager {
    MembershipManager::default()
}

#[test]
fn basic_plan_only() {
    let mut manager = standard_manager();
    assert!(manager.select_plan("Basic"));
    assert_eq!(manager.calculate_total(), 50.0);
}

#[test]
fn training_feature_adds_premium_surcharge() {
    let mut manager = standard_manager();
    manager.select_plan("Basic");
    assert!(manager.add_feature("Personal Training"));
    assert_eq!(manager.calculate_total(), 115.0);
}

#[test]
fn group_discount_without_surcharge() {
    let mut manager = standard_manager();
    manager.select_plan("Basic");
    manager.add_feature("Group Classes");
    assert!(manager.set_members_count(2));
    assert_eq!(manager.calculate_total(), 72.0);
}

#[test]
fn surcharge_below_discount_tiers() {
    let mut manager = standard_manager();
    manager.select_plan("Premium");
    manager.add_feature("Personal Training");
    manager.add_feature("Nutritionist");

    let breakdown = manager.cost_breakdown().unwrap();
    assert_eq!(breakdown.subtotal(), 190.0);
    assert_eq!(breakdown.special_offer_discount(), 0.0);
    assert_eq!(manager.calculate_total(), 218.5);
}

#[test]
fn top_discount_tier_then_surcharge() {
    let mut features: Vec<CatalogEntry> = Catalog::standard().features().to_vec();
    features.push(CatalogEntry::new("Extra Feature", 200.0, true));
    let catalog = Catalog::new(Catalog::standard().plans().to_vec(), features).unwrap();
    let mut manager = MembershipManager::new(Arc::new(catalog));

    manager.select_plan("Family");
    for name in ["Personal Training", "Group Classes", "Nutritionist", "Extra Feature"] {
        assert!(manager.add_feature(name));
    }

    let breakdown = manager.cost_breakdown().unwrap();
    assert_eq!(breakdown.subtotal(), 470.0);
    assert_eq!(breakdown.special_offer_discount(), 50.0);
    assert!(breakdown.premium_surcharge());
    assert_eq!(manager.calculate_total(), 483.0);
}

#[test]
fn total_without_plan_is_sentinel() {
    let mut manager = standard_manager();
    manager.add_feature("Nutritionist");
    assert!(manager.cost_breakdown().is_none());
    assert_eq!(manager.calculate_total(), NO_PLAN_TOTAL);
}

#[test]
fn every_available_plan_is_selectable_at_catalog_cost() {
    let catalog = Catalog::standard();
    for entry in catalog.plans() {
        let mut manager = standard_manager();
        assert!(manager.select_plan(entry.name()));
        assert_eq!(manager.selected_plan().unwrap().cost(), entry.cost());
    }
}

#[test]
fn adding_features_never_lowers_subtotal() {
    let mut manager = standard_manager();
    manager.select_plan("Premium");
    let mut previous = manager.cost_breakdown().unwrap().subtotal();

    let names: Vec<String> = manager.feature_names().iter().map(|s| s.to_string()).collect();
    for name in &names {
        manager.add_feature(name);
        let subtotal = manager.cost_breakdown().unwrap().subtotal();
        assert!(subtotal >= previous);
        previous = subtotal;
    }
}

#[test]
fn middle_discount_tier() {
    let mut manager = standard_manager();
    manager.select_plan("Premium");
    manager.add_feature("Personal Training");
    manager.add_feature("Nutritionist");
    manager.add_feature("Group Classes");

    // 220 - 20, then the training surcharge
    assert_eq!(manager.calculate_total(), 230.0);
}
