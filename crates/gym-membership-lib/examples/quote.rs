use gym_membership_pricing::prelude::*;
use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let catalog = if args.len() >= 2 {
        println!("Loading catalog from: {}", args[1]);
        CatalogLoader::new().load_from_file(&args[1])?
    } else {
        Catalog::standard()
    };

    let mut manager = MembershipManager::new(catalog.into());

    let plan = catalog_first(&manager.plan_names());
    if !manager.select_plan(&plan) {
        eprintln!("Plan '{}' cannot be selected", plan);
        std::process::exit(1);
    }

    let features: Vec<String> = manager.feature_names().iter().map(|s| s.to_string()).collect();
    for feature in &features {
        if !manager.add_feature(feature) {
            println!("Skipping unavailable feature: {}", feature);
        }
    }
    manager.set_members_count(2);

    if let Some(breakdown) = manager.cost_breakdown() {
        println!("Plan:               {}", plan);
        println!("Features:           {}", features.join(", "));
        println!("Members:            {}", manager.members_count());
        println!("Subtotal:           ${:.2}", breakdown.subtotal());
        println!("Special offer:     -${:.2}", breakdown.special_offer_discount());
        println!("Premium surcharge:  {}", breakdown.premium_surcharge());
        println!("Group discount:     {}", breakdown.group_discount());
        println!("Total:              ${:.2}", breakdown.total());
    }

    Ok(())
}

fn catalog_first(names: &[&str]) -> String {
    names.first().map(|s| s.to_string()).unwrap_or_default()
}
