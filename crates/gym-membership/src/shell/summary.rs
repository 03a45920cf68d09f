use crossterm::style::{Color, Stylize};
use gym_membership_pricing::prelude::*;
use std::fmt::Display;

/// Applies a foreground colour when the shell writes to a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint<T: Display>(&self, text: T, color: Color) -> String {
        if self.enabled {
            text.to_string().with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error<T: Display>(&self, text: T) -> String {
        self.paint(text, Color::Red)
    }

    pub fn success<T: Display>(&self, text: T) -> String {
        self.paint(text, Color::Green)
    }

    pub fn heading<T: Display>(&self, text: T) -> String {
        self.paint(text, Color::Cyan)
    }
}

pub fn menu_lines(palette: &Palette) -> Vec<String> {
    vec![
        String::new(),
        palette.heading("--- MENU ---"),
        "1. Select membership plan".to_string(),
        "2. Add additional feature".to_string(),
        "3. Set number of members".to_string(),
        "4. Calculate total cost".to_string(),
        "5. Exit".to_string(),
    ]
}

pub fn breakdown_lines(
    palette: &Palette,
    rules: &PricingRules,
    plan: &SelectedPlan,
    members_count: u32,
    breakdown: &CostBreakdown,
) -> Vec<String> {
    let mut lines = vec![
        palette.heading("--- QUOTE ---"),
        format!("Plan:              {} (${:.2})", plan.name(), breakdown.base_cost()),
        format!("Features:          ${:.2}", breakdown.features_cost()),
        format!("Subtotal:          ${:.2}", breakdown.subtotal()),
    ];

    if breakdown.special_offer_discount() > 0.0 {
        lines.push(format!(
            "Special offer:    -${:.2}",
            breakdown.special_offer_discount()
        ));
    }
    if breakdown.premium_surcharge() {
        let percent = (rules.premium_surcharge_factor - 1.0) * 100.0;
        lines.push(format!("Premium surcharge: +{}%", percent_label(percent)));
    }
    if breakdown.group_discount() {
        let percent = (1.0 - rules.group_discount_factor) * 100.0;
        lines.push(format!(
            "Group discount:    -{}% ({} members)",
            percent_label(percent),
            members_count
        ));
    }

    lines.push(palette.paint(format!("TOTAL = {:.2}", breakdown.total()), Color::Yellow));
    lines
}

/// Whole percentages print without decimals, anything else with two.
fn percent_label(percent: f64) -> String {
    if (percent - percent.round()).abs() < 1e-9 {
        format!("{:.0}", percent)
    } else {
        format!("{:.2}", percent)
    }
}
