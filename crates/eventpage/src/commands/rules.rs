//! Rules command - show the anchor contract

use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use eventpage_core::template::{ANCHOR_SET_VERSION, RuleTable};
use serde_json::json;

pub fn run(json: bool) -> Result<()> {
    let table = RuleTable::production();

    if json {
        let rules: Vec<_> = table
            .iter()
            .map(|rule| {
                json!({
                    "ruleId": rule.id,
                    "required": rule.required,
                    "anchor": rule.anchor,
                })
            })
            .collect();
        return print_json(&json!({
            "version": ANCHOR_SET_VERSION,
            "rules": rules,
        }));
    }

    println!("{} Anchor set {}", "→".cyan(), ANCHOR_SET_VERSION);
    for rule in table.iter() {
        let required = if rule.required { "required" } else { "optional" };
        println!("  {:<18} {:<9} {}", rule.id.to_string(), required, rule.anchor);
    }

    Ok(())
}
