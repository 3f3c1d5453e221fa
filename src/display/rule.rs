//! Rule formatting for terminal output

use crate::models::{CategoryRule, Direction, RuleMode};

/// One-line description of a rule's mode and lists
pub fn describe_rule(rule: &CategoryRule) -> String {
    match rule.mode {
        RuleMode::All if rule.excluded.is_empty() => "all (everything selected)".to_string(),
        RuleMode::All => format!("all ({} excluded)", rule.excluded.len()),
        RuleMode::None => "none (nothing selected)".to_string(),
        RuleMode::Custom => format!("custom ({} included)", rule.included.len()),
    }
}

/// Checkbox view of a rule against the categories present in a payload
pub fn render_rule_list(rule: &CategoryRule, direction: Direction, available: &[String]) -> String {
    let checked = available.iter().filter(|name| rule.is_checked(name)).count();

    let mut output = String::new();
    output.push_str(&format!(
        "{} categories: {}, {} of {} selected\n",
        direction.label(),
        describe_rule(rule),
        checked,
        available.len(),
    ));

    for name in available {
        let mark = if rule.is_checked(name) { "x" } else { " " };
        output.push_str(&format!("  [{}] {}\n", mark, name));
    }

    output
}

/// Full dump of both lists for `rule show`
pub fn render_rule_show(rule: &CategoryRule, direction: Direction) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}: {}\n", direction, describe_rule(rule)));

    if !rule.excluded.is_empty() {
        output.push_str("  excluded:\n");
        for name in &rule.excluded {
            output.push_str(&format!("    - {}\n", name));
        }
    }
    if !rule.included.is_empty() {
        output.push_str("  included:\n");
        for name in &rule.included {
            output.push_str(&format!("    - {}\n", name));
        }
    }

    output
}
