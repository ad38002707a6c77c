use colored::Colorize;

use crate::storage::models::Rules;

/// Format an amount in rupees with Indian digit grouping (12,34,567)
pub fn format_rupees(amount: f64) -> String {
    let whole = amount.abs().trunc() as u64;
    let digits = whole.to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (left, right) = rest.split_at(rest.len() - 2);
            parts.push(right);
            rest = left;
        }
        parts.push(rest);
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}Rs {}", sign, grouped)
}

/// One-line summary of a rule set, for table output
pub fn format_rules(rules: &Rules) -> String {
    let income = match rules.max_income() {
        Some(cap) => format!("income <= {}", format_rupees(cap)),
        None => "any income".to_string(),
    };

    let categories = if rules.categories().is_empty() {
        "all categories".to_string()
    } else {
        rules.categories().join("/")
    };

    format!("age {}-{}, {}, {}", rules.min_age(), rules.max_age(), income, categories)
}

/// Shorten text for a fixed-width column
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

pub fn format_verdict(eligible: bool, reason: &str) -> String {
    if eligible {
        reason.green().to_string()
    } else {
        reason.red().to_string()
    }
}

/// Print a formatted table border
pub fn print_table_border(width: usize) {
    println!("{}", "=".repeat(width));
}

/// Print a table row with columns
pub fn print_table_row(columns: &[&str], widths: &[usize]) {
    let mut row = String::new();
    for (i, col) in columns.iter().enumerate() {
        if i < widths.len() {
            row.push_str(&format!("{:<width$}  ", col, width = widths[i]));
        }
    }
    println!("{}", row.trim_end());
}
