//! Formatting helpers for terminal output
//!
//! Shared by the CLI subcommands and the TUI summary views.

use crate::ledger::CategoryTotal;

/// Format an amount with two decimal places
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Format the total-spend line
pub fn format_total(total: f64) -> String {
    format!("Total: {}", format_amount(total))
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format the category summary as printable lines
///
/// Returns `None` for an empty ledger so callers can show "No expenses yet"
/// instead of an empty table.
pub fn format_summary(totals: &[CategoryTotal]) -> Option<Vec<String>> {
    if totals.is_empty() {
        return None;
    }

    let label_width = totals
        .iter()
        .map(|t| t.category.chars().count())
        .max()
        .unwrap_or(0);
    let max_subtotal = totals.first().map(|t| t.subtotal).unwrap_or(0.0);

    let lines = totals
        .iter()
        .map(|t| {
            format!(
                "{:<label_width$}  {:>10}  {}",
                t.category,
                format_amount(t.subtotal),
                format_bar(t.subtotal, max_subtotal, 20),
            )
        })
        .collect();

    Some(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(100.0), "100.00");
        assert_eq!(format_amount(250.5), "250.50");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);

        assert_eq!(format_bar(0.0, 0.0, 4), "    ");
    }

    #[test]
    fn test_format_summary_empty() {
        assert!(format_summary(&[]).is_none());
    }

    #[test]
    fn test_format_summary_lines() {
        let totals = vec![
            CategoryTotal {
                category: "Transport".into(),
                subtotal: 200.0,
            },
            CategoryTotal {
                category: "Food".into(),
                subtotal: 150.0,
            },
        ];

        let lines = format_summary(&totals).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Transport"));
        assert!(lines[0].contains("200.00"));
        assert!(lines[1].starts_with("Food"));
        assert!(lines[1].contains("150.00"));
    }
}
