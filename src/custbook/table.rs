//! # Table Rendering
//!
//! Turns a customer list into a plain, fixed-width text table:
//!
//! ```text
//! ID | Name | Phone    | Email | Notes
//! ---+------+----------+-------+------
//! 1  | Ann  | 555-1000 |       |
//! ```
//!
//! Widths are measured in terminal columns (via `unicode-width`) so wide
//! characters still line up. Rendering is pure: no styling, no I/O. Callers
//! decide where the string goes.

use crate::model::Customer;
use unicode_width::UnicodeWidthStr;

pub const EMPTY_PLACEHOLDER: &str = "(no customers yet)";

pub const HEADERS: [&str; 5] = ["ID", "Name", "Phone", "Email", "Notes"];

const CELL_SEPARATOR: &str = " | ";
const RULE_SEPARATOR: &str = "-+-";

fn cells(customer: &Customer) -> [String; 5] {
    [
        customer.id.to_string(),
        customer.name.clone(),
        customer.phone.clone(),
        customer.email.clone(),
        customer.notes.clone(),
    ]
}

fn pad_to_width(cell: &str, width: usize) -> String {
    let padding = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(padding))
}

fn format_row<S: AsRef<str>>(row: &[S], widths: &[usize; 5]) -> String {
    row.iter()
        .zip(widths)
        .map(|(cell, &width)| pad_to_width(cell.as_ref(), width))
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR)
}

/// Renders customers in the order given, or [`EMPTY_PLACEHOLDER`] when there
/// are none.
pub fn render_table(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let rows: Vec<[String; 5]> = customers.iter().map(cells).collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let rule = widths
        .iter()
        .map(|&w| "-".repeat(w))
        .collect::<Vec<_>>()
        .join(RULE_SEPARATOR);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&HEADERS, &widths));
    lines.push(rule);
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));
    lines.join("\n")
}
