//! Display formatting for money and dates.

use crate::types::{Date, Money};

/// `$` followed by the amount with comma thousands separators (`$12,500`).
pub fn format_currency(amount: Money) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Short US-style date (`Mar 15, 2024`).
pub fn format_date(date: Date) -> String {
    date.format("%b %-d, %Y").to_string()
}
