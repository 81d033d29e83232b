//! Rupee display formatting. The tax engine returns raw decimals; only the
//! CLI output goes through these helpers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Format as whole rupees with thousands separators, e.g. "₹1,500,000"
pub fn format_inr(amount: Decimal) -> String {
    format!("₹{}", group_thousands(amount.abs()))
}

/// As `format_inr`, but keeps the sign for negative amounts
/// (taxable income can go below zero)
pub fn format_inr_signed(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-₹{}", group_thousands(amount.abs()))
    } else {
        format_inr(amount)
    }
}

/// Format a rate fraction as a whole percentage, e.g. 0.05 -> "5%"
pub fn format_percent(rate: Decimal) -> String {
    format!("{:.0}%", rate * dec!(100))
}

fn group_thousands(amount: Decimal) -> String {
    let digits = amount.round_dp(0).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
