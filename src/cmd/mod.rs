pub mod compare;
pub mod report;
pub mod schema;

use crate::money::{format_inr, format_percent};
use crate::tax::regime::{LineItem, RegimeResult};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Row for the breakdown table and CSV output
#[derive(Debug, Clone, Tabled, serde::Serialize)]
pub struct BreakdownRow {
    #[tabled(rename = "Slab")]
    pub slab: String,

    #[tabled(rename = "Amount")]
    pub amount: String,

    #[tabled(rename = "Rate")]
    pub rate: String,

    #[tabled(rename = "Tax")]
    pub tax: String,
}

/// Render the engine's breakdown lines for display. The rebate marker
/// becomes a dashed row here; the engine type stays tagged.
pub fn breakdown_rows(result: &RegimeResult) -> Vec<BreakdownRow> {
    result
        .breakdown
        .iter()
        .map(|line| match line {
            LineItem::Slab {
                label,
                taxable_amount,
                rate,
                tax_amount,
            } => BreakdownRow {
                slab: label.clone(),
                amount: format_inr(*taxable_amount),
                rate: format_percent(*rate),
                tax: format_inr(*tax_amount),
            },
            LineItem::Rebate => BreakdownRow {
                slab: "Tax Rebate Applied".to_string(),
                amount: "-".to_string(),
                rate: "-".to_string(),
                tax: "₹0".to_string(),
            },
        })
        .collect()
}

pub fn print_breakdown_table(rows: &[BreakdownRow]) {
    if rows.is_empty() {
        println!("  No tax due in any slab");
        return;
    }

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}
