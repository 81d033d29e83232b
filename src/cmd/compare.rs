//! Compare command - both regimes side by side with a recommendation

use crate::cmd::{breakdown_rows, print_breakdown_table, BreakdownRow};
use crate::money::{format_inr, format_inr_signed};
use crate::tax::{
    compute_new_regime, compute_old_regime, recommend, Recommendation, Regime, RegimeResult,
};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct CompareCommand {
    /// Gross annual income in whole rupees
    #[arg(short, long, default_value_t = 0)]
    income: u64,

    /// Total claimed deductions, applied in the old regime only
    /// (80C, 80D, HRA, etc.)
    #[arg(short, long, default_value_t = 0)]
    deductions: u64,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Comparison document for JSON output
#[derive(Debug, Serialize)]
struct CompareData {
    gross_income: String,
    deductions: String,
    old_regime: RegimeData,
    new_regime: RegimeData,
    recommendation: RecommendationData,
}

#[derive(Debug, Serialize)]
struct RegimeData {
    standard_deduction: String,
    taxable_income: String,
    tax: String,
    cess: String,
    total: String,
    breakdown: Vec<BreakdownRow>,
}

#[derive(Debug, Serialize)]
struct RecommendationData {
    better: String,
    savings: String,
}

impl CompareCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let income = Decimal::from(self.income);
        let deductions = Decimal::from(self.deductions);

        let old = compute_old_regime(income, deductions);
        let new = compute_new_regime(income);
        let recommendation = recommend(&old, &new);

        if self.json {
            self.print_json(&old, &new, recommendation)
        } else {
            self.print_comparison(&old, &new, recommendation);
            Ok(())
        }
    }

    fn print_comparison(
        &self,
        old: &RegimeResult,
        new: &RegimeResult,
        recommendation: Recommendation,
    ) {
        println!();
        println!("INCOME TAX COMPARISON (FY 2025-26)");

        self.print_regime(Regime::Old, old);
        self.print_regime(Regime::New, new);

        println!("RECOMMENDATION");
        match recommendation {
            Recommendation::Old { savings } => {
                println!(
                    "  Old Regime is better for you! You save {}",
                    format_inr(savings)
                );
            }
            Recommendation::New { savings } => {
                println!(
                    "  New Regime is better for you! You save {}",
                    format_inr(savings)
                );
            }
            Recommendation::Tie => {
                println!("  Both regimes result in the same tax amount.");
            }
        }
        println!();
    }

    fn print_regime(&self, regime: Regime, result: &RegimeResult) {
        println!();
        println!("{}", regime.display().to_uppercase());
        println!("  Gross Income: {}", format_inr(Decimal::from(self.income)));
        println!(
            "  Standard Deduction: {}",
            format_inr(regime.standard_deduction())
        );
        if regime == Regime::Old {
            println!(
                "  Other Deductions: {}",
                format_inr(Decimal::from(self.deductions))
            );
        }
        println!(
            "  Taxable Income: {}",
            format_inr_signed(result.taxable_income)
        );
        print_breakdown_table(&breakdown_rows(result));
        println!(
            "  Health & Education Cess (4%): {}",
            format_inr(result.cess)
        );
        println!("  Total Tax: {}", format_inr(result.total()));
        println!();
    }

    fn print_json(
        &self,
        old: &RegimeResult,
        new: &RegimeResult,
        recommendation: Recommendation,
    ) -> anyhow::Result<()> {
        let (better, savings) = match recommendation {
            Recommendation::Old { savings } => ("old", savings),
            Recommendation::New { savings } => ("new", savings),
            Recommendation::Tie => ("tie", Decimal::ZERO),
        };

        let data = CompareData {
            gross_income: format!("{:.0}", Decimal::from(self.income)),
            deductions: format!("{:.0}", Decimal::from(self.deductions)),
            old_regime: regime_data(Regime::Old, old),
            new_regime: regime_data(Regime::New, new),
            recommendation: RecommendationData {
                better: better.to_string(),
                savings: format!("{:.2}", savings),
            },
        };

        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}

fn regime_data(regime: Regime, result: &RegimeResult) -> RegimeData {
    RegimeData {
        standard_deduction: format!("{:.0}", regime.standard_deduction()),
        taxable_income: format!("{:.0}", result.taxable_income),
        tax: format!("{:.2}", result.tax),
        cess: format!("{:.2}", result.cess),
        total: format!("{:.2}", result.total()),
        breakdown: breakdown_rows(result),
    }
}
