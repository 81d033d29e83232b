//! Report command - detailed breakdown for a single regime

use crate::cmd::{breakdown_rows, print_breakdown_table};
use crate::money::{format_inr, format_inr_signed};
use crate::tax::{compute_new_regime, compute_old_regime, Regime, RegimeResult};
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use std::io;

#[derive(Args, Debug)]
pub struct ReportCommand {
    /// Gross annual income in whole rupees
    #[arg(short, long, default_value_t = 0)]
    income: u64,

    /// Total claimed deductions (old regime only: 80C, 80D, HRA, etc.)
    #[arg(short, long, default_value_t = 0)]
    deductions: u64,

    /// Regime to report
    #[arg(short, long, value_enum, default_value_t = RegimeArg::New)]
    regime: RegimeArg,

    /// Output breakdown rows as CSV instead of a formatted table
    #[arg(long)]
    csv: bool,

    /// Output the raw result as JSON
    #[arg(long, conflicts_with = "csv")]
    json: bool,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum RegimeArg {
    Old,
    #[default]
    New,
}

impl From<RegimeArg> for Regime {
    fn from(arg: RegimeArg) -> Self {
        match arg {
            RegimeArg::Old => Regime::Old,
            RegimeArg::New => Regime::New,
        }
    }
}

impl ReportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let regime: Regime = self.regime.into();
        let income = Decimal::from(self.income);
        let deductions = Decimal::from(self.deductions);

        if regime == Regime::New && self.deductions > 0 {
            log::warn!("Deductions are not permitted under the new regime; ignoring");
        }

        let result = match regime {
            Regime::Old => compute_old_regime(income, deductions),
            Regime::New => compute_new_regime(income),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        } else if self.csv {
            self.write_csv(&result)
        } else {
            self.print_report(regime, &result);
            Ok(())
        }
    }

    fn write_csv(&self, result: &RegimeResult) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for row in breakdown_rows(result) {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn print_report(&self, regime: Regime, result: &RegimeResult) {
        println!();
        println!("{} (FY 2025-26)", regime.display().to_uppercase());
        println!();
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
        println!();
        print_breakdown_table(&breakdown_rows(result));
        println!();
        println!(
            "  Health & Education Cess (4%): {}",
            format_inr(result.cess)
        );
        println!("  Total Tax: {}", format_inr(result.total()));
        println!();
    }
}
