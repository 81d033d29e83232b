use crate::tax::regime::Slab;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Tax regime a taxpayer may elect for FY 2025-26
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Regime {
    Old,
    #[default]
    New,
}

impl Regime {
    #[allow(dead_code)]
    pub fn from_str(s: &str) -> Option<Regime> {
        match s.to_lowercase().as_str() {
            "old" => Some(Regime::Old),
            "new" => Some(Regime::New),
            _ => None,
        }
    }

    /// Standard deduction applied off gross income before the slabs
    pub fn standard_deduction(&self) -> Decimal {
        match self {
            Regime::Old => dec!(50000),
            Regime::New => dec!(75000),
        }
    }

    /// Slab table for this regime, ascending and contiguous from zero
    pub fn slabs(&self) -> Vec<Slab> {
        match self {
            Regime::Old => vec![
                Slab::bounded(dec!(0), dec!(250000), dec!(0)),
                Slab::bounded(dec!(250000), dec!(500000), dec!(0.05)),
                Slab::bounded(dec!(500000), dec!(1000000), dec!(0.20)),
                Slab::unbounded(dec!(1000000), dec!(0.30)),
            ],
            Regime::New => vec![
                Slab::bounded(dec!(0), dec!(400000), dec!(0)),
                Slab::bounded(dec!(400000), dec!(800000), dec!(0.05)),
                Slab::bounded(dec!(800000), dec!(1200000), dec!(0.10)),
                Slab::bounded(dec!(1200000), dec!(1600000), dec!(0.15)),
                Slab::bounded(dec!(1600000), dec!(2000000), dec!(0.20)),
                Slab::bounded(dec!(2000000), dec!(2400000), dec!(0.25)),
                Slab::unbounded(dec!(2400000), dec!(0.30)),
            ],
        }
    }

    /// Display as "Old Regime" / "New Regime"
    pub fn display(&self) -> &'static str {
        match self {
            Regime::Old => "Old Regime",
            Regime::New => "New Regime",
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Health & Education Cess, levied on the computed tax in both regimes
pub fn cess_rate() -> Decimal {
    dec!(0.04)
}

/// Section 87A rebate threshold: new-regime tax at or below this is zeroed
pub fn rebate_threshold() -> Decimal {
    dec!(60000)
}
