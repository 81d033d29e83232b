use crate::money::format_inr;
use crate::tax::fy2026::{self, Regime};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::Serialize;

/// One income bracket taxed at a single marginal rate.
/// `upper` of `None` means the bracket is open-ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slab {
    pub lower: Decimal,
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}

impl Slab {
    pub fn bounded(lower: Decimal, upper: Decimal, rate: Decimal) -> Self {
        Slab {
            lower,
            upper: Some(upper),
            rate,
        }
    }

    pub fn unbounded(lower: Decimal, rate: Decimal) -> Self {
        Slab {
            lower,
            upper: None,
            rate,
        }
    }

    /// Human-readable range, e.g. "₹250,000 to ₹500,000" or "Above ₹1,000,000"
    pub fn label(&self) -> String {
        match self.upper {
            Some(upper) => format!("{} to {}", format_inr(self.lower), format_inr(upper)),
            None => format!("Above {}", format_inr(self.lower)),
        }
    }
}

/// One row of a regime's tax breakdown
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineItem {
    /// Tax contributed by a single slab
    Slab {
        label: String,
        taxable_amount: Decimal,
        rate: Decimal,
        tax_amount: Decimal,
    },
    /// The new-regime rebate zeroed out the tax
    Rebate,
}

/// Result of computing one regime's liability
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct RegimeResult {
    /// Total tax before cess (post-rebate in the new regime)
    pub tax: Decimal,
    /// Health & Education Cess on `tax`
    pub cess: Decimal,
    /// Per-slab rows, plus a trailing rebate row when it applied
    pub breakdown: Vec<LineItem>,
    /// Income after the standard deduction (and old-regime deductions);
    /// negative when deductions exceed gross income
    pub taxable_income: Decimal,
}

impl RegimeResult {
    /// Total liability including cess
    pub fn total(&self) -> Decimal {
        self.tax + self.cess
    }
}

/// Run the slab table over a taxable income, returning the accumulated tax
/// and one breakdown row per slab that contributed tax.
fn accumulate_slabs(taxable_income: Decimal, slabs: &[Slab]) -> (Decimal, Vec<LineItem>) {
    let mut tax = Decimal::ZERO;
    let mut breakdown = Vec::new();

    for slab in slabs {
        if taxable_income <= slab.lower {
            continue;
        }
        let reach = match slab.upper {
            Some(upper) => taxable_income.min(upper),
            None => taxable_income,
        };
        let taxable_in_slab = (reach - slab.lower).max(Decimal::ZERO);
        let tax_in_slab = taxable_in_slab * slab.rate;
        tax += tax_in_slab;
        log::debug!(
            "Slab {}: taxable={}, rate={}, tax={}. Running total: {}",
            slab.label(),
            taxable_in_slab,
            slab.rate,
            tax_in_slab,
            tax
        );
        if tax_in_slab > Decimal::ZERO {
            breakdown.push(LineItem::Slab {
                label: slab.label(),
                taxable_amount: taxable_in_slab,
                rate: slab.rate,
                tax_amount: tax_in_slab,
            });
        }
    }

    (tax, breakdown)
}

/// Old-regime liability: standard deduction of ₹50,000 plus claimed
/// deductions, then the four-slab table and 4% cess.
pub fn compute_old_regime(gross_income: Decimal, deductions: Decimal) -> RegimeResult {
    let regime = Regime::Old;
    let taxable_income = gross_income - regime.standard_deduction() - deductions;
    let (tax, breakdown) = accumulate_slabs(taxable_income, &regime.slabs());
    let cess = tax * fy2026::cess_rate();

    RegimeResult {
        tax,
        cess,
        breakdown,
        taxable_income,
    }
}

/// New-regime liability: standard deduction of ₹75,000 (no other deductions
/// permitted), the seven-slab table, the section 87A rebate, and 4% cess.
pub fn compute_new_regime(gross_income: Decimal) -> RegimeResult {
    let regime = Regime::New;
    let taxable_income = gross_income - regime.standard_deduction();
    let (mut tax, mut breakdown) = accumulate_slabs(taxable_income, &regime.slabs());

    // Rebate rule: the slab rows keep their computed amounts; only the total
    // is zeroed, with a marker row appended after them.
    if tax <= fy2026::rebate_threshold() {
        log::debug!("Rebate applied: pre-rebate tax {} within threshold", tax);
        tax = Decimal::ZERO;
        breakdown.push(LineItem::Rebate);
    }

    let cess = tax * fy2026::cess_rate();

    RegimeResult {
        tax,
        cess,
        breakdown,
        taxable_income,
    }
}

/// Which regime comes out cheaper, with the saving relative to the other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Old { savings: Decimal },
    New { savings: Decimal },
    Tie,
}

/// Compare totals (tax + cess) of both regimes. Exact equality is a tie.
pub fn recommend(old: &RegimeResult, new: &RegimeResult) -> Recommendation {
    let old_total = old.total();
    let new_total = new.total();
    if old_total < new_total {
        Recommendation::Old {
            savings: new_total - old_total,
        }
    } else if new_total < old_total {
        Recommendation::New {
            savings: old_total - new_total,
        }
    } else {
        Recommendation::Tie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn slab_tax_sum(result: &RegimeResult) -> Decimal {
        result
            .breakdown
            .iter()
            .map(|line| match line {
                LineItem::Slab { tax_amount, .. } => *tax_amount,
                LineItem::Rebate => Decimal::ZERO,
            })
            .sum()
    }

    fn has_rebate(result: &RegimeResult) -> bool {
        result.breakdown.contains(&LineItem::Rebate)
    }

    #[test]
    fn zero_income_both_regimes() {
        let old = compute_old_regime(dec!(0), dec!(0));
        assert_eq!(old.tax, dec!(0));
        assert_eq!(old.cess, dec!(0));
        assert_eq!(old.taxable_income, dec!(-50000));
        assert!(old.breakdown.is_empty());

        let new = compute_new_regime(dec!(0));
        assert_eq!(new.tax, dec!(0));
        assert_eq!(new.cess, dec!(0));
        assert_eq!(new.taxable_income, dec!(-75000));
        // Zero tax is within the rebate threshold, so the marker still appears
        assert_eq!(new.breakdown, vec![LineItem::Rebate]);
    }

    #[test]
    fn old_regime_600k() {
        let result = compute_old_regime(dec!(600000), dec!(0));
        assert_eq!(result.taxable_income, dec!(550000));
        // 5% of 250,000 + 20% of 50,000
        assert_eq!(result.tax, dec!(22500));
        assert_eq!(result.cess, dec!(900));
        assert_eq!(result.total(), dec!(23400));
        // Nil-rate slab emits no row
        assert_eq!(result.breakdown.len(), 2);
    }

    #[test]
    fn new_regime_600k_rebated() {
        let result = compute_new_regime(dec!(600000));
        assert_eq!(result.taxable_income, dec!(525000));
        // Pre-rebate tax was 6,250 (5% of 125,000), zeroed by the rebate
        assert_eq!(result.tax, dec!(0));
        assert_eq!(result.cess, dec!(0));
        assert!(has_rebate(&result));
        // The slab row keeps its originally computed amount
        assert_eq!(slab_tax_sum(&result), dec!(6250));
    }

    #[test]
    fn old_regime_1500k_with_deductions() {
        let result = compute_old_regime(dec!(1500000), dec!(150000));
        assert_eq!(result.taxable_income, dec!(1300000));
        // 12,500 + 100,000 + 30% of 300,000
        assert_eq!(result.tax, dec!(202500));
        assert_eq!(result.cess, dec!(8100));
        assert_eq!(result.breakdown.len(), 3);
    }

    #[test]
    fn new_regime_1500k() {
        let result = compute_new_regime(dec!(1500000));
        assert_eq!(result.taxable_income, dec!(1425000));
        // 20,000 + 40,000 + 15% of 225,000
        assert_eq!(result.tax, dec!(93750));
        assert_eq!(result.cess, dec!(3750));
        assert!(!has_rebate(&result));
    }

    #[test]
    fn rebate_boundary_exact() {
        // Taxable income 1,200,000 exhausts the 5% and 10% slabs: tax exactly 60,000
        let result = compute_new_regime(dec!(1275000));
        assert_eq!(result.tax, dec!(0));
        assert_eq!(result.cess, dec!(0));
        assert!(has_rebate(&result));
        assert_eq!(slab_tax_sum(&result), dec!(60000));
    }

    #[test]
    fn rebate_boundary_just_above() {
        let result = compute_new_regime(dec!(1275010));
        assert_eq!(result.tax, dec!(60001.50));
        assert_eq!(result.cess, dec!(60001.50) * dec!(0.04));
        assert!(!has_rebate(&result));
    }

    #[test]
    fn income_below_standard_deduction() {
        let result = compute_old_regime(dec!(30000), dec!(10000));
        assert_eq!(result.taxable_income, dec!(-30000));
        assert_eq!(result.tax, dec!(0));
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn breakdown_sums_to_tax_without_rebate() {
        for income in [dec!(400000), dec!(750000), dec!(1250000), dec!(5000000)] {
            let old = compute_old_regime(income, dec!(0));
            assert_eq!(slab_tax_sum(&old), old.tax, "old regime at {income}");
        }
        // High enough that the rebate cannot fire
        let new = compute_new_regime(dec!(2000000));
        assert_eq!(new.tax, dec!(185000));
        assert_eq!(slab_tax_sum(&new), new.tax);
    }

    #[test]
    fn tax_monotonic_in_income() {
        let mut prev_old = Decimal::ZERO;
        let mut prev_new = Decimal::ZERO;
        for step in 0u32..60 {
            let income = Decimal::from(step * 50_000);
            let old = compute_old_regime(income, dec!(100000)).total();
            let new = compute_new_regime(income).total();
            assert!(old >= prev_old, "old regime decreased at income {income}");
            assert!(new >= prev_new, "new regime decreased at income {income}");
            prev_old = old;
            prev_new = new;
        }
    }

    #[test]
    fn top_slab_label_is_open_ended() {
        let result = compute_old_regime(dec!(2000000), dec!(0));
        let last_slab_label = result
            .breakdown
            .iter()
            .rev()
            .find_map(|line| match line {
                LineItem::Slab { label, .. } => Some(label.clone()),
                LineItem::Rebate => None,
            })
            .unwrap();
        assert_eq!(last_slab_label, "Above ₹1,000,000");
    }

    #[test]
    fn recommend_new_when_cheaper() {
        let old = compute_old_regime(dec!(1500000), dec!(150000));
        let new = compute_new_regime(dec!(1500000));
        // 210,600 vs 97,500
        assert_eq!(
            recommend(&old, &new),
            Recommendation::New {
                savings: dec!(113100)
            }
        );
    }

    #[test]
    fn recommend_old_when_cheaper() {
        // Heavy deductions pull the old regime below the new one
        let old = compute_old_regime(dec!(2000000), dec!(800000));
        let new = compute_new_regime(dec!(2000000));
        assert!(old.total() < new.total());
        assert_eq!(
            recommend(&old, &new),
            Recommendation::Old {
                savings: new.total() - old.total()
            }
        );
    }

    #[test]
    fn recommend_tie_on_exact_equality() {
        // Old taxable income 906,250 gives tax 93,750, matching the new
        // regime at 1,500,000 exactly (97,500 with cess on both sides)
        let old = compute_old_regime(dec!(1500000), dec!(543750));
        let new = compute_new_regime(dec!(1500000));
        assert_eq!(old.total(), new.total());
        assert_eq!(recommend(&old, &new), Recommendation::Tie);
    }

    #[test]
    fn cess_is_four_percent_of_tax() {
        for income in [dec!(0), dec!(600000), dec!(1275000), dec!(3000000)] {
            let old = compute_old_regime(income, dec!(50000));
            assert_eq!(old.cess, old.tax * dec!(0.04));
            let new = compute_new_regime(income);
            assert_eq!(new.cess, new.tax * dec!(0.04));
        }
    }
}
