//! Progressive slab tax computation for FY 2024-25
//!
//! Pure functions over pre-validated non-negative inputs. The two regime
//! tables, cess multiplier, and rebate ceilings are statutory constants.

use crate::models::{Regime, TaxAssessment};

struct Slab {
    floor: f64,
    base: f64,
    rate: f64,
}

// Highest slab first; lookup takes the first slab whose floor the taxable
// amount reaches. The tables are continuous: at an exact floor the slab
// base equals the tax accumulated through the slabs below it.
const OLD_REGIME_SLABS: [Slab; 3] = [
    Slab { floor: 1_000_000.0, base: 112_500.0, rate: 0.30 },
    Slab { floor: 500_000.0, base: 12_500.0, rate: 0.20 },
    Slab { floor: 250_000.0, base: 0.0, rate: 0.05 },
];

const NEW_REGIME_SLABS: [Slab; 5] = [
    Slab { floor: 1_500_000.0, base: 150_000.0, rate: 0.30 },
    Slab { floor: 1_200_000.0, base: 90_000.0, rate: 0.20 },
    Slab { floor: 900_000.0, base: 45_000.0, rate: 0.15 },
    Slab { floor: 600_000.0, base: 15_000.0, rate: 0.10 },
    Slab { floor: 300_000.0, base: 0.0, rate: 0.05 },
];

/// Health and education cess applied to the raw slab tax.
const CESS_MULTIPLIER: f64 = 1.04;

// Full-rebate ceilings (section 87A): taxable at or under the ceiling owes
// nothing.
const OLD_REBATE_CEILING: f64 = 500_000.0;
const NEW_REBATE_CEILING: f64 = 700_000.0;

fn slab_tax(taxable: f64, slabs: &[Slab]) -> f64 {
    slabs
        .iter()
        .find(|slab| taxable >= slab.floor)
        .map(|slab| slab.base + (taxable - slab.floor) * slab.rate)
        .unwrap_or(0.0)
}

fn liability(taxable: f64, slabs: &[Slab], rebate_ceiling: f64) -> u64 {
    if taxable <= rebate_ceiling {
        return 0;
    }
    (slab_tax(taxable, slabs) * CESS_MULTIPLIER).round() as u64
}

fn old_bracket_label(taxable: f64) -> &'static str {
    if taxable >= 1_000_000.0 {
        "30%"
    } else if taxable >= 500_000.0 {
        "20%"
    } else {
        "5% or less"
    }
}

fn new_bracket_label(taxable: f64) -> &'static str {
    if taxable >= 1_500_000.0 {
        "30%"
    } else if taxable >= 1_200_000.0 {
        "20%"
    } else {
        "15% or less"
    }
}

/// Assess both regimes for one income/deductions pair.
///
/// Only the old regime subtracts deductions. The New Regime is recommended
/// only when it is strictly cheaper; ties keep the Old Regime. The bracket
/// label is derived from the recommended regime's taxable amount, with an
/// amount sitting exactly on a slab floor labeled at that slab's rate.
pub fn assess(income: f64, deductions: f64) -> TaxAssessment {
    let taxable_old = (income - deductions).max(0.0);
    let taxable_new = income;

    let tax_old = liability(taxable_old, &OLD_REGIME_SLABS, OLD_REBATE_CEILING);
    let tax_new = liability(taxable_new, &NEW_REGIME_SLABS, NEW_REBATE_CEILING);

    let regime = if tax_new < tax_old {
        Regime::New
    } else {
        Regime::Old
    };

    let bracket = match regime {
        Regime::Old => old_bracket_label(taxable_old),
        Regime::New => new_bracket_label(taxable_new),
    };

    TaxAssessment {
        taxable_old,
        tax_old,
        taxable_new,
        tax_new,
        regime,
        bracket,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_matches_the_worked_example() {
        let assessment = assess(1_200_000.0, 150_000.0);

        assert_eq!(assessment.taxable_old, 1_050_000.0);
        assert_eq!(assessment.tax_old, 132_600);
        assert_eq!(assessment.taxable_new, 1_200_000.0);
        assert_eq!(assessment.tax_new, 93_600);
        assert_eq!(assessment.regime, Regime::New);
        assert_eq!(assessment.bracket, "20%");
    }

    #[test]
    fn assessment_is_pure() {
        assert_eq!(assess(1_200_000.0, 150_000.0), assess(1_200_000.0, 150_000.0));
    }

    #[test]
    fn old_taxable_never_goes_negative() {
        let assessment = assess(100_000.0, 250_000.0);
        assert_eq!(assessment.taxable_old, 0.0);
        assert_eq!(assessment.tax_old, 0);
    }

    #[test]
    fn equal_liabilities_keep_the_old_regime() {
        // Both regimes rebate fully at this income, so the tie must fall
        // to the old regime.
        let assessment = assess(400_000.0, 0.0);
        assert_eq!(assessment.tax_old, 0);
        assert_eq!(assessment.tax_new, 0);
        assert_eq!(assessment.regime, Regime::Old);
    }

    #[test]
    fn old_regime_rebate_boundary() {
        assert_eq!(assess(500_000.0, 0.0).tax_old, 0);
        assert!(assess(500_001.0, 0.0).tax_old > 0);
    }

    #[test]
    fn new_regime_rebate_boundary() {
        assert_eq!(assess(700_000.0, 0.0).tax_new, 0);
        assert!(assess(700_001.0, 0.0).tax_new > 0);
    }

    #[test]
    fn bracket_label_follows_the_recommended_regime() {
        // Heavy deductions make the old regime cheaper; the label must
        // come from the old taxable amount.
        let assessment = assess(2_000_000.0, 900_000.0);
        assert_eq!(assessment.regime, Regime::Old);
        assert_eq!(assessment.tax_old, 148_200);
        assert_eq!(assessment.tax_new, 312_000);
        assert_eq!(assessment.bracket, "30%");
    }

    #[test]
    fn fully_rebated_income_reports_the_lowest_old_bracket() {
        let assessment = assess(450_000.0, 100_000.0);
        assert_eq!(assessment.regime, Regime::Old);
        assert_eq!(assessment.tax_old, 0);
        assert_eq!(assessment.bracket, "5% or less");
    }
}
