//! Core data models for the advisory pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//
// ================= Enums =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl FromStr for RiskTolerance {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskTolerance::Low),
            "medium" => Ok(RiskTolerance::Medium),
            "high" => Ok(RiskTolerance::High),
            _ => Err(()),
        }
    }
}

/// One of the two mutually exclusive statutory computation methods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Regime {
    Old,
    New,
}

impl Regime {
    pub fn label(&self) -> &'static str {
        match self {
            Regime::Old => "Old Regime",
            Regime::New => "New Regime",
        }
    }
}

/// ITR form selection for the filing-guidance step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilingForm {
    Itr1,
    Itr2,
    Unsure,
}

impl FromStr for FilingForm {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "itr-1" => Ok(FilingForm::Itr1),
            "itr-2" => Ok(FilingForm::Itr2),
            "unsure" => Ok(FilingForm::Unsure),
            _ => Err(()),
        }
    }
}

//
// ================= Tax =================
//

/// Outcome of one tax assessment. Ephemeral: folded into the session
/// context and a display message, then dropped.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TaxAssessment {
    pub taxable_old: f64,
    pub tax_old: u64,
    pub taxable_new: f64,
    pub tax_new: u64,
    pub regime: Regime,
    pub bracket: &'static str,
}

//
// ================= Allocation =================
//

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AllocationBucket {
    pub percent: u32,
    pub label: &'static str,
    pub detail: String,
}

/// Structured allocation suggestion; rendering always ends with the fixed
/// disclaimer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AllocationAdvice {
    pub buckets: Vec<AllocationBucket>,
}

pub const ADVICE_DISCLAIMER: &str = "Disclaimer: This is not financial advice. Please consult a registered financial advisor before making investment decisions.";

impl fmt::Display for AllocationAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bucket in &self.buckets {
            writeln!(f, "- {}% in {}: {}", bucket.percent, bucket.label, bucket.detail)?;
        }
        write!(f, "\n{}", ADVICE_DISCLAIMER)
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskTolerance::Low => "low",
            RiskTolerance::Medium => "medium",
            RiskTolerance::High => "high",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
