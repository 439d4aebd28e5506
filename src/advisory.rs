//! Deterministic allocation suggestions keyed by risk tolerance

use crate::models::{AllocationAdvice, AllocationBucket, RiskTolerance};

/// Equity exposure cap for the age-based medium-risk ladder.
const MEDIUM_EQUITY_CAP: u32 = 80;

/// Suggest a portfolio allocation for a pre-validated age in [18, 100].
///
/// Low and high risk use fixed three-bucket splits; only the medium tier
/// depends on age.
pub fn suggest_allocation(age: u8, risk: RiskTolerance) -> AllocationAdvice {
    match risk {
        RiskTolerance::Low => low_risk(),
        RiskTolerance::Medium => medium_risk(age),
        RiskTolerance::High => high_risk(),
    }
}

fn low_risk() -> AllocationAdvice {
    AllocationAdvice {
        buckets: vec![
            AllocationBucket {
                percent: 60,
                label: "Debt Instruments",
                detail: "Public Provident Fund (PPF), Fixed Deposits (FDs), Debt Mutual Funds."
                    .to_string(),
            },
            AllocationBucket {
                percent: 20,
                label: "Hybrid Funds",
                detail: "Balanced advantage funds that mix equity and debt.".to_string(),
            },
            AllocationBucket {
                percent: 20,
                label: "Large-Cap Equity",
                detail: "NIFTY 50 Index Funds or large-cap mutual funds for steady growth."
                    .to_string(),
            },
        ],
    }
}

fn medium_risk(age: u8) -> AllocationAdvice {
    let equity = MEDIUM_EQUITY_CAP.min(100 - u32::from(age));
    let debt = 100 - equity;

    // Internal 60/30/10 split, rounded half away from zero; the parts need
    // not sum to exactly the equity share.
    let large_cap = (f64::from(equity) * 0.6).round() as u32;
    let mid_cap = (f64::from(equity) * 0.3).round() as u32;
    let small_cap = (f64::from(equity) * 0.1).round() as u32;

    AllocationAdvice {
        buckets: vec![
            AllocationBucket {
                percent: equity,
                label: "Equity",
                detail: format!(
                    "A mix of Large-Cap Index Funds ({}%), Mid-Cap Funds ({}%), and a small allocation to Small-Cap Funds ({}%).",
                    large_cap, mid_cap, small_cap
                ),
            },
            AllocationBucket {
                percent: debt,
                label: "Debt",
                detail: "A mix of PPF, and Corporate Bond Funds for stability.".to_string(),
            },
        ],
    }
}

fn high_risk() -> AllocationAdvice {
    AllocationAdvice {
        buckets: vec![
            AllocationBucket {
                percent: 70,
                label: "Equity",
                detail: "Focus on Mid-Cap and Small-Cap mutual funds for high growth potential."
                    .to_string(),
            },
            AllocationBucket {
                percent: 20,
                label: "International Equity",
                detail: "An S&P 500 or NASDAQ 100 index fund for geographical diversification."
                    .to_string(),
            },
            AllocationBucket {
                percent: 10,
                label: "Alternative Assets",
                detail: "Consider REITs or a small allocation to high-risk assets you understand."
                    .to_string(),
            },
        ],
    }
}
