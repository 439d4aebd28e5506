//! Shared per-session context threaded through the specialist steps
//!
//! Fields are written at most once by the step that owns them and read
//! freely by later steps. Write-once is enforced by "only prompt if still
//! unset" checks rather than hard immutability, so re-running a step
//! against the same context skips prompts whose field is populated.

use crate::models::{Regime, RiskTolerance};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One advisory session's accumulated inputs and derived results.
///
/// Created fresh at the start of each orchestrated plan and discarded at
/// its end; nothing outlives a single run.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialContext {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,

    /// Set by the tax step.
    pub income: Option<f64>,
    /// Set by the tax step.
    pub deductions: Option<f64>,
    /// Set by the investment step.
    pub age: Option<u8>,
    /// Set by the investment step.
    pub risk_tolerance: Option<RiskTolerance>,

    /// Derived by the tax step; must be populated before the investment
    /// step reads it meaningfully.
    pub tax_bracket: Option<&'static str>,
    /// Derived by the tax step, never read before written.
    pub recommended_regime: Option<Regime>,
}

impl FinancialContext {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            created_at: Utc::now(),
            income: None,
            deductions: None,
            age: None,
            risk_tolerance: None,
            tax_bracket: None,
            recommended_regime: None,
        }
    }

    /// Marginal bracket label, "Unknown" until the tax step has run.
    pub fn bracket_label(&self) -> &'static str {
        self.tax_bracket.unwrap_or("Unknown")
    }

    /// Recommended regime label, "Unknown" until the tax step has run.
    pub fn regime_label(&self) -> &'static str {
        self.recommended_regime
            .map(|regime| regime.label())
            .unwrap_or("Unknown")
    }
}

impl Default for FinancialContext {
    fn default() -> Self {
        Self::new()
    }
}
