//! Tax specialist step
//!
//! Populates income and deductions on the shared context, derives the
//! bracket and regime recommendation, and asks the generative advisor for
//! a short rationale.

use crate::advisor::GenerativeAdvisor;
use crate::console::{Console, Persona};
use crate::context::FinancialContext;
use crate::input::{non_negative, parse_amount, read_validated};
use crate::tax;
use crate::Result;
use colored::Color;
use tracing::info;

const TAXWELL: Persona = Persona {
    name: "Taxwell",
    color: Color::Green,
};

pub struct TaxSpecialist;

impl TaxSpecialist {
    pub async fn run<C: Console>(
        &self,
        console: &mut C,
        advisor: &GenerativeAdvisor,
        context: &mut FinancialContext,
    ) -> Result<()> {
        console.say(
            &TAXWELL,
            "I need to assess your tax situation to build your financial profile.",
        );

        let income = match context.income {
            Some(value) => value,
            None => {
                let value = read_validated(
                    console,
                    &TAXWELL,
                    "Please enter your total annual income (in INR): ",
                    parse_amount,
                    non_negative("Income"),
                )?;
                context.income = Some(value);
                value
            }
        };

        let deductions = match context.deductions {
            Some(value) => value,
            None => {
                let value = read_validated(
                    console,
                    &TAXWELL,
                    "Enter your total deductions (e.g., 80C, 80D). Enter 0 if none: ",
                    parse_amount,
                    non_negative("Deductions"),
                )?;
                context.deductions = Some(value);
                value
            }
        };

        console.say(
            &TAXWELL,
            &format!(
                "Thanks. Calculating tax for an income of ₹{:.2} and deductions of ₹{:.2}...",
                income, deductions
            ),
        );

        let assessment = tax::assess(income, deductions);

        context.tax_bracket = Some(assessment.bracket);
        context.recommended_regime = Some(assessment.regime);

        info!(
            session_id = %context.session_id,
            regime = assessment.regime.label(),
            bracket = assessment.bracket,
            "Tax assessment recorded on context"
        );

        console.say(
            &TAXWELL,
            &format!(
                "Here's your tax summary:\n\n\
                 Old Regime:\n\
                 - Taxable Income: ₹{:.2}\n\
                 - Tax Liability:  ₹{}\n\n\
                 New Regime (Default):\n\
                 - Taxable Income: ₹{:.2}\n\
                 - Tax Liability:  ₹{}\n\n\
                 Recommendation: the {}, with a marginal bracket of ~{}.",
                assessment.taxable_old,
                assessment.tax_old,
                assessment.taxable_new,
                assessment.tax_new,
                assessment.regime.label(),
                assessment.bracket
            ),
        );

        let prompt = format!(
            "My annual income is {:.0} INR with deductions of {:.0} INR. My recommended tax regime is the {}. Briefly summarize why this regime is better for me.",
            income,
            deductions,
            assessment.regime.label()
        );
        let summary = advisor.advise(console, &prompt).await;
        console.say(&TAXWELL, &summary);

        Ok(())
    }
}
