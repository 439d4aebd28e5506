//! Investment specialist step
//!
//! Populates age and risk tolerance, reads the tax bracket the tax step
//! left on the context, presents the deterministic allocation suggestion,
//! and asks the generative advisor for a holistic plan.

use crate::advisor::GenerativeAdvisor;
use crate::advisory;
use crate::console::{Console, Persona};
use crate::context::FinancialContext;
use crate::input::read_validated;
use crate::models::RiskTolerance;
use crate::Result;
use colored::Color;
use tracing::info;

const INVESTA: Persona = Persona {
    name: "Investa",
    color: Color::Magenta,
};

pub struct InvestmentSpecialist;

impl InvestmentSpecialist {
    pub async fn run<C: Console>(
        &self,
        console: &mut C,
        advisor: &GenerativeAdvisor,
        context: &mut FinancialContext,
    ) -> Result<()> {
        console.say(
            &INVESTA,
            "To give you tailored investment advice, I need to know your age and risk appetite.",
        );

        let age = match context.age {
            Some(value) => value,
            None => {
                let value = read_validated(
                    console,
                    &INVESTA,
                    "What is your age? ",
                    |raw| {
                        raw.parse::<u8>().map_err(|_| {
                            "Please enter a valid whole number for your age.".to_string()
                        })
                    },
                    |age| {
                        if (18..=100).contains(age) {
                            Ok(())
                        } else {
                            Err("Please enter an age between 18 and 100.".to_string())
                        }
                    },
                )?;
                context.age = Some(value);
                value
            }
        };

        let risk = match context.risk_tolerance {
            Some(value) => value,
            None => {
                let value = read_validated(
                    console,
                    &INVESTA,
                    "Enter your risk tolerance ('low', 'medium', or 'high'): ",
                    |raw| {
                        raw.parse::<RiskTolerance>().map_err(|_| {
                            "Invalid choice. Please enter 'low', 'medium', or 'high'.".to_string()
                        })
                    },
                    |_| Ok(()),
                )?;
                context.risk_tolerance = Some(value);
                value
            }
        };

        info!(
            session_id = %context.session_id,
            age,
            risk = %risk,
            bracket = context.bracket_label(),
            "Investment profile ready"
        );

        console.say(
            &INVESTA,
            &format!(
                "Excellent. I see from the context that your tax bracket is {}. Generating suggestions for a {}-year-old with {} risk tolerance...",
                context.bracket_label(),
                age,
                risk
            ),
        );

        let advice = advisory::suggest_allocation(age, risk);
        console.say(
            &INVESTA,
            &format!(
                "Here is a sample portfolio allocation I'd suggest:\n\n{}",
                advice
            ),
        );

        let prompt = format!(
            "Act as an expert financial advisor in India. Give me a holistic investment plan for a {}-year-old with a '{}' risk tolerance, who is in the {} tax bracket. Focus on actionable advice, specific investment types (like PPF, ELSS, Index Funds), and explain the rationale, especially how the tax bracket influences the choices.",
            age,
            risk,
            context.bracket_label()
        );
        let plan = advisor.advise(console, &prompt).await;
        console.say(&INVESTA, &plan);

        Ok(())
    }
}
