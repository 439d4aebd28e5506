//! Finley, the chief orchestrator
//!
//! A menu state machine over one long-lived loop. Each holistic plan runs
//! the specialist steps in fixed dependency order against a fresh
//! `FinancialContext` and discards it on completion; the tax step's writes
//! precede the investment step's reads purely by program order.

use crate::advisor::GenerativeAdvisor;
use crate::console::{Console, Persona};
use crate::context::FinancialContext;
use crate::specialists::{FilingGuide, InvestmentSpecialist, TaxSpecialist};
use crate::Result;
use colored::Color;
use tracing::info;

const FINLEY: Persona = Persona {
    name: "Finley",
    color: Color::Blue,
};

const MENU: &str = "1. Create a Holistic Financial Plan\n\
2. Get ITR Filing Guidance\n\
3. Exit\n\
Enter the number of your choice: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    HolisticPlan,
    FilingGuidance,
    Exit,
}

fn parse_menu_choice(raw: &str) -> Option<MenuChoice> {
    match raw.trim() {
        "1" => Some(MenuChoice::HolisticPlan),
        "2" => Some(MenuChoice::FilingGuidance),
        "3" => Some(MenuChoice::Exit),
        _ => None,
    }
}

pub struct Orchestrator<C: Console> {
    console: C,
    advisor: GenerativeAdvisor,
    tax: TaxSpecialist,
    investment: InvestmentSpecialist,
    filing: FilingGuide,
}

impl<C: Console> Orchestrator<C> {
    pub fn new(console: C, advisor: GenerativeAdvisor) -> Self {
        Self {
            console,
            advisor,
            tax: TaxSpecialist,
            investment: InvestmentSpecialist,
            filing: FilingGuide,
        }
    }

    /// Main interaction loop: MENU until Exit.
    ///
    /// An unrecognized selection emits one recoverable error and stays in
    /// the menu; completed actions pause before re-entering it.
    pub async fn run(&mut self) -> Result<()> {
        self.console.say(
            &FINLEY,
            "Hello! I'm Finley, your chief financial agent. My team collaborates to provide holistic advice.",
        );

        loop {
            self.console.say(&FINLEY, "What would you like to do today?");
            let raw = self.console.prompt(MENU)?;

            match parse_menu_choice(&raw) {
                Some(MenuChoice::HolisticPlan) => {
                    self.run_holistic_plan().await?;
                    self.pause()?;
                }
                Some(MenuChoice::FilingGuidance) => {
                    self.filing.run(&mut self.console)?;
                    self.pause()?;
                }
                Some(MenuChoice::Exit) => {
                    self.console
                        .say(&FINLEY, "Goodbye! Feel free to reach out anytime.");
                    return Ok(());
                }
                None => {
                    self.console.say_error(
                        &FINLEY,
                        "I'm sorry, that's not a valid choice. Please select from 1-3.",
                    );
                }
            }
        }
    }

    /// One holistic plan: a fresh context mutated by the specialist steps
    /// in dependency order, returned for harness inspection.
    pub async fn run_holistic_plan(&mut self) -> Result<FinancialContext> {
        let mut context = FinancialContext::new();

        info!(session_id = %context.session_id, "Starting holistic plan");

        self.console.say(
            &FINLEY,
            "Understood. To create a holistic financial plan, I will orchestrate a collaboration between my specialist agents.",
        );

        self.tax
            .run(&mut self.console, &self.advisor, &mut context)
            .await?;

        self.console.say(
            &FINLEY,
            "Great. Now that we have your tax profile, I will bring in Investa to provide a tailored investment strategy.",
        );

        self.investment
            .run(&mut self.console, &self.advisor, &mut context)
            .await?;

        self.console
            .say(&FINLEY, "Your personalized financial plan is complete.");

        info!(session_id = %context.session_id, "Holistic plan complete");

        Ok(context)
    }

    fn pause(&mut self) -> Result<()> {
        self.console
            .prompt("\nPress Enter to return to the main menu...")
            .map(|_| ())
    }

    /// The console, for harnesses that inspect the transcript.
    pub fn console(&self) -> &C {
        &self.console
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::StaticGenerator;
    use crate::console::ScriptedConsole;
    use crate::error::AdvisoryError;
    use crate::models::{Regime, RiskTolerance};

    fn orchestrator(inputs: &[&str]) -> Orchestrator<ScriptedConsole> {
        Orchestrator::new(
            ScriptedConsole::new(inputs.iter().copied()),
            GenerativeAdvisor::new(Box::new(StaticGenerator("canned advice"))),
        )
    }

    #[test]
    fn menu_choices_parse() {
        assert_eq!(parse_menu_choice("1"), Some(MenuChoice::HolisticPlan));
        assert_eq!(parse_menu_choice(" 2 "), Some(MenuChoice::FilingGuidance));
        assert_eq!(parse_menu_choice("3"), Some(MenuChoice::Exit));
        assert_eq!(parse_menu_choice("9"), None);
        assert_eq!(parse_menu_choice(""), None);
    }

    #[tokio::test]
    async fn invalid_selection_stays_in_the_menu_with_one_error() {
        let mut orchestrator = orchestrator(&["9", "3"]);

        orchestrator.run().await.unwrap();

        let console = orchestrator.console();
        assert_eq!(console.errors.len(), 1);
        // No plan was started, so no context-creating message appeared.
        assert!(!console
            .said_by("Finley")
            .iter()
            .any(|message| message.contains("orchestrate a collaboration")));
        assert_eq!(console.prompts.len(), 2);
    }

    #[tokio::test]
    async fn holistic_plan_runs_the_steps_in_order() {
        let mut orchestrator = orchestrator(&["1200000", "150000", "40", "medium"]);

        let context = orchestrator.run_holistic_plan().await.unwrap();

        assert_eq!(context.income, Some(1_200_000.0));
        assert_eq!(context.deductions, Some(150_000.0));
        assert_eq!(context.age, Some(40));
        assert_eq!(context.risk_tolerance, Some(RiskTolerance::Medium));
        assert_eq!(context.tax_bracket, Some("20%"));
        assert_eq!(context.recommended_regime, Some(Regime::New));

        let console = orchestrator.console();
        assert_eq!(console.remaining_inputs(), 0);
        // The investment step saw the bracket the tax step wrote.
        assert!(console
            .said_by("Investa")
            .iter()
            .any(|message| message.contains("your tax bracket is 20%")));
        assert_eq!(
            console.said_by("Finley").last(),
            Some(&"Your personalized financial plan is complete.")
        );
    }

    #[tokio::test]
    async fn full_session_plan_then_exit() {
        let mut orchestrator =
            orchestrator(&["1", "1200000", "150000", "40", "medium", "", "3"]);

        orchestrator.run().await.unwrap();

        let console = orchestrator.console();
        assert_eq!(console.errors.len(), 0);
        assert!(console
            .said_by("Finley")
            .iter()
            .any(|message| message.contains("plan is complete")));
        assert_eq!(
            console.said_by("Finley").last(),
            Some(&"Goodbye! Feel free to reach out anytime.")
        );
    }

    #[tokio::test]
    async fn filing_guidance_from_the_menu() {
        let mut orchestrator = orchestrator(&["2", "itr-1", "", "3"]);

        orchestrator.run().await.unwrap();

        let console = orchestrator.console();
        assert!(console
            .said_by("Filer")
            .iter()
            .any(|message| message.contains("ITR-1 (Sahaj)")));
    }

    #[tokio::test]
    async fn closed_input_stream_surfaces_instead_of_spinning() {
        let mut orchestrator = orchestrator(&[]);

        let result = orchestrator.run().await;

        assert!(matches!(result, Err(AdvisoryError::InputClosed)));
    }
}
