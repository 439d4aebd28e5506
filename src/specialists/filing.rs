//! ITR filing guidance step
//!
//! Context-free: prints fixed guidance for the chosen return form. An
//! unsure user gets the comparison and is asked again.

use crate::console::{Console, Persona};
use crate::models::FilingForm;
use crate::Result;
use colored::Color;

const FILER: Persona = Persona {
    name: "Filer",
    color: Color::Red,
};

const ITR1_GUIDE: &str = "Great, let's go through ITR-1 (Sahaj). Here are the key sections:\n\n\
1. Part A - General Information: Your PAN, Aadhaar, address, etc. (Mostly pre-filled).\n\
2. Part B - Gross Total Income: Enter salary (from Form 16), house property income, etc.\n\
3. Part C - Deductions: Fill in your deductions under Chapter VI-A (80C, 80D).\n\
4. Part D - Computation of Tax Payable: The system calculates your tax.\n\
5. Part E - Other Information: Details of all your bank accounts.\n\
Remember to verify all pre-filled data before submitting!";

const ITR2_GUIDE: &str = "ITR-2 is for individuals without business income but who may have capital gains.\n\
In addition to ITR-1 sections, you'll have specific schedules for:\n\
- Schedule CG: For Capital Gains from selling stocks, property, etc.\n\
- Schedule FA: For reporting foreign assets and income.\n\
It's crucial to have your broker statements and property sale documents handy.";

const FORM_COMPARISON: &str = "No problem.\n\
- ITR-1 (Sahaj) is for resident individuals with income up to ₹50 lakh from salary, one house property, and other sources.\n\
- ITR-2 is for those who don't have business income but might have capital gains or foreign assets.\n\
Which one sounds more like your situation?";

pub struct FilingGuide;

impl FilingGuide {
    pub fn run<C: Console>(&self, console: &mut C) -> Result<()> {
        console.say(&FILER, "I can guide you through the ITR filing process.");

        loop {
            console.say(
                &FILER,
                "Which ITR form are you planning to file? If unsure, type 'unsure'.",
            );
            let raw = console.prompt("Options: 'ITR-1', 'ITR-2', 'unsure': ")?;

            match raw.parse::<FilingForm>() {
                Ok(FilingForm::Itr1) => {
                    console.say(&FILER, ITR1_GUIDE);
                    return Ok(());
                }
                Ok(FilingForm::Itr2) => {
                    console.say(&FILER, ITR2_GUIDE);
                    return Ok(());
                }
                Ok(FilingForm::Unsure) => {
                    console.say(&FILER, FORM_COMPARISON);
                }
                Err(()) => {
                    console.say_error(&FILER, "Invalid option. Please choose from the list.");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::error::AdvisoryError;

    #[test]
    fn itr1_choice_prints_the_guide_and_finishes() {
        let mut console = ScriptedConsole::new(["ITR-1"]);

        FilingGuide.run(&mut console).unwrap();

        let spoken = console.said_by("Filer");
        assert!(spoken.last().unwrap().starts_with("Great, let's go through ITR-1"));
    }

    #[test]
    fn unsure_shows_the_comparison_then_asks_again() {
        let mut console = ScriptedConsole::new(["unsure", "itr-2"]);

        FilingGuide.run(&mut console).unwrap();

        let spoken = console.said_by("Filer");
        assert!(spoken.iter().any(|message| message.starts_with("No problem.")));
        assert!(spoken.last().unwrap().starts_with("ITR-2 is for individuals"));
        assert_eq!(console.prompts.len(), 2);
    }

    #[test]
    fn invalid_choice_is_recoverable() {
        let mut console = ScriptedConsole::new(["itr-7", "itr-1"]);

        FilingGuide.run(&mut console).unwrap();

        assert_eq!(console.errors.len(), 1);
        assert_eq!(
            console.errors[0].1,
            "Invalid option. Please choose from the list."
        );
    }

    #[test]
    fn closed_stream_terminates_the_loop() {
        let mut console = ScriptedConsole::new(["itr-7"]);

        let result = FilingGuide.run(&mut console);

        assert!(matches!(result, Err(AdvisoryError::InputClosed)));
    }
}
