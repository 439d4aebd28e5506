//! Validated input loop shared by the specialist steps

use crate::console::{Console, Persona};
use crate::Result;

/// Repeatedly prompts until both `parse` and `validate` accept the input.
///
/// Parse and validation failures are recoverable: the rejection message is
/// spoken by `persona` and the prompt repeats, so the returned value is
/// always valid. Interactively this loops until the user complies; a
/// scripted console ends the loop with `InputClosed` once its bounded
/// inputs run dry.
pub fn read_validated<C, T, P, V>(
    console: &mut C,
    persona: &Persona,
    prompt: &str,
    parse: P,
    validate: V,
) -> Result<T>
where
    C: Console,
    P: Fn(&str) -> std::result::Result<T, String>,
    V: Fn(&T) -> std::result::Result<(), String>,
{
    loop {
        let raw = console.prompt(prompt)?;

        let value = match parse(raw.trim()) {
            Ok(value) => value,
            Err(message) => {
                console.say_error(persona, &message);
                continue;
            }
        };

        if let Err(message) = validate(&value) {
            console.say_error(persona, &message);
            continue;
        }

        return Ok(value);
    }
}

/// Parse a monetary amount, rejecting non-numeric text.
pub fn parse_amount(raw: &str) -> std::result::Result<f64, String> {
    raw.parse::<f64>()
        .map_err(|_| "That doesn't look like a valid number. Please try again.".to_string())
}

/// Amounts must be zero or positive.
pub fn non_negative(noun: &'static str) -> impl Fn(&f64) -> std::result::Result<(), String> {
    move |value| {
        if *value >= 0.0 {
            Ok(())
        } else {
            Err(format!("{} must be a positive number.", noun))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::error::AdvisoryError;
    use colored::Color;

    const TESTER: Persona = Persona {
        name: "Tester",
        color: Color::Cyan,
    };

    #[test]
    fn rejects_until_the_first_valid_value() {
        let mut console = ScriptedConsole::new(["abc", "-5", "42"]);

        let value = read_validated(
            &mut console,
            &TESTER,
            "Amount: ",
            parse_amount,
            non_negative("Amount"),
        )
        .unwrap();

        assert_eq!(value, 42.0);
        assert_eq!(console.prompts.len(), 3);
        assert_eq!(console.errors.len(), 2);
        assert_eq!(
            console.errors[0].1,
            "That doesn't look like a valid number. Please try again."
        );
        assert_eq!(console.errors[1].1, "Amount must be a positive number.");
    }

    #[test]
    fn terminates_when_the_bounded_stream_closes() {
        let mut console = ScriptedConsole::new(["not-a-number"]);

        let result = read_validated(
            &mut console,
            &TESTER,
            "Amount: ",
            parse_amount,
            non_negative("Amount"),
        );

        assert!(matches!(result, Err(AdvisoryError::InputClosed)));
    }

    #[test]
    fn nan_is_caught_by_range_validation() {
        let mut console = ScriptedConsole::new(["nan", "0"]);

        let value = read_validated(
            &mut console,
            &TESTER,
            "Amount: ",
            parse_amount,
            non_negative("Amount"),
        )
        .unwrap();

        assert_eq!(value, 0.0);
        assert_eq!(console.errors.len(), 1);
    }
}
