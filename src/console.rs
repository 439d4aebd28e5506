//! Terminal seam for the interactive pipeline
//!
//! The specialists talk to the user through the `Console` trait so the
//! interactive loops can also be driven by a bounded scripted stream.

use crate::error::AdvisoryError;
use crate::Result;
use colored::{Color, Colorize};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Display identity for one speaking agent.
#[derive(Debug, Clone, Copy)]
pub struct Persona {
    pub name: &'static str,
    pub color: Color,
}

pub trait Console {
    /// Normal persona message.
    fn say(&mut self, persona: &Persona, message: &str);

    /// Recoverable-error persona message.
    fn say_error(&mut self, persona: &Persona, message: &str);

    /// System notice, e.g. the thinking indicator before a backend call.
    fn notice(&mut self, message: &str);

    /// Prompt the user and return the trimmed reply line.
    fn prompt(&mut self, text: &str) -> Result<String>;
}

/// Console backed by stdin/stdout with colored persona output.
pub struct TerminalConsole {
    pace: Duration,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            pace: Duration::from_millis(1500),
        }
    }

    /// Override the pause inserted after each persona message.
    pub fn with_pace(pace: Duration) -> Self {
        Self { pace }
    }

    fn emit(&self, persona: &Persona, message: &str, body_color: Color) {
        println!();
        println!("{}", format!("{}:", persona.name).color(persona.color).bold());
        println!("{}", message.color(body_color));
        if !self.pace.is_zero() {
            std::thread::sleep(self.pace);
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn say(&mut self, persona: &Persona, message: &str) {
        self.emit(persona, message, persona.color);
    }

    fn say_error(&mut self, persona: &Persona, message: &str) {
        self.emit(persona, message, Color::Red);
    }

    fn notice(&mut self, message: &str) {
        println!("\n{}", message.blue());
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        print!("{}", format!("> {}", text).yellow());
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(AdvisoryError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

/// Scripted console for headless harnesses.
///
/// Serves a bounded queue of canned inputs and records everything the
/// agents emit; an exhausted queue surfaces as `InputClosed` so the
/// validation loops terminate instead of spinning. Keeps the pipeline
/// exercisable without a terminal, the same way a mock planner keeps an
/// orchestrator functional without an LLM.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub messages: Vec<(String, String)>,
    pub errors: Vec<(String, String)>,
    pub notices: Vec<String>,
    pub prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// All normal messages spoken by `name`, in order.
    pub fn said_by(&self, name: &str) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(speaker, _)| speaker == name)
            .map(|(_, message)| message.as_str())
            .collect()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, persona: &Persona, message: &str) {
        self.messages
            .push((persona.name.to_string(), message.to_string()));
    }

    fn say_error(&mut self, persona: &Persona, message: &str) {
        self.errors
            .push((persona.name.to_string(), message.to_string()));
    }

    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        self.prompts.push(text.to_string());
        self.inputs.pop_front().ok_or(AdvisoryError::InputClosed)
    }
}
