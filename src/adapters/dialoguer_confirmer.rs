use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Confirm;

use crate::domain::AppError;
use crate::ports::Confirmer;

/// Asks on the terminal, or reads one line when stdin is piped.
///
/// Escape, Ctrl-C, end of input and anything other than `y`/`yes` count as "no".
#[derive(Debug, Clone, Default)]
pub struct DialoguerConfirmer;

impl DialoguerConfirmer {
    pub fn new() -> Self {
        Self
    }

    fn confirm_interactive(prompt: &str) -> Result<bool, AppError> {
        match Confirm::new().with_prompt(prompt).default(false).interact_opt() {
            Ok(answer) => Ok(answer.unwrap_or(false)),
            Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => Ok(false),
            Err(err) => {
                Err(AppError::config_error(format!("Failed to read confirmation: {}", err)))
            }
        }
    }

    fn confirm_piped(prompt: &str, input: &mut impl BufRead) -> Result<bool, AppError> {
        print!("{} [y/N] ", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        println!();
        Ok(is_affirmative(&line))
    }
}

impl Confirmer for DialoguerConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            Self::confirm_interactive(prompt)
        } else {
            Self::confirm_piped(prompt, &mut stdin.lock())
        }
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Answers yes to everything (`--yes`).
#[derive(Debug, Clone, Default)]
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        println!("{} [auto-confirmed]", prompt);
        Ok(true)
    }
}
