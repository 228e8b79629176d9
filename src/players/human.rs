use crate::console::Console;
use crate::game::Outcome;
use crate::game::Turn;
use anyhow::Context;
use colored::ColoredString;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::console::Term;

/// Interactive terminal console with line editing and colored results.
/// Prompts, answers and results all go to stdout; stderr is left to the logger.
/// Ctrl-D is swallowed by the line editor, so this console never reports
/// exhausted input. Answering anything but "ja" ends the session.
#[derive(Debug)]
pub struct Human {
    term: Term,
}

impl Default for Human {
    fn default() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Console for Human {
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        if prompt.starts_with('\n') {
            self.say("")?;
        }
        let answer = Input::<String>::new()
            .with_prompt(prompt.trim())
            .allow_empty(true)
            .report(false)
            .interact_text_on(&self.term)
            .context("read answer from terminal")?;
        Ok(Some(answer))
    }
    fn say(&mut self, line: &str) -> anyhow::Result<()> {
        self.term.write_line(line).context("write line to terminal")
    }
    fn announce(&mut self, turn: &Turn) -> anyhow::Result<()> {
        self.say(&format!("\n{}\n", paint(turn)))
    }
}

/// Result message styled by outcome.
pub fn paint(turn: &Turn) -> ColoredString {
    let message = turn.to_string();
    match turn.outcome() {
        Outcome::UserWins => message.green().bold(),
        Outcome::ComputerWins => message.red(),
        Outcome::Draw => message.yellow(),
        Outcome::InvalidInput => message.dimmed(),
    }
}
