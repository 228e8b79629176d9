//! Line-oriented text I/O for the game loop.
//!
//! The session only needs "ask for one line" and "print one line". The
//! plain [`Stdio`] console works over any reader/writer pair and backs both
//! piped stdin and the tests; the interactive [`crate::Human`] console drives
//! a real terminal.
pub mod stdio;
pub use stdio::*;

use crate::game::Turn;

pub trait Console {
    /// Show `prompt` and block for one line of input.
    /// Yields `None` once the input is exhausted.
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
    /// Print one line.
    fn say(&mut self, line: &str) -> anyhow::Result<()>;
    /// Print the result of a finished turn.
    fn announce(&mut self, turn: &Turn) -> anyhow::Result<()> {
        self.say(&format!("\n{}\n", turn))
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        (**self).ask(prompt)
    }
    fn say(&mut self, line: &str) -> anyhow::Result<()> {
        (**self).say(line)
    }
    fn announce(&mut self, turn: &Turn) -> anyhow::Result<()> {
        (**self).announce(turn)
    }
}
