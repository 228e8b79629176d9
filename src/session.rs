use crate::console::Console;
use crate::game::Choice;
use crate::game::Turn;
use crate::players::Opponent;

/// Question asked at the start of every turn.
pub const CHOICE_PROMPT: &str = "\n✂️ Schere, 💎 Stein oder 🧻 Papier?\n\n";
/// Question asked after every turn.
pub const REPLAY_PROMPT: &str = "Noch einmal spielen? (Ja | Nein)\n\n";
/// The only answer that keeps the session going, compared case-insensitively.
pub const AFFIRMATIVE: &str = "ja";

/// The game loop. Owns its console for the whole session and
/// releases it exactly once, when the user stops playing.
#[derive(Debug)]
pub struct Session<C, O> {
    console: C,
    opponent: O,
}

impl<C: Console, O: Opponent> Session<C, O> {
    pub fn new(console: C, opponent: O) -> Self {
        Self { console, opponent }
    }

    /// Play turns until the user declines a replay or input runs out.
    pub fn run(mut self) -> anyhow::Result<()> {
        log::info!("session started");
        while let Some(turn) = self.turn()? {
            log::debug!(
                "{:?} vs {} -> {}",
                turn.input(),
                turn.computer(),
                turn.outcome()
            );
            self.console.announce(&turn)?;
            if !self.replay()? {
                break;
            }
        }
        drop(self.console);
        log::info!("session closed");
        Ok(())
    }

    /// Prompt for the user's choice and pair it with a fresh computer throw.
    pub fn turn(&mut self) -> anyhow::Result<Option<Turn>> {
        match self.prompt()? {
            None => Ok(None),
            Some(input) => Ok(Some(Turn::new(input, self.draw()))),
        }
    }

    /// One raw line of user input, `None` when input is exhausted.
    pub fn prompt(&mut self) -> anyhow::Result<Option<String>> {
        self.console.ask(CHOICE_PROMPT)
    }

    pub fn draw(&mut self) -> Choice {
        self.opponent.throw()
    }

    /// Ask whether to play again.
    pub fn replay(&mut self) -> anyhow::Result<bool> {
        Ok(self
            .console
            .ask(REPLAY_PROMPT)?
            .is_some_and(|answer| affirmative(&answer)))
    }
}

/// Exact case-insensitive match against the affirmative token.
pub fn affirmative(answer: &str) -> bool {
    answer.to_lowercase() == AFFIRMATIVE
}
