use crate::players::Strategy;
use clap::ArgAction;
use clap::Parser;

/// Schere, Stein, Papier gegen den Computer.
#[derive(Debug, Clone, Parser)]
#[command(name = "schnick", version, about)]
pub struct Config {
    /// Seed for the computer's random throws.
    #[arg(long)]
    pub seed: Option<u64>,
    /// How the computer picks its throw.
    #[arg(long, value_enum, default_value_t = Strategy::Uniform)]
    pub draw: Strategy,
    /// Use the plain line console even on a terminal.
    #[arg(long)]
    pub plain: bool,
    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
    /// Whether to drive the interactive terminal console.
    pub fn interactive(&self) -> bool {
        use std::io::IsTerminal;
        self.interactive_on(std::io::stdin().is_terminal(), std::io::stdout().is_terminal())
    }
    /// The interactive console reads stdin and draws on stdout only,
    /// so a redirected stderr has no say in the choice.
    pub fn interactive_on(&self, stdin: bool, stdout: bool) -> bool {
        !self.plain && stdin && stdout
    }
}
