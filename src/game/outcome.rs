use super::choice::Choice;
use super::rules::Rules;

/// Result of a single turn, from the user's side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Draw,
    UserWins,
    ComputerWins,
    InvalidInput,
}

impl Outcome {
    /// Classify raw user text against the computer's throw.
    pub fn resolve(input: &str, computer: Choice) -> Self {
        match Choice::try_from(input) {
            Err(_) => Self::InvalidInput,
            Ok(user) => Self::versus(user, computer),
        }
    }
    /// With draws excluded, the cycle leaves exactly one winner,
    /// so a single lookup decides it.
    pub fn versus(user: Choice, computer: Choice) -> Self {
        if user == computer {
            Self::Draw
        } else if Rules::beats(computer) == user {
            Self::ComputerWins
        } else {
            Self::UserWins
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Draw => write!(f, "draw"),
            Self::UserWins => write!(f, "user wins"),
            Self::ComputerWins => write!(f, "computer wins"),
            Self::InvalidInput => write!(f, "invalid input"),
        }
    }
}
