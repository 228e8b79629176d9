use super::choice::Choice;
use super::outcome::Outcome;

/// One prompt/response cycle.
/// Holds the user's text exactly as typed so it can be echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    input: String,
    computer: Choice,
}

impl Turn {
    pub fn new(input: String, computer: Choice) -> Self {
        Self { input, computer }
    }
    pub fn input(&self) -> &str {
        &self.input
    }
    pub fn user(&self) -> Option<Choice> {
        Choice::try_from(self.input.as_str()).ok()
    }
    pub fn computer(&self) -> Choice {
        self.computer
    }
    pub fn outcome(&self) -> Outcome {
        Outcome::resolve(&self.input, self.computer)
    }
}

/// the German result message
impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.outcome() {
            Outcome::InvalidInput => write!(f, "\"{}\" ist keine valide Option!", self.input),
            Outcome::Draw => write!(f, "Unentschieden!"),
            Outcome::ComputerWins => {
                write!(f, "Du hast gegen {} verloren.", self.computer.label())
            }
            Outcome::UserWins => {
                write!(f, "🎉 Du hast gegen {} gewonnen! 🎉", self.computer.label())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_echoed_verbatim() {
        let turn = Turn::new(String::from("Günther"), Choice::Papier);
        assert_eq!(turn.outcome(), Outcome::InvalidInput);
        assert_eq!(turn.user(), None);
        assert_eq!(turn.to_string(), "\"Günther\" ist keine valide Option!");
        let turn = Turn::new(String::from("günther"), Choice::Stein);
        assert!(turn.to_string().contains("günther"));
    }

    #[test]
    fn draw_names_nobody() {
        let turn = Turn::new(String::from("STEIN"), Choice::Stein);
        assert_eq!(turn.outcome(), Outcome::Draw);
        assert_eq!(turn.to_string(), "Unentschieden!");
    }

    #[test]
    fn loss_names_the_computer() {
        let turn = Turn::new(String::from("schere"), Choice::Stein);
        assert_eq!(turn.outcome(), Outcome::ComputerWins);
        assert_eq!(turn.to_string(), "Du hast gegen Stein verloren.");
    }

    #[test]
    fn win_names_the_computer() {
        let turn = Turn::new(String::from("Papier"), Choice::Stein);
        assert_eq!(turn.outcome(), Outcome::UserWins);
        assert_eq!(turn.user(), Some(Choice::Papier));
        assert_eq!(turn.to_string(), "🎉 Du hast gegen Stein gewonnen! 🎉");
    }

    #[test]
    fn agrees_with_resolve() {
        for input in ["schere", "STEIN", "Papier", "nope", ""] {
            for computer in Choice::all() {
                let turn = Turn::new(String::from(input), computer);
                assert_eq!(turn.outcome(), Outcome::resolve(input, computer));
            }
        }
    }
}
