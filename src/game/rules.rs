use super::choice::Choice;

/// The beats-relation. Each entry reads "key beats value".
pub struct Rules;

impl Rules {
    const TABLE: [(Choice, Choice); 3] = [
        (Choice::Schere, Choice::Papier),
        (Choice::Stein, Choice::Schere),
        (Choice::Papier, Choice::Stein),
    ];

    /// The one choice that `choice` beats.
    pub const fn beats(choice: Choice) -> Choice {
        Self::TABLE[choice as usize].1
    }
}
