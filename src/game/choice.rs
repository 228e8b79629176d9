/// One of the three throws.
/// Discriminants follow the order the options are offered in.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    Schere = 0,
    Stein = 1,
    Papier = 2,
}

impl Choice {
    pub const fn all() -> [Self; 3] {
        [Self::Schere, Self::Stein, Self::Papier]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Schere => "schere",
            Self::Stein => "stein",
            Self::Papier => "papier",
        }
    }
    /// Name with its first letter upper-cased, as German nouns are written.
    pub fn label(&self) -> String {
        capitalize(self.name())
    }
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl From<u8> for Choice {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::Schere,
            1 => Self::Stein,
            2 => Self::Papier,
            _ => panic!("invalid choice index {}", n),
        }
    }
}
impl From<Choice> for u8 {
    fn from(c: Choice) -> u8 {
        c as u8
    }
}

/// case-insensitive lookup by name
impl TryFrom<&str> for Choice {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let folded = s.to_lowercase();
        Self::all()
            .into_iter()
            .find(|c| c.name() == folded)
            .ok_or_else(|| anyhow::anyhow!("not a choice: {}", s))
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Choice::try_from("SCHERE").unwrap(), Choice::Schere);
        assert_eq!(Choice::try_from("schere").unwrap(), Choice::Schere);
        assert_eq!(Choice::try_from("PaPiEr").unwrap(), Choice::Papier);
        assert_eq!(Choice::try_from("Stein").unwrap(), Choice::Stein);
    }

    #[test]
    fn parse_rejects_other_text() {
        assert!(Choice::try_from("").is_err());
        assert!(Choice::try_from("günther").is_err());
        assert!(Choice::try_from(" stein").is_err());
        assert!(Choice::try_from("rock").is_err());
    }

    #[test]
    fn index_isomorphism() {
        for choice in Choice::all() {
            assert_eq!(Choice::from(u8::from(choice)), choice);
        }
    }

    #[test]
    fn labels_are_capitalized() {
        assert_eq!(Choice::Stein.label(), "Stein");
        assert_eq!(Choice::Schere.label(), "Schere");
        assert_eq!(Choice::Papier.label(), "Papier");
        assert_eq!(capitalize("dr. Strange"), "Dr. Strange");
        assert_eq!(capitalize("über"), "Über");
        assert_eq!(capitalize(""), "");
    }
}
