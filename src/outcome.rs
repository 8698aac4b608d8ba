use crate::sound::SoundKey;

/// Round result announced by the page (`body[data-result]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// Case-insensitive; the loss label is accepted with or without its accent.
    /// Anything else, including the empty string, is not an outcome.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "victoire" => Some(Outcome::Win),
            "défaite" | "defaite" => Some(Outcome::Loss),
            _ => None,
        }
    }

    pub fn sound_key(self) -> SoundKey {
        match self {
            Outcome::Win => SoundKey::Win,
            Outcome::Loss => SoundKey::Lose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_result_labels() {
        assert_eq!(Outcome::parse("victoire"), Some(Outcome::Win));
        assert_eq!(Outcome::parse("Victoire"), Some(Outcome::Win));
        assert_eq!(Outcome::parse("défaite"), Some(Outcome::Loss));
        assert_eq!(Outcome::parse("DÉFAITE"), Some(Outcome::Loss));
        assert_eq!(Outcome::parse("defaite"), Some(Outcome::Loss));
    }

    #[test]
    fn other_labels_are_ignored() {
        for raw in ["", "egalite", "égalité", "push", "victoires", " victoire"] {
            assert_eq!(Outcome::parse(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn outcome_maps_to_channel() {
        assert_eq!(Outcome::Win.sound_key(), SoundKey::Win);
        assert_eq!(Outcome::Loss.sound_key(), SoundKey::Lose);
    }
}
