/// One of the five fixed audio channels on the table page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SoundKey {
    Click,
    Card,
    Win,
    Lose,
    Bg,
}

impl SoundKey {
    pub const COUNT: usize = 5;

    pub const ALL: [SoundKey; SoundKey::COUNT] = [
        SoundKey::Click,
        SoundKey::Card,
        SoundKey::Win,
        SoundKey::Lose,
        SoundKey::Bg,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SoundKey::Click => "click",
            SoundKey::Card => "card",
            SoundKey::Win => "win",
            SoundKey::Lose => "lose",
            SoundKey::Bg => "bg",
        }
    }

    pub fn parse(v: &str) -> Option<Self> {
        match v {
            "click" => Some(SoundKey::Click),
            "card" => Some(SoundKey::Card),
            "win" => Some(SoundKey::Win),
            "lose" => Some(SoundKey::Lose),
            "bg" => Some(SoundKey::Bg),
            _ => None,
        }
    }

    /// Volume used when nothing valid is stored for this channel.
    pub fn default_volume(self) -> f64 {
        match self {
            SoundKey::Click | SoundKey::Card => 0.4,
            SoundKey::Win | SoundKey::Lose => 0.45,
            SoundKey::Bg => 0.2,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            SoundKey::Click => 0,
            SoundKey::Card => 1,
            SoundKey::Win => 2,
            SoundKey::Lose => 3,
            SoundKey::Bg => 4,
        }
    }
}

/// Sound tag carried by an interactive button (`data-sound`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoundCategory {
    #[default]
    Click,
    Card,
}

impl SoundCategory {
    /// Missing or unrecognised tags fall back to the plain click.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("card") => SoundCategory::Card,
            _ => SoundCategory::Click,
        }
    }

    pub fn sound_key(self) -> SoundKey {
        match self {
            SoundCategory::Click => SoundKey::Click,
            SoundCategory::Card => SoundKey::Card,
        }
    }
}
