#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Alternative,
    Blues,
    Classical,
    Country,
    Electronic,
    Folk,
    Funk,
    HipHop,
    HeavyMetal,
    Instrumental,
    Jazz,
    MusicalTheatre,
    Pop,
    Punk,
    RnB,
    Reggae,
    RockNRoll,
    Soul,
    Other,
}

impl Genre {
    pub const ALL: [Self; 19] = [
        Self::Alternative,
        Self::Blues,
        Self::Classical,
        Self::Country,
        Self::Electronic,
        Self::Folk,
        Self::Funk,
        Self::HipHop,
        Self::HeavyMetal,
        Self::Instrumental,
        Self::Jazz,
        Self::MusicalTheatre,
        Self::Pop,
        Self::Punk,
        Self::RnB,
        Self::Reggae,
        Self::RockNRoll,
        Self::Soul,
        Self::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alternative => "Alternative",
            Self::Blues => "Blues",
            Self::Classical => "Classical",
            Self::Country => "Country",
            Self::Electronic => "Electronic",
            Self::Folk => "Folk",
            Self::Funk => "Funk",
            Self::HipHop => "Hip-Hop",
            Self::HeavyMetal => "Heavy Metal",
            Self::Instrumental => "Instrumental",
            Self::Jazz => "Jazz",
            Self::MusicalTheatre => "Musical Theatre",
            Self::Pop => "Pop",
            Self::Punk => "Punk",
            Self::RnB => "R&B",
            Self::Reggae => "Reggae",
            Self::RockNRoll => "Rock n Roll",
            Self::Soul => "Soul",
            Self::Other => "Other",
        }
    }

    /// Matches a submitted genre against the stored labels, ignoring case and
    /// surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|genre| genre.as_str().eq_ignore_ascii_case(value))
    }
}

/// Two-letter codes accepted for the `state` field of venues and artists.
pub const US_STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub fn parse_state(value: &str) -> Option<&'static str> {
    let value = value.trim();
    US_STATES
        .into_iter()
        .find(|code| code.eq_ignore_ascii_case(value))
}
