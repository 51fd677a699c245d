use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Learner personality, selecting a visual preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Personality {
    /// Minimal, calm, focus-oriented.
    Introvert,
    /// Balanced.
    #[default]
    Ambivert,
    /// Gamified, loud, social-oriented.
    Extrovert,
}

/// Presentation parameters for a personality.
///
/// Themes never affect content or scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Stable css token, used as `theme-{id}`.
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Prefix shown before quiz feedback.
    pub feedback_intro: &'static str,
}

const INTROVERT: Theme = Theme {
    id: "introvert",
    label: "Focus Mode",
    description: "Minimalist. Calm. Deep work.",
    feedback_intro: "Analysis:",
};

const AMBIVERT: Theme = Theme {
    id: "ambivert",
    label: "Balanced",
    description: "Professional. Structured. Clear.",
    feedback_intro: "Feedback:",
};

const EXTROVERT: Theme = Theme {
    id: "extrovert",
    label: "Power Mode",
    description: "High energy. Gamified. Social.",
    feedback_intro: "Boom!",
};

impl Personality {
    pub const ALL: [Personality; 3] = [
        Personality::Introvert,
        Personality::Ambivert,
        Personality::Extrovert,
    ];

    #[must_use]
    pub fn theme(self) -> &'static Theme {
        match self {
            Personality::Introvert => &INTROVERT,
            Personality::Ambivert => &AMBIVERT,
            Personality::Extrovert => &EXTROVERT,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Personality::Introvert => "Introvert",
            Personality::Ambivert => "Ambivert",
            Personality::Extrovert => "Extrovert",
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown personality: {0} (expected introvert, ambivert or extrovert)")]
pub struct ParsePersonalityError(String);

impl FromStr for Personality {
    type Err = ParsePersonalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        Personality::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(normalized) || p.theme().id == normalized)
            .ok_or_else(|| ParsePersonalityError(s.to_string()))
    }
}
