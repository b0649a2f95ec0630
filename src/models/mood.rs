use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::error::EngineError;

/// Mood selected by the user for a recommendation request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Confident,
    Relaxed,
    Energetic,
    Romantic,
    Professional,
    Creative,
}

impl Mood {
    /// All selectable moods
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Confident,
        Mood::Relaxed,
        Mood::Energetic,
        Mood::Romantic,
        Mood::Professional,
        Mood::Creative,
    ];

    /// Lower-case name, as clients send it
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Confident => "confident",
            Mood::Relaxed => "relaxed",
            Mood::Energetic => "energetic",
            Mood::Romantic => "romantic",
            Mood::Professional => "professional",
            Mood::Creative => "creative",
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mood {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "confident" => Ok(Mood::Confident),
            "relaxed" => Ok(Mood::Relaxed),
            "energetic" => Ok(Mood::Energetic),
            "romantic" => Ok(Mood::Romantic),
            "professional" => Ok(Mood::Professional),
            "creative" => Ok(Mood::Creative),
            _ => Err(EngineError::UnknownMood(s.to_string())),
        }
    }
}
