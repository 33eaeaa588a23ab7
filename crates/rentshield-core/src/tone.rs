use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Register of a drafted reply to a landlord.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Diplomatic,
    Firm,
    #[serde(rename = "Strictly Legal")]
    StrictlyLegal,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Self::Diplomatic, Self::Firm, Self::StrictlyLegal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Diplomatic => "Diplomatic",
            Self::Firm => "Firm",
            Self::StrictlyLegal => "Strictly Legal",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        match normalised.as_str() {
            "diplomatic" => Ok(Self::Diplomatic),
            "firm" => Ok(Self::Firm),
            "strictlylegal" | "legal" => Ok(Self::StrictlyLegal),
            _ => Err(ParseError::UnknownTone(s.to_string())),
        }
    }
}
