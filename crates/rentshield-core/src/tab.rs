use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Top-level views. Exactly one is active while signed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Scan,
    Tracker,
    Rights,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Self::Overview,
        Self::Scan,
        Self::Tracker,
        Self::Rights,
        Self::Profile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Scan => "scan",
            Self::Tracker => "tracker",
            Self::Rights => "rights",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == wanted)
            .ok_or_else(|| ParseError::UnknownTab(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_overview() {
        assert_eq!(Tab::default(), Tab::Overview);
    }

    #[test]
    fn parse_round_trips_names() {
        for tab in Tab::ALL {
            assert_eq!(tab.as_str().parse::<Tab>().unwrap(), tab);
        }
        assert_eq!("Tracker".parse::<Tab>().unwrap(), Tab::Tracker);
        assert_eq!(
            "settings".parse::<Tab>(),
            Err(ParseError::UnknownTab("settings".into()))
        );
    }
}
