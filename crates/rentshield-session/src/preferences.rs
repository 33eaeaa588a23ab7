//! Session-scoped user preferences. Lost when the process exits.

use std::fmt;
use std::str::FromStr;

use rentshield_core::ParseError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accessibility {
    pub high_contrast: bool,
    pub large_text: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Fix-window expiry alerts.
    Deadlines,
    /// Renters' rights news.
    Legal,
    /// Local rent trend warnings.
    Market,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 3] = [Self::Deadlines, Self::Legal, Self::Market];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deadlines => "deadlines",
            Self::Legal => "legal",
            Self::Market => "market",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| ParseError::UnknownNotificationKind(s.to_string()))
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationSettings {
    pub deadlines: bool,
    pub legal: bool,
    pub market: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            deadlines: true,
            legal: true,
            market: false,
        }
    }
}

impl NotificationSettings {
    pub fn get(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Deadlines => self.deadlines,
            NotificationKind::Legal => self.legal,
            NotificationKind::Market => self.market,
        }
    }

    pub fn set(&mut self, kind: NotificationKind, enabled: bool) {
        match kind {
            NotificationKind::Deadlines => self.deadlines = enabled,
            NotificationKind::Legal => self.legal = enabled,
            NotificationKind::Market => self.market = enabled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivacySettings {
    pub share_data: bool,
    pub local_only: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            share_data: true,
            local_only: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
    pub accessibility: Accessibility,
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
}
