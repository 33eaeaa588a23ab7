//! Reported housing hazards.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fix_window;
use crate::verdict::HazardAssessment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Landlord-facing progress of a hazard. Only `Reported` is produced today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardStatus {
    Reported,
    #[serde(rename = "Landlord Notified")]
    LandlordNotified,
    #[serde(rename = "Action Required")]
    ActionRequired,
    Resolved,
}

impl HazardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reported => "Reported",
            Self::LandlordNotified => "Landlord Notified",
            Self::ActionRequired => "Action Required",
            Self::Resolved => "Resolved",
        }
    }
}

/// A hazard logged from a photo. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hazard {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    description: String,
    severity: Severity,
    reported_at: DateTime<Utc>,
    status: HazardStatus,
}

impl Hazard {
    /// Log a new hazard from a model assessment, starting its fix window at `reported_at`.
    pub fn reported(assessment: HazardAssessment, reported_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: assessment.kind,
            description: assessment.description,
            severity: assessment.severity,
            reported_at,
            status: HazardStatus::Reported,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Category label, e.g. "Black Mould".
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn reported_at(&self) -> DateTime<Utc> {
        self.reported_at
    }

    pub fn status(&self) -> HazardStatus {
        self.status
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        fix_window::deadline(self.reported_at)
    }

    pub fn days_left_at(&self, now: DateTime<Utc>) -> i64 {
        fix_window::days_left(self.reported_at, now)
    }

    /// Window has elapsed and the hazard is not resolved.
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        self.status != HazardStatus::Resolved && now >= self.deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn mould() -> HazardAssessment {
        HazardAssessment {
            kind: "Black Mould".into(),
            severity: Severity::Critical,
            description: "Extensive growth on bedroom ceiling.".into(),
        }
    }

    #[test]
    fn reported_hazard_copies_assessment() {
        let at = Utc.with_ymd_and_hms(2026, 1, 10, 8, 0, 0).unwrap();
        let h = Hazard::reported(mould(), at);
        assert_eq!(h.kind(), "Black Mould");
        assert_eq!(h.severity(), Severity::Critical);
        assert_eq!(h.status(), HazardStatus::Reported);
        assert_eq!(h.reported_at(), at);
    }

    #[test]
    fn ids_are_unique() {
        let at = Utc::now();
        let a = Hazard::reported(mould(), at);
        let b = Hazard::reported(mould(), at);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn one_day_later_thirteen_left() {
        let at = Utc.with_ymd_and_hms(2026, 1, 10, 8, 0, 0).unwrap();
        let h = Hazard::reported(mould(), at);
        assert_eq!(h.days_left_at(at), 14);
        assert_eq!(h.days_left_at(at + Duration::days(1)), 13);
    }

    #[test]
    fn overdue_once_window_closes() {
        let at = Utc.with_ymd_and_hms(2026, 1, 10, 8, 0, 0).unwrap();
        let h = Hazard::reported(mould(), at);
        assert!(!h.is_overdue_at(at + Duration::days(13)));
        assert!(h.is_overdue_at(at + Duration::days(14)));
        assert!(h.is_overdue_at(at + Duration::days(30)));
    }

    #[test]
    fn status_serializes_with_spaces() {
        let json = serde_json::to_string(&HazardStatus::LandlordNotified).unwrap();
        assert_eq!(json, "\"Landlord Notified\"");
    }
}
