//! Hazard log with the statutory fix window for each entry.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use rentshield_ai::{Analyst, analysis};
use rentshield_core::{Artifact, Hazard, HazardAssessment, Judgment};
use tracing::debug;

use crate::inflight::Inflight;

/// Reported hazards, most recent first. Append-only.
#[derive(Debug, Default)]
pub struct HazardTracker {
    hazards: VecDeque<Hazard>,
    inflight: Inflight,
}

#[derive(Debug)]
pub struct HazardTicket {
    generation: u64,
    photo: Artifact,
}

#[derive(Debug)]
pub struct HazardResolution {
    generation: u64,
    assessment: Judgment<HazardAssessment>,
}

impl HazardTicket {
    pub async fn run(self, analyst: &dyn Analyst) -> HazardResolution {
        let assessment = analysis::analyze_hazard(analyst, &self.photo).await;
        HazardResolution {
            generation: self.generation,
            assessment,
        }
    }
}

impl HazardResolution {
    pub fn assessment(&self) -> &Judgment<HazardAssessment> {
        &self.assessment
    }
}

impl HazardTracker {
    pub fn iter(&self) -> impl Iterator<Item = &Hazard> {
        self.hazards.iter()
    }

    pub fn len(&self) -> usize {
        self.hazards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }

    pub fn is_busy(&self) -> bool {
        self.inflight.is_busy()
    }

    /// Each hazard with its whole days left in the fix window at `now`.
    pub fn deadlines_at(&self, now: DateTime<Utc>) -> impl Iterator<Item = (&Hazard, i64)> {
        self.hazards.iter().map(move |h| (h, h.days_left_at(now)))
    }

    pub fn overdue_at(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Hazard> {
        self.hazards.iter().filter(move |h| h.is_overdue_at(now))
    }

    pub(crate) fn begin(&mut self, photo: Option<Artifact>) -> Option<HazardTicket> {
        let Some(photo) = photo else {
            debug!("no photo selected, hazard report not started");
            return None;
        };
        let Some(generation) = self.inflight.start() else {
            debug!("hazard analysis already in progress, photo ignored");
            return None;
        };
        Some(HazardTicket { generation, photo })
    }

    /// Log the hazard. Always recorded; the returned flag says whether the
    /// view was still waiting for this resolution.
    pub(crate) fn settle(
        &mut self,
        resolution: HazardResolution,
        reported_at: DateTime<Utc>,
    ) -> (&Hazard, bool) {
        let current = self.inflight.settle(resolution.generation);
        self.hazards
            .push_front(Hazard::reported(resolution.assessment.value, reported_at));
        (&self.hazards[0], current)
    }

    pub(crate) fn leave(&mut self) {
        self.inflight.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rentshield_core::Severity;

    fn assessment(kind: &str, severity: Severity) -> Judgment<HazardAssessment> {
        Judgment::model(HazardAssessment {
            kind: kind.into(),
            severity,
            description: "Observed in photo.".into(),
        })
    }

    fn report(t: &mut HazardTracker, kind: &str, at: DateTime<Utc>) {
        let ticket = t.begin(Artifact::new(vec![9])).unwrap();
        let res = HazardResolution {
            generation: ticket.generation,
            assessment: assessment(kind, Severity::High),
        };
        t.settle(res, at);
    }

    #[test]
    fn hazards_are_prepended() {
        let mut t = HazardTracker::default();
        let now = Utc::now();
        report(&mut t, "Damp", now);
        report(&mut t, "Broken Boiler", now);
        let kinds: Vec<&str> = t.iter().map(|h| h.kind()).collect();
        assert_eq!(kinds, vec!["Broken Boiler", "Damp"]);
    }

    #[test]
    fn no_photo_no_report() {
        let mut t = HazardTracker::default();
        assert!(t.begin(None).is_none());
        assert!(!t.is_busy());
    }

    #[test]
    fn stale_resolution_still_recorded() {
        let mut t = HazardTracker::default();
        let ticket = t.begin(Artifact::new(vec![1])).unwrap();
        t.leave();
        let res = HazardResolution {
            generation: ticket.generation,
            assessment: assessment("Structural Leak", Severity::Critical),
        };
        let (hazard, current) = t.settle(res, Utc::now());
        assert!(!current);
        assert_eq!(hazard.kind(), "Structural Leak");
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn deadlines_and_overdue() {
        let mut t = HazardTracker::default();
        let now = Utc::now();
        report(&mut t, "Old", now - Duration::days(20));
        report(&mut t, "Fresh", now - Duration::days(2));

        let days: Vec<(&str, i64)> = t.deadlines_at(now).map(|(h, d)| (h.kind(), d)).collect();
        assert_eq!(days, vec![("Fresh", 12), ("Old", 0)]);

        let overdue: Vec<&str> = t.overdue_at(now).map(|h| h.kind()).collect();
        assert_eq!(overdue, vec!["Old"]);
    }
}
