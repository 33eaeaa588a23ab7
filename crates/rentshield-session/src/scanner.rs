//! Document scanner view: mode selection, busy state and the visible result.

use rentshield_ai::{Analyst, analysis};
use rentshield_core::{Artifact, Judgment, ScanKind, ScanOutcome};
use tracing::debug;

use crate::inflight::Inflight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Analyzing,
    Resolved,
}

#[derive(Debug, Default)]
pub struct Scanner {
    kind: ScanKind,
    inflight: Inflight,
    result: Option<Judgment<ScanOutcome>>,
}

/// A submitted artifact waiting for the model.
#[derive(Debug)]
pub struct ScanTicket {
    generation: u64,
    kind: ScanKind,
    artifact: Artifact,
}

/// A resolved scan, ready to be applied to the session.
#[derive(Debug)]
pub struct ScanResolution {
    generation: u64,
    outcome: Judgment<ScanOutcome>,
}

impl ScanTicket {
    pub fn kind(&self) -> ScanKind {
        self.kind
    }

    pub async fn run(self, analyst: &dyn Analyst) -> ScanResolution {
        let outcome = analysis::scan_document(analyst, self.kind, &self.artifact).await;
        ScanResolution {
            generation: self.generation,
            outcome,
        }
    }
}

impl ScanResolution {
    pub fn outcome(&self) -> &Judgment<ScanOutcome> {
        &self.outcome
    }
}

impl Scanner {
    pub fn kind(&self) -> ScanKind {
        self.kind
    }

    pub fn phase(&self) -> ScanPhase {
        if self.inflight.is_busy() {
            ScanPhase::Analyzing
        } else if self.result.is_some() {
            ScanPhase::Resolved
        } else {
            ScanPhase::Idle
        }
    }

    pub fn is_busy(&self) -> bool {
        self.inflight.is_busy()
    }

    pub fn result(&self) -> Option<&Judgment<ScanOutcome>> {
        self.result.as_ref()
    }

    /// Switch mode. Clears the visible result and stops waiting for any outstanding scan.
    pub(crate) fn select_kind(&mut self, kind: ScanKind) {
        self.kind = kind;
        self.result = None;
        self.inflight.invalidate();
    }

    /// "Scan another document".
    pub(crate) fn dismiss(&mut self) {
        self.result = None;
    }

    pub(crate) fn begin(
        &mut self,
        kind: ScanKind,
        artifact: Option<Artifact>,
    ) -> Option<ScanTicket> {
        let Some(artifact) = artifact else {
            debug!(%kind, "no artifact selected, scan not started");
            return None;
        };
        if self.inflight.is_busy() {
            debug!(%kind, "scan already in progress, submission ignored");
            return None;
        }
        if kind != self.kind {
            self.select_kind(kind);
        }
        self.result = None;
        let generation = self.inflight.start()?;
        Some(ScanTicket {
            generation,
            kind,
            artifact,
        })
    }

    /// Apply a resolution to the view. Returns whether it was current.
    pub(crate) fn settle(&mut self, resolution: &ScanResolution) -> bool {
        if self.inflight.settle(resolution.generation) {
            self.result = Some(resolution.outcome.clone());
            true
        } else {
            false
        }
    }

    /// The view was left: discard transient state.
    pub(crate) fn reset(&mut self) {
        self.inflight.invalidate();
        self.kind = ScanKind::default();
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentshield_core::ContractVerdict;

    fn photo() -> Option<Artifact> {
        Artifact::new(vec![1, 2, 3])
    }

    fn resolution(ticket: &ScanTicket) -> ScanResolution {
        ScanResolution {
            generation: ticket.generation,
            outcome: Judgment::fallback(ScanOutcome::Contract(ContractVerdict::fallback())),
        }
    }

    #[test]
    fn absent_payload_is_noop() {
        let mut s = Scanner::default();
        assert!(s.begin(ScanKind::Contract, None).is_none());
        assert_eq!(s.phase(), ScanPhase::Idle);
    }

    #[test]
    fn lifecycle_idle_analyzing_resolved() {
        let mut s = Scanner::default();
        let ticket = s.begin(ScanKind::Contract, photo()).unwrap();
        assert_eq!(s.phase(), ScanPhase::Analyzing);
        assert!(s.settle(&resolution(&ticket)));
        assert_eq!(s.phase(), ScanPhase::Resolved);
        s.dismiss();
        assert_eq!(s.phase(), ScanPhase::Idle);
    }

    #[test]
    fn busy_rejects_new_submission() {
        let mut s = Scanner::default();
        let _ticket = s.begin(ScanKind::Contract, photo()).unwrap();
        assert!(s.begin(ScanKind::Contract, photo()).is_none());
        assert!(s.begin(ScanKind::Epc, photo()).is_none());
        assert_eq!(s.kind(), ScanKind::Contract);
    }

    #[test]
    fn switching_mode_makes_pending_scan_stale() {
        let mut s = Scanner::default();
        let ticket = s.begin(ScanKind::Contract, photo()).unwrap();
        s.select_kind(ScanKind::Bidding);
        assert!(!s.is_busy());
        assert!(!s.settle(&resolution(&ticket)));
        assert!(s.result().is_none());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut s = Scanner::default();
        let ticket = s.begin(ScanKind::Epc, photo()).unwrap();
        s.reset();
        assert_eq!(s.kind(), ScanKind::Contract);
        assert!(!s.settle(&resolution(&ticket)));
        assert_eq!(s.phase(), ScanPhase::Idle);
    }
}
