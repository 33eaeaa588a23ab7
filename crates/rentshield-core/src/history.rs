//! Completed document scans.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ParseError;
use crate::verdict::ScanOutcome;

/// Document scanner modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanKind {
    #[default]
    Contract,
    Bidding,
    Epc,
}

impl ScanKind {
    pub const ALL: [ScanKind; 3] = [Self::Contract, Self::Bidding, Self::Epc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Bidding => "bidding",
            Self::Epc => "epc",
        }
    }
}

impl fmt::Display for ScanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contract" => Ok(Self::Contract),
            "bidding" => Ok(Self::Bidding),
            "epc" => Ok(Self::Epc),
            _ => Err(ParseError::UnknownScanKind(s.to_string())),
        }
    }
}

/// Outcome of a scan as shown in history. Only `Safe` and `Risk` are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Safe,
    Risk,
    Warning,
    Info,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Risk => "risk",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// One completed scan, successful or degraded. Never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanHistoryItem {
    id: String,
    created_at: DateTime<Utc>,
    kind: ScanKind,
    summary: String,
    status: ScanStatus,
}

impl ScanHistoryItem {
    pub fn record(outcome: &ScanOutcome, created_at: DateTime<Utc>) -> Self {
        let status = if outcome.is_safe() {
            ScanStatus::Safe
        } else {
            ScanStatus::Risk
        };
        Self {
            id: Uuid::new_v4().to_string(),
            created_at,
            kind: outcome.kind(),
            summary: outcome.summary().to_string(),
            status,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn kind(&self) -> ScanKind {
        self.kind
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn status(&self) -> ScanStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::{BiddingVerdict, ContractVerdict, EpcVerdict};

    #[test]
    fn contract_risk_recorded() {
        let outcome = ScanOutcome::Contract(ContractVerdict {
            is_safe: false,
            score: 31,
            summary: "Illegal fees found.".into(),
            issues: vec!["Admin fee of £300".into()],
        });
        let item = ScanHistoryItem::record(&outcome, Utc::now());
        assert_eq!(item.kind(), ScanKind::Contract);
        assert_eq!(item.status(), ScanStatus::Risk);
        assert_eq!(item.summary(), "Illegal fees found.");
    }

    #[test]
    fn bidding_not_illegal_recorded_safe() {
        let outcome = ScanOutcome::Bidding(BiddingVerdict {
            is_illegal: false,
            evidence: "No request above the advertised rent.".into(),
        });
        let item = ScanHistoryItem::record(&outcome, Utc::now());
        assert_eq!(item.status(), ScanStatus::Safe);
        assert_eq!(item.summary(), "No request above the advertised rent.");
    }

    #[test]
    fn epc_compliant_recorded_safe() {
        let outcome = ScanOutcome::Epc(EpcVerdict {
            score: "C".into(),
            comfort: 72,
            compliance: true,
            summary: "Modern combi boiler, double glazing.".into(),
        });
        let item = ScanHistoryItem::record(&outcome, Utc::now());
        assert_eq!(item.kind(), ScanKind::Epc);
        assert_eq!(item.status(), ScanStatus::Safe);
    }

    #[test]
    fn scan_kind_parses_case_insensitively() {
        assert_eq!("EPC".parse::<ScanKind>().unwrap(), ScanKind::Epc);
        assert_eq!(" bidding ".parse::<ScanKind>().unwrap(), ScanKind::Bidding);
        assert!("lease".parse::<ScanKind>().is_err());
    }
}
