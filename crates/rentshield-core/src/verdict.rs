//! Response payloads for every model operation, with their fallbacks.
//!
//! Each payload deserializes from the camelCase JSON document the model is
//! asked to return. When a call fails the caller substitutes the payload's
//! `fallback()`, which leans toward "flag for review" so a network failure is
//! never shown as an all-clear. The bidding-war fallback is the exception
//! (`is_illegal = false`) and is kept as-is.

use serde::{Deserialize, Deserializer, Serialize};

use crate::hazard::Severity;
use crate::history::ScanKind;

/// Summary used in history when an outcome carries no text of its own.
pub const DEFAULT_HISTORY_SUMMARY: &str = "Analysis complete";

/// Where a resolved payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Model,
    Fallback,
}

/// A resolved payload tagged with its origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Judgment<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Judgment<T> {
    pub fn model(value: T) -> Self {
        Self {
            value,
            origin: Origin::Model,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            origin: Origin::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == Origin::Fallback
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Judgment<U> {
        Judgment {
            value: f(self.value),
            origin: self.origin,
        }
    }
}

// ── Document scans ──

/// Tenancy agreement analysis. `score` is the Tenant Health Score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractVerdict {
    pub is_safe: bool,
    #[serde(deserialize_with = "percent")]
    pub score: u8,
    pub summary: String,
    pub issues: Vec<String>,
}

impl ContractVerdict {
    pub fn fallback() -> Self {
        Self {
            is_safe: false,
            score: 0,
            summary: "Could not analyze document. Please ensure the image is clear.".to_string(),
            issues: vec!["Analysis failed".to_string()],
        }
    }
}

/// Bidding-war detection on a chat or email screenshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiddingVerdict {
    pub is_illegal: bool,
    pub evidence: String,
}

impl BiddingVerdict {
    pub fn fallback() -> Self {
        Self {
            is_illegal: false,
            evidence: "Could not analyze screenshot.".to_string(),
        }
    }
}

/// Energy performance estimate from an EPC document or interior photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpcVerdict {
    /// Letter rating A-G, or "Unknown".
    pub score: String,
    #[serde(deserialize_with = "percent")]
    pub comfort: u8,
    pub compliance: bool,
    pub summary: String,
}

impl EpcVerdict {
    pub fn fallback() -> Self {
        Self {
            score: "?".to_string(),
            comfort: 0,
            compliance: false,
            summary: "Analysis failed. Try a clearer image of a window or radiator.".to_string(),
        }
    }
}

// ── Other operations ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardAssessment {
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub description: String,
}

impl HazardAssessment {
    pub fn fallback() -> Self {
        Self {
            kind: "Unknown".to_string(),
            severity: Severity::Medium,
            description: "AI could not identify the hazard clearly.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentVerdict {
    pub is_fair: bool,
    pub advice: String,
    pub letter: String,
}

impl RentVerdict {
    pub fn fallback() -> Self {
        Self {
            is_fair: true,
            advice: "Could not calculate.".to_string(),
            letter: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub translation: String,
    pub legal_standing: String,
}

impl Translation {
    pub fn fallback() -> Self {
        Self {
            translation: "Error analyzing.".to_string(),
            legal_standing: "Unknown".to_string(),
        }
    }
}

// ── Scan outcome ──

/// The resolved result of a document scan, keyed by mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "lowercase")]
pub enum ScanOutcome {
    Contract(ContractVerdict),
    Bidding(BiddingVerdict),
    Epc(EpcVerdict),
}

/// The three boolean fields the safe/risk classification looks at.
///
/// Each mode fills in only its own field; the others stay `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SafetySignals {
    pub is_safe: Option<bool>,
    pub is_illegal: Option<bool>,
    pub compliance: Option<bool>,
}

impl SafetySignals {
    /// `safe ⇔ is_safe == true ∨ is_illegal == false ∨ compliance == true`,
    /// checked on all three fields whichever mode produced them.
    pub fn is_safe(&self) -> bool {
        self.is_safe == Some(true)
            || self.is_illegal == Some(false)
            || self.compliance == Some(true)
    }
}

impl ScanOutcome {
    pub fn kind(&self) -> ScanKind {
        match self {
            Self::Contract(_) => ScanKind::Contract,
            Self::Bidding(_) => ScanKind::Bidding,
            Self::Epc(_) => ScanKind::Epc,
        }
    }

    pub fn fallback(kind: ScanKind) -> Self {
        match kind {
            ScanKind::Contract => Self::Contract(ContractVerdict::fallback()),
            ScanKind::Bidding => Self::Bidding(BiddingVerdict::fallback()),
            ScanKind::Epc => Self::Epc(EpcVerdict::fallback()),
        }
    }

    pub fn signals(&self) -> SafetySignals {
        match self {
            Self::Contract(v) => SafetySignals {
                is_safe: Some(v.is_safe),
                ..Default::default()
            },
            Self::Bidding(v) => SafetySignals {
                is_illegal: Some(v.is_illegal),
                ..Default::default()
            },
            Self::Epc(v) => SafetySignals {
                compliance: Some(v.compliance),
                ..Default::default()
            },
        }
    }

    pub fn is_safe(&self) -> bool {
        self.signals().is_safe()
    }

    /// Text shown for this outcome: the summary, or the evidence for bidding scans.
    pub fn summary(&self) -> &str {
        let text = match self {
            Self::Contract(v) => v.summary.as_str(),
            Self::Bidding(v) => v.evidence.as_str(),
            Self::Epc(v) => v.summary.as_str(),
        };
        if text.trim().is_empty() {
            DEFAULT_HISTORY_SUMMARY
        } else {
            text
        }
    }
}

/// Accept any JSON number for a 0-100 field, clamped and rounded into range.
fn percent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = f64::deserialize(deserializer)?;
    Ok(raw.clamp(0.0, 100.0).round() as u8)
}
