pub mod artifact;
pub mod error;
pub mod fix_window;
pub mod hazard;
pub mod history;
pub mod tab;
pub mod tone;
pub mod verdict;

pub use artifact::Artifact;
pub use error::ParseError;
pub use fix_window::{FIX_WINDOW_DAYS, days_left, deadline};
pub use hazard::{Hazard, HazardStatus, Severity};
pub use history::{ScanHistoryItem, ScanKind, ScanStatus};
pub use tab::Tab;
pub use tone::Tone;
pub use verdict::{
    BiddingVerdict, ContractVerdict, EpcVerdict, HazardAssessment, Judgment, Origin,
    RentVerdict, SafetySignals, ScanOutcome, Translation,
};
