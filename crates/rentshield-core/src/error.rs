use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown tab: {0} (expected overview, scan, tracker, rights or profile)")]
    UnknownTab(String),

    #[error("unknown tone: {0} (expected diplomatic, firm or strictly-legal)")]
    UnknownTone(String),

    #[error("unknown scan kind: {0} (expected contract, bidding or epc)")]
    UnknownScanKind(String),

    #[error("unknown rights tool: {0} (expected translate or draft)")]
    UnknownTool(String),

    #[error("unknown notification kind: {0} (expected deadlines, legal or market)")]
    UnknownNotificationKind(String),
}
