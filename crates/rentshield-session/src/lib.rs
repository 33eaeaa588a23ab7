//! Session controller: the single owner of all in-memory app state.
//!
//! Every view action that calls the model is split into three steps so the
//! suspension point is explicit: `begin_*` hands out a ticket, the ticket's
//! `run` awaits the model, and `complete_*` applies the resolution. The
//! `async` convenience methods on [`Session`] chain all three.

pub mod device;
pub mod history;
mod inflight;
pub mod location;
pub mod preferences;
pub mod rights_lab;
pub mod scanner;
mod session;
pub mod tracker;

#[cfg(test)]
mod testing;

pub use device::{
    FixedGeolocator, GeoError, Geolocator, NoGeolocator, Notifier, Permission, Position,
};
pub use history::HistoryLog;
pub use location::{
    DENIED_LOCATION, LOCATING, LOOKUP_FAILED_LOCATION, LocationResolution, LocationTicket,
};
pub use preferences::{
    Accessibility, NotificationKind, NotificationSettings, Preferences, PrivacySettings,
};
pub use rights_lab::{LabResolution, LabResult, LabTicket, RightsLab, Tool};
pub use scanner::{ScanPhase, ScanResolution, ScanTicket, Scanner};
pub use session::{AuthState, Devices, NOTIFICATION_TITLE, Session};
pub use tracker::{HazardResolution, HazardTicket, HazardTracker};
