use std::sync::Arc;

use chrono::Utc;
use rentshield_ai::{Analyst, analysis};
use rentshield_core::{
    Artifact, Hazard, Judgment, RentVerdict, ScanHistoryItem, ScanKind, ScanOutcome, Tab, Tone,
};
use tracing::{debug, info};

use crate::device::{Geolocator, Notifier, Permission};
use crate::history::HistoryLog;
use crate::location::{LOCATING, LocationResolution, LocationTicket};
use crate::preferences::{NotificationKind, Preferences};
use crate::rights_lab::{LabResolution, LabResult, LabTicket, RightsLab, Tool};
use crate::scanner::{ScanResolution, ScanTicket, Scanner};
use crate::tracker::{HazardResolution, HazardTicket, HazardTracker};

/// Title of every notification the app shows.
pub const NOTIFICATION_TITLE: &str = "RentShield 2026";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated,
}

/// Device capabilities handed to the session.
pub struct Devices {
    pub geolocator: Arc<dyn Geolocator>,
    pub notifier: Arc<dyn Notifier>,
}

/// All state for one running app instance.
///
/// Hazards, history and preferences live as long as the session, across
/// sign-outs. Per-view state is discarded when its tab is left.
pub struct Session {
    analyst: Arc<dyn Analyst>,
    devices: Devices,
    auth: AuthState,
    // Bumped on every sign-in and sign-out so a late location lookup is dropped.
    auth_epoch: u64,
    tab: Tab,
    location: String,
    preferences: Preferences,
    scanner: Scanner,
    tracker: HazardTracker,
    rights_lab: RightsLab,
    history: HistoryLog,
}

impl Session {
    pub fn new(analyst: Arc<dyn Analyst>, devices: Devices) -> Self {
        Self {
            analyst,
            devices,
            auth: AuthState::default(),
            auth_epoch: 0,
            tab: Tab::default(),
            location: LOCATING.to_string(),
            preferences: Preferences::default(),
            scanner: Scanner::default(),
            tracker: HazardTracker::default(),
            rights_lab: RightsLab::default(),
            history: HistoryLog::default(),
        }
    }

    // ── Accessors ──

    pub fn auth(&self) -> AuthState {
        self.auth
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth == AuthState::Authenticated
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    pub fn tracker(&self) -> &HazardTracker {
        &self.tracker
    }

    pub fn rights_lab(&self) -> &RightsLab {
        &self.rights_lab
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    fn ignored(&self, action: &'static str) -> bool {
        if self.is_authenticated() {
            return false;
        }
        debug!(action, "ignored while signed out");
        true
    }

    // ── Authentication ──

    /// Sign in. Returns the location lookup to run, or `None` if already signed in.
    pub fn login(&mut self) -> Option<LocationTicket> {
        if self.is_authenticated() {
            return None;
        }
        self.auth = AuthState::Authenticated;
        self.auth_epoch += 1;
        self.tab = Tab::Overview;
        self.location = LOCATING.to_string();
        info!(epoch = self.auth_epoch, "signed in");
        Some(LocationTicket::new(
            self.auth_epoch,
            Arc::clone(&self.devices.geolocator),
            Arc::clone(&self.analyst),
        ))
    }

    /// Apply a location lookup. Dropped if it belongs to an earlier sign-in.
    pub fn complete_location(&mut self, resolution: LocationResolution) -> bool {
        if !self.is_authenticated() || resolution.epoch() != self.auth_epoch {
            debug!(epoch = resolution.epoch(), "stale location lookup dropped");
            return false;
        }
        self.location = resolution.into_location();
        true
    }

    /// Sign in and wait for the location lookup.
    pub async fn sign_in(&mut self) {
        if let Some(ticket) = self.login() {
            let resolution = ticket.run().await;
            self.complete_location(resolution);
        }
    }

    pub fn logout(&mut self) {
        if self.ignored("logout") {
            return;
        }
        self.leave(self.tab);
        self.auth = AuthState::Unauthenticated;
        self.auth_epoch += 1;
        self.tab = Tab::Overview;
        self.location = LOCATING.to_string();
        info!("signed out");
    }

    // ── Navigation ──

    pub fn select_tab(&mut self, tab: Tab) {
        if self.ignored("select-tab") || tab == self.tab {
            return;
        }
        self.leave(self.tab);
        debug!(from = %self.tab, to = %tab, "tab changed");
        self.tab = tab;
    }

    fn leave(&mut self, tab: Tab) {
        match tab {
            Tab::Scan => self.scanner.reset(),
            Tab::Tracker => self.tracker.leave(),
            Tab::Rights => self.rights_lab.reset(),
            Tab::Overview | Tab::Profile => {}
        }
    }

    // ── Scanner ──

    pub fn select_scan_kind(&mut self, kind: ScanKind) {
        if self.ignored("select-scan-kind") {
            return;
        }
        self.select_tab(Tab::Scan);
        self.scanner.select_kind(kind);
    }

    pub fn dismiss_scan_result(&mut self) {
        if self.ignored("dismiss-scan") {
            return;
        }
        self.scanner.dismiss();
    }

    pub fn begin_scan(
        &mut self,
        kind: ScanKind,
        artifact: Option<Artifact>,
    ) -> Option<ScanTicket> {
        if self.ignored("scan") {
            return None;
        }
        if artifact.is_none() {
            debug!(%kind, "no artifact selected, scan not started");
            return None;
        }
        self.select_tab(Tab::Scan);
        self.scanner.begin(kind, artifact)
    }

    /// Record the scan in history and show it if the scanner still waits for it.
    pub fn complete_scan(&mut self, resolution: ScanResolution) -> bool {
        let outcome = &resolution.outcome().value;
        let item = ScanHistoryItem::record(outcome, Utc::now());
        let item = self.history.record(item);
        info!(
            kind = %item.kind(),
            status = item.status().as_str(),
            fallback = resolution.outcome().is_fallback(),
            "scan recorded"
        );
        self.scanner.settle(&resolution)
    }

    pub async fn submit_artifact(
        &mut self,
        kind: ScanKind,
        artifact: Option<Artifact>,
    ) -> Option<Judgment<ScanOutcome>> {
        let ticket = self.begin_scan(kind, artifact)?;
        let analyst = Arc::clone(&self.analyst);
        let resolution = ticket.run(analyst.as_ref()).await;
        let outcome = resolution.outcome().clone();
        self.complete_scan(resolution);
        Some(outcome)
    }

    // ── Hazard tracker ──

    pub fn begin_hazard_report(&mut self, photo: Option<Artifact>) -> Option<HazardTicket> {
        if self.ignored("report-hazard") {
            return None;
        }
        if photo.is_none() {
            debug!("no photo selected, hazard report not started");
            return None;
        }
        self.select_tab(Tab::Tracker);
        self.tracker.begin(photo)
    }

    /// Log the hazard. A current resolution takes the user back to the overview.
    pub fn complete_hazard_report(&mut self, resolution: HazardResolution) -> Hazard {
        let (hazard, current) = self.tracker.settle(resolution, Utc::now());
        let hazard = hazard.clone();
        info!(
            id = hazard.id(),
            kind = hazard.kind(),
            severity = %hazard.severity(),
            "hazard reported"
        );
        if current && self.is_authenticated() {
            self.select_tab(Tab::Overview);
        }
        hazard
    }

    pub async fn report_hazard(&mut self, photo: Option<Artifact>) -> Option<Hazard> {
        let ticket = self.begin_hazard_report(photo)?;
        let analyst = Arc::clone(&self.analyst);
        let resolution = ticket.run(analyst.as_ref()).await;
        Some(self.complete_hazard_report(resolution))
    }

    // ── Rights lab ──

    pub fn set_rights_input(&mut self, text: impl Into<String>) {
        if self.ignored("rights-input") {
            return;
        }
        self.select_tab(Tab::Rights);
        self.rights_lab.set_input(text);
    }

    pub fn select_rights_tool(&mut self, tool: Tool) {
        if self.ignored("rights-tool") {
            return;
        }
        self.select_tab(Tab::Rights);
        self.rights_lab.select_tool(tool);
    }

    pub fn set_tone(&mut self, tone: Tone) {
        if self.ignored("set-tone") {
            return;
        }
        self.select_tab(Tab::Rights);
        self.rights_lab.set_tone(tone);
    }

    pub fn begin_rights_run(&mut self) -> Option<LabTicket> {
        if self.ignored("rights-run") {
            return None;
        }
        if self.rights_lab.input().trim().is_empty() {
            debug!(tool = %self.rights_lab.tool(), "empty input, nothing to run");
            return None;
        }
        self.select_tab(Tab::Rights);
        self.rights_lab.begin()
    }

    pub fn complete_rights_run(&mut self, resolution: LabResolution) -> Option<&LabResult> {
        self.rights_lab.settle(resolution)
    }

    pub async fn run_rights_tool(&mut self) -> Option<LabResult> {
        let ticket = self.begin_rights_run()?;
        let analyst = Arc::clone(&self.analyst);
        let resolution = ticket.run(analyst.as_ref()).await;
        self.complete_rights_run(resolution).cloned()
    }

    // ── Rent check ──

    /// Assess a proposed rent against the current one for the session's location.
    pub async fn check_rent_increase(
        &mut self,
        current_rent: f64,
        proposed_rent: f64,
    ) -> Option<Judgment<RentVerdict>> {
        if self.ignored("rent-check") {
            return None;
        }
        let analyst = Arc::clone(&self.analyst);
        let location = self.location.clone();
        Some(
            analysis::analyze_rent_increase(
                analyst.as_ref(),
                current_rent,
                proposed_rent,
                &location,
            )
            .await,
        )
    }

    // ── Preferences ──

    pub fn toggle_dark_mode(&mut self) -> bool {
        if !self.ignored("dark-mode") {
            self.preferences.dark_mode = !self.preferences.dark_mode;
        }
        self.preferences.dark_mode
    }

    pub fn set_high_contrast(&mut self, enabled: bool) {
        if !self.ignored("high-contrast") {
            self.preferences.accessibility.high_contrast = enabled;
        }
    }

    pub fn set_large_text(&mut self, enabled: bool) {
        if !self.ignored("large-text") {
            self.preferences.accessibility.large_text = enabled;
        }
    }

    pub fn set_share_data(&mut self, enabled: bool) {
        if !self.ignored("share-data") {
            self.preferences.privacy.share_data = enabled;
        }
    }

    pub fn set_local_only(&mut self, enabled: bool) {
        if !self.ignored("local-only") {
            self.preferences.privacy.local_only = enabled;
        }
    }

    /// Flip a notification kind. Turning one on asks for permission and, when
    /// granted, confirms with a notification. Returns the new setting.
    pub async fn toggle_notification(&mut self, kind: NotificationKind) -> bool {
        if self.ignored("notification") {
            return self.preferences.notifications.get(kind);
        }
        let enabled = !self.preferences.notifications.get(kind);
        self.preferences.notifications.set(kind, enabled);
        if enabled {
            let notifier = Arc::clone(&self.devices.notifier);
            match notifier.request_permission().await {
                Permission::Granted => {
                    notifier.notify(NOTIFICATION_TITLE, &format!("{kind} alerts enabled!"));
                }
                answer => debug!(%kind, ?answer, "notification permission not granted"),
            }
        }
        enabled
    }

    // ── History ──

    /// Clear scan history. Hazards are kept.
    pub fn delete_all_history(&mut self) -> usize {
        if self.ignored("delete-history") {
            return 0;
        }
        let removed = self.history.clear();
        info!(removed, "scan history deleted");
        removed
    }
}
