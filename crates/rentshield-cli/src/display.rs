//! Plain-text cards for analysis results, hazards and history.

use chrono::{DateTime, Utc};
use rentshield_core::{
    BiddingVerdict, ContractVerdict, EpcVerdict, FIX_WINDOW_DAYS, Hazard, HazardAssessment,
    Judgment, RentVerdict, ScanOutcome, Translation, deadline,
};
use rentshield_session::{HistoryLog, LabResult, NotificationKind, Preferences};
use serde::Serialize;

const LABEL_WIDTH: usize = 18;

// ── Public API ──

/// Print any payload as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_scan(outcome: &Judgment<ScanOutcome>) {
    match &outcome.value {
        ScanOutcome::Contract(v) => print_contract(v),
        ScanOutcome::Bidding(v) => print_bidding(v),
        ScanOutcome::Epc(v) => print_epc(v),
    }
    print_origin(outcome.is_fallback());
}

/// Print a fresh assessment with the fix window counted from `now`.
pub fn print_assessment(assessment: &Judgment<HazardAssessment>, now: DateTime<Utc>) {
    let a = &assessment.value;
    println!("=== {} ===", a.kind);
    field("severity", a.severity);
    field("fix by", fix_by(now));
    field("description", &a.description);
    print_origin(assessment.is_fallback());
}

pub fn print_hazard(hazard: &Hazard, now: DateTime<Utc>) {
    println!("=== {} ===", hazard.kind());
    field("severity", hazard.severity());
    field("status", hazard.status().as_str());
    field("reported", hazard.reported_at().format("%Y-%m-%d %H:%M"));
    field("deadline", hazard.deadline().format("%Y-%m-%d"));
    let days = hazard.days_left_at(now);
    if hazard.is_overdue_at(now) {
        field("days left", "0 (overdue)");
    } else {
        field("days left", days);
    }
    field("description", hazard.description());
    println!();
}

pub fn print_hazards<'a>(hazards: impl Iterator<Item = &'a Hazard>, now: DateTime<Utc>) {
    let mut any = false;
    for hazard in hazards {
        print_hazard(hazard, now);
        any = true;
    }
    if !any {
        println!("No hazards reported.");
    }
}

pub fn print_translation(translation: &Judgment<Translation>) {
    let t = &translation.value;
    println!("=== Translation ===");
    println!("{}", t.translation);
    println!();
    field("legal standing", &t.legal_standing);
    print_origin(translation.is_fallback());
}

pub fn print_draft(draft: &Judgment<String>) {
    println!("=== Draft response ===");
    // Fallback drafts already explain themselves.
    println!("{}", draft.value);
    println!();
}

pub fn print_lab_result(result: &LabResult) {
    match result {
        LabResult::Translation(t) => print_translation(t),
        LabResult::Draft(d) => print_draft(d),
    }
}

/// Deadline of a fix window opening at `reported_at`.
fn fix_by(reported_at: DateTime<Utc>) -> String {
    format!(
        "{} ({FIX_WINDOW_DAYS} days)",
        deadline(reported_at).format("%Y-%m-%d")
    )
}

pub fn print_rent(verdict: &Judgment<RentVerdict>) {
    let v = &verdict.value;
    println!("=== Rent increase ===");
    field("fair", yes_no(v.is_fair));
    field("advice", &v.advice);
    if !v.letter.is_empty() {
        println!();
        println!("{}", v.letter);
    }
    print_origin(verdict.is_fallback());
}

pub fn print_history(history: &HistoryLog) {
    if history.is_empty() {
        println!("No scans yet.");
        return;
    }
    for item in history.iter() {
        println!(
            "  {}  {:<8} {:<5} {}",
            item.created_at().format("%Y-%m-%d %H:%M"),
            item.kind(),
            item.status().as_str(),
            item.summary()
        );
    }
}

pub fn print_preferences(prefs: &Preferences) {
    println!("Appearance");
    field("dark mode", on_off(prefs.dark_mode));
    field("high contrast", on_off(prefs.accessibility.high_contrast));
    field("large text", on_off(prefs.accessibility.large_text));
    println!("Notifications");
    for kind in NotificationKind::ALL {
        field(kind.as_str(), on_off(prefs.notifications.get(kind)));
    }
    println!("Privacy");
    field("share data", on_off(prefs.privacy.share_data));
    field("local only", on_off(prefs.privacy.local_only));
}

// ── Verdict cards ──

fn print_contract(v: &ContractVerdict) {
    println!("=== Contract review ===");
    field("safe", yes_no(v.is_safe));
    field("score", format!("{}/100", v.score));
    field("summary", &v.summary);
    if !v.issues.is_empty() {
        println!("  issues");
        for issue in &v.issues {
            println!("    - {issue}");
        }
    }
}

fn print_bidding(v: &BiddingVerdict) {
    println!("=== Bidding war check ===");
    field("illegal", yes_no(v.is_illegal));
    field("evidence", &v.evidence);
}

fn print_epc(v: &EpcVerdict) {
    println!("=== EPC estimate ===");
    field("rating", &v.score);
    field("comfort", format!("{}/100", v.comfort));
    field("compliant", yes_no(v.compliance));
    field("summary", &v.summary);
}

// ── Helpers ──

fn field(label: &str, value: impl std::fmt::Display) {
    println!("  {label:<LABEL_WIDTH$} {value}");
}

fn print_origin(fallback: bool) {
    if fallback {
        println!("  (model unavailable, showing default result)");
    }
    println!();
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

fn on_off(b: bool) -> &'static str {
    if b { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fix_by_counts_fourteen_days() {
        let reported = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(fix_by(reported), "2026-03-15 (14 days)");
    }

    #[test]
    fn fix_by_crosses_month_end() {
        let reported = Utc.with_ymd_and_hms(2026, 2, 20, 23, 0, 0).unwrap();
        assert_eq!(fix_by(reported), "2026-03-06 (14 days)");
    }
}
