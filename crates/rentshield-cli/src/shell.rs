//! Line-oriented interactive session.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use rentshield_ai::Analyst;
use rentshield_core::{ScanKind, Tab, Tone};
use rentshield_session::{
    Devices, FixedGeolocator, Geolocator, NoGeolocator, NotificationKind, Position, Session, Tool,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::display;
use crate::notifier::ConsoleNotifier;

const HELP: &str = "\
Navigation
  tab <overview|scan|tracker|rights|profile>
  login | logout | status | quit
Scanner
  mode <contract|bidding|epc>     select scan mode
  scan [mode] <file>              analyze a photo
  dismiss                         clear the result
  history | delete-history
Tracker
  hazard <file>                   report a hazard
  hazards                         list hazards with days left
Rights lab
  input <text>                    set the message
  tool <translate|draft>
  tone <diplomatic|firm|legal>
  run
Other
  rent <current> <proposed>       check a rent increase
  prefs | dark | contrast <on|off> | large-text <on|off>
  share <on|off> | local-only <on|off> | notify <deadlines|legal|market>";

pub async fn run(
    analyst: Arc<dyn Analyst>,
    position: Option<(f64, f64)>,
    allow_notifications: bool,
) -> anyhow::Result<()> {
    let geolocator: Arc<dyn Geolocator> = match position {
        Some((latitude, longitude)) => Arc::new(FixedGeolocator(Position {
            latitude,
            longitude,
        })),
        None => Arc::new(NoGeolocator),
    };
    let devices = Devices {
        geolocator,
        notifier: Arc::new(ConsoleNotifier::new(allow_notifications)),
    };
    let mut session = Session::new(analyst, devices);
    session.sign_in().await;
    println!("Signed in. Location: {}. Type `help` for commands.", session.location());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(&session).await?;
        let Some(line) = lines.next_line().await.context("reading stdin")? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        if matches!(cmd, "quit" | "exit") {
            break;
        }
        if let Err(e) = dispatch(&mut session, cmd, rest).await {
            println!("error: {e:#}");
        }
    }
    Ok(())
}

async fn prompt(session: &Session) -> anyhow::Result<()> {
    let label = if session.is_authenticated() {
        format!("{} @ {}", session.tab(), session.location())
    } else {
        "signed out".to_string()
    };
    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("[{label}]> ").as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

async fn dispatch(session: &mut Session, cmd: &str, rest: &str) -> anyhow::Result<()> {
    if !session.is_authenticated() && !matches!(cmd, "login" | "help") {
        println!("Signed out. Type `login` first.");
        return Ok(());
    }
    match cmd {
        "help" => println!("{HELP}"),
        "login" => {
            session.sign_in().await;
            println!("Location: {}", session.location());
        }
        "logout" => session.logout(),
        "status" => {
            println!("tab: {}  location: {}", session.tab(), session.location());
            println!(
                "scans: {}  hazards: {}  mode: {}  tool: {}  tone: {}",
                session.history().len(),
                session.tracker().len(),
                session.scanner().kind(),
                session.rights_lab().tool(),
                session.rights_lab().tone()
            );
        }
        "tab" => session.select_tab(rest.parse::<Tab>()?),

        "mode" => session.select_scan_kind(rest.parse::<ScanKind>()?),
        "scan" => {
            let (kind, file) = match rest.split_once(' ') {
                Some((kind, file)) => (kind.parse::<ScanKind>()?, file.trim()),
                None => match rest.parse::<ScanKind>() {
                    Ok(kind) => (kind, ""),
                    Err(_) => (session.scanner().kind(), rest),
                },
            };
            let artifact = read_optional(file).await?;
            match session.submit_artifact(kind, artifact).await {
                Some(outcome) => display::print_scan(&outcome),
                None => println!("Nothing to scan."),
            }
        }
        "dismiss" => session.dismiss_scan_result(),
        "history" => display::print_history(session.history()),
        "delete-history" => {
            let removed = session.delete_all_history();
            println!("Deleted {removed} scan(s).");
        }

        "hazard" => {
            let photo = read_optional(rest).await?;
            match session.report_hazard(photo).await {
                Some(hazard) => display::print_hazard(&hazard, Utc::now()),
                None => println!("No photo given."),
            }
        }
        "hazards" => display::print_hazards(session.tracker().iter(), Utc::now()),

        "input" => session.set_rights_input(rest),
        "tool" => session.select_rights_tool(rest.parse::<Tool>()?),
        "tone" => session.set_tone(rest.parse::<Tone>()?),
        "run" => match session.run_rights_tool().await {
            Some(result) => display::print_lab_result(&result),
            None => println!("Nothing to run."),
        },

        "rent" => {
            let mut args = rest.split_whitespace();
            let current: f64 = args.next().context("missing current rent")?.parse()?;
            let proposed: f64 = args.next().context("missing proposed rent")?.parse()?;
            if let Some(verdict) = session.check_rent_increase(current, proposed).await {
                display::print_rent(&verdict);
            }
        }

        "prefs" => display::print_preferences(session.preferences()),
        "dark" => {
            let on = session.toggle_dark_mode();
            println!("Dark mode {}.", if on { "on" } else { "off" });
        }
        "contrast" => session.set_high_contrast(parse_switch(rest)?),
        "large-text" => session.set_large_text(parse_switch(rest)?),
        "share" => session.set_share_data(parse_switch(rest)?),
        "local-only" => session.set_local_only(parse_switch(rest)?),
        "notify" => {
            let kind = rest.parse::<NotificationKind>()?;
            let on = session.toggle_notification(kind).await;
            println!("{kind} alerts {}.", if on { "on" } else { "off" });
        }

        other => println!("Unknown command `{other}`. Type `help`."),
    }
    Ok(())
}

/// A blank argument means no file was picked.
async fn read_optional(file: &str) -> anyhow::Result<Option<rentshield_core::Artifact>> {
    if file.is_empty() {
        return Ok(None);
    }
    crate::read_artifact(Path::new(file)).await.map(Some)
}

fn parse_switch(arg: &str) -> anyhow::Result<bool> {
    match arg {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => anyhow::bail!("expected on or off, got `{other}`"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_values() {
        assert!(parse_switch("on").unwrap());
        assert!(!parse_switch("no").unwrap());
        assert!(parse_switch("maybe").is_err());
    }
}
