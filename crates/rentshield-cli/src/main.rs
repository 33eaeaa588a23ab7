mod display;
mod notifier;
mod shell;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use rentshield_ai::gemini::{DEFAULT_BASE_URL, DEFAULT_FLASH_MODEL, DEFAULT_PRO_MODEL};
use rentshield_ai::{Analyst, GeminiClient, GeminiConfig, analysis};
use rentshield_core::{Artifact, ScanKind, Tone};
use rentshield_session::DENIED_LOCATION;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rentshield", version, about = "Tenant rights assistant for UK renters")]
struct Cli {
    #[command(flatten)]
    model: ModelArgs,

    /// Print results as JSON instead of cards.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ModelArgs {
    /// Gemini API key.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: String,

    #[arg(long, env = "RENTSHIELD_GEMINI_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Model used for contract review.
    #[arg(long, env = "RENTSHIELD_PRO_MODEL", default_value = DEFAULT_PRO_MODEL)]
    pro_model: String,

    /// Model used for everything else.
    #[arg(long, env = "RENTSHIELD_FLASH_MODEL", default_value = DEFAULT_FLASH_MODEL)]
    flash_model: String,
}

impl ModelArgs {
    fn into_analyst(self) -> Arc<dyn Analyst> {
        let config = GeminiConfig {
            api_key: self.api_key,
            base_url: self.base_url,
            pro_model: self.pro_model,
            flash_model: self.flash_model,
        };
        Arc::new(GeminiClient::new(config))
    }
}

#[derive(Subcommand)]
enum Command {
    /// Scan a document photo: tenancy contract, rental listing or EPC.
    Scan {
        /// contract, bidding or epc.
        kind: ScanKind,
        /// Image files. Only the first is analyzed.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Classify a hazard from a photo and show its fix window.
    Hazard {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Explain what a landlord message really means.
    Translate { text: String },
    /// Draft a reply to a landlord.
    Draft {
        #[arg(long, default_value_t = Tone::Diplomatic)]
        tone: Tone,
        text: String,
    },
    /// Check a proposed rent increase.
    Rent {
        #[arg(long)]
        current: f64,
        #[arg(long)]
        proposed: f64,
        #[arg(long, default_value = DENIED_LOCATION)]
        location: String,
    },
    /// Name the neighbourhood at a position.
    Locate {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },
    /// Interactive session.
    Shell {
        /// Device position. Without it the device reports no geolocation.
        #[arg(long, allow_hyphen_values = true, requires = "lng")]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lng: Option<f64>,
        /// Answer notification permission prompts with "allow".
        #[arg(long)]
        allow_notifications: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;
    let analyst = cli.model.into_analyst();
    tracing::debug!("rentshield v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Scan { kind, files } => {
            let image = load_artifact(&files).await?;
            let outcome = analysis::scan_document(analyst.as_ref(), kind, &image).await;
            if json {
                display::print_json(&outcome)?;
            } else {
                display::print_scan(&outcome);
            }
        }
        Command::Hazard { files } => {
            let image = load_artifact(&files).await?;
            let assessment = analysis::analyze_hazard(analyst.as_ref(), &image).await;
            if json {
                display::print_json(&assessment)?;
            } else {
                display::print_assessment(&assessment, Utc::now());
            }
        }
        Command::Translate { text } => {
            let translation = analysis::translate_landlord_speak(analyst.as_ref(), &text).await;
            if json {
                display::print_json(&translation)?;
            } else {
                display::print_translation(&translation);
            }
        }
        Command::Draft { tone, text } => {
            let draft = analysis::generate_response(analyst.as_ref(), tone, &text).await;
            if json {
                display::print_json(&draft)?;
            } else {
                display::print_draft(&draft);
            }
        }
        Command::Rent {
            current,
            proposed,
            location,
        } => {
            let verdict =
                analysis::analyze_rent_increase(analyst.as_ref(), current, proposed, &location)
                    .await;
            if json {
                display::print_json(&verdict)?;
            } else {
                display::print_rent(&verdict);
            }
        }
        Command::Locate { lat, lng } => {
            let place = analysis::identify_location(analyst.as_ref(), lat, lng)
                .await
                .context("location lookup failed")?;
            println!("{place}");
        }
        Command::Shell {
            lat,
            lng,
            allow_notifications,
        } => {
            let position = lat.zip(lng);
            shell::run(analyst, position, allow_notifications).await?;
        }
    }

    Ok(())
}

/// Read the first file as the artifact. Extra files are ignored.
async fn load_artifact(files: &[PathBuf]) -> anyhow::Result<Artifact> {
    let Some((first, rest)) = files.split_first() else {
        bail!("no image file given");
    };
    if !rest.is_empty() {
        warn!(ignored = rest.len(), "only the first file is analyzed");
    }
    read_artifact(first).await
}

pub(crate) async fn read_artifact(path: &std::path::Path) -> anyhow::Result<Artifact> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    Artifact::new(bytes).with_context(|| format!("{} is empty", path.display()))
}
