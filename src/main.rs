//! SAEB Dashboard CLI
//!
//! Terminal front end for the rollout dashboard:
//! - Show every section at once
//! - Inspect cards, the weekly schedule or the status pies alone
//! - Generate a config file

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use saeb_dashboard::config::{generate_default_config, Config, LoggingConfig};
use saeb_dashboard::sections::PieBreakdowns;
use saeb_dashboard::view::render::{render_cards, render_pies, render_weekly};
use saeb_dashboard::view::{render_dashboard, PieCascade, RenderOptions, SliceSelection};
use saeb_dashboard::{
    load_section, Action, DashboardState, FetchStatus, HttpStatsClient, SectionKind,
    StatusDimension, WeekWindow,
};

#[derive(Parser)]
#[command(name = "saeb-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SAEB municipal rollout dashboard")]
#[command(long_about = concat!(
    "Terminal dashboard for the SAEB rollout.\n",
    "Shows visit, publication and installation progress across the 343 municipalities."
))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Stats API base URL (overrides config and SAEB_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the whole dashboard
    Show,

    /// Show the percentage cards
    Cards {
        /// Expand the card with this title (repeatable)
        #[arg(short, long)]
        expand: Vec<String>,
    },

    /// Show this week's visits and installations with the production charts
    Week {
        /// First day of the window (default: now)
        #[arg(short, long)]
        today: Option<NaiveDate>,
    },

    /// Show the status pies
    Pies {
        /// Number of tiers to reveal (1-3)
        #[arg(
            short,
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u8).range(1..=3)
        )]
        reveal: u8,
        /// Slice whose cities to list, as TIER:SLOT (e.g. 1:0 or visita:1)
        #[arg(short, long, value_parser = parse_slice)]
        select: Option<SliceSelection>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Config written to: {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => {
            let config = Config::load_with_env(path)?;
            init_logging(&config.logging);
            config
        }
        None => {
            let loaded = Config::load_default();
            init_logging(&loaded.config.logging);
            loaded.log();
            loaded.config
        }
    };

    let mut client_config = config.api.client_config();
    if let Some(url) = &cli.api_url {
        client_config.base_url = url.clone();
    }
    tracing::debug!(base_url = %client_config.base_url, "Stats API");
    let client = HttpStatsClient::new(client_config)?;
    let options = RenderOptions::default();

    match cli.command {
        Commands::Show => {
            let state = DashboardState::load(&client, WeekWindow::now()).await;
            match cli.format {
                OutputFormat::Table => println!("{}", render_dashboard(&state, &options)),
                OutputFormat::Json => print_json(&state)?,
            }
        }

        Commands::Cards { expand } => {
            let mut state = load_one(&client, SectionKind::Cards, WeekWindow::now()).await;

            if let Some(cards) = state.cards.loaded() {
                let mut indices = Vec::with_capacity(expand.len());
                for title in &expand {
                    match cards
                        .iter()
                        .position(|card| card.title().eq_ignore_ascii_case(title))
                    {
                        Some(index) => indices.push(index),
                        None => bail!("unknown card: {}", title),
                    }
                }
                for index in indices {
                    state.apply(Action::ToggleCard(index));
                }
            }

            match cli.format {
                OutputFormat::Table => println!("{}", render_cards(&state.cards)),
                OutputFormat::Json => print_json(&state.cards)?,
            }
        }

        Commands::Week { today } => {
            let window = today.map(WeekWindow::from_date).unwrap_or_else(WeekWindow::now);
            let state = load_one(&client, SectionKind::Weekly, window).await;

            match cli.format {
                OutputFormat::Table => println!("{}", render_weekly(&state.weekly, &options)),
                OutputFormat::Json => print_json(&state.weekly)?,
            }
        }

        Commands::Pies { reveal, select } => {
            let mut state = load_one(&client, SectionKind::Pies, WeekWindow::now()).await;

            if state.pies.loaded().is_some() {
                let target = StatusDimension::from_ordinal(reveal as usize)
                    .unwrap_or(StatusDimension::Visita);
                while state.cascade.revealed() < target {
                    let from = state.cascade.revealed();
                    if !state.apply(Action::RevealNext { from }) {
                        break;
                    }
                }

                if let Some(SliceSelection { tier, slot }) = select {
                    if !state.apply(Action::SelectSlice { tier, slot }) {
                        bail!(
                            "tier {} is not revealed (use --reveal {})",
                            tier,
                            tier.ordinal()
                        );
                    }
                }
            }

            match cli.format {
                OutputFormat::Table => {
                    println!("{}", render_pies(&state.pies, &state.cascade, &options))
                }
                OutputFormat::Json => print_json(&PiesOutput {
                    pies: &state.pies,
                    cascade: &state.cascade,
                })?,
            }
        }

        // Written above, before any config is loaded
        Commands::Config { .. } => {}
    }

    Ok(())
}

/// Load a single section into a fresh state
async fn load_one(
    client: &HttpStatsClient,
    kind: SectionKind,
    window: WeekWindow,
) -> DashboardState {
    let mut state = DashboardState::new();
    state.apply(Action::Started(kind));
    state.apply(Action::settled(load_section(kind, client, window).await));
    state
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("saeb_dashboard={}", config.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct PiesOutput<'a> {
    pies: &'a FetchStatus<PieBreakdowns>,
    cascade: &'a PieCascade,
}

/// Parse `TIER:SLOT`, where TIER is 1-3 or a dimension name and SLOT is 0 or 1
fn parse_slice(raw: &str) -> Result<SliceSelection, String> {
    let (tier, slot) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected TIER:SLOT, got {:?}", raw))?;

    let tier = match tier.parse::<usize>() {
        Ok(n) => StatusDimension::from_ordinal(n),
        Err(_) => StatusDimension::ALL
            .into_iter()
            .find(|dim| dim.as_str().eq_ignore_ascii_case(tier)),
    }
    .ok_or_else(|| format!("unknown tier: {}", tier))?;

    let slot = match slot.parse::<usize>() {
        Ok(n) if n < 2 => n,
        _ => return Err(format!("slot must be 0 or 1, got {:?}", slot)),
    };

    Ok(SliceSelection { tier, slot })
}
