mod config;
mod handlers;
mod operations;
mod state;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use doclist_core::query::parse_specialty_list;
use doclist_core::{ConsultationType, Doctor, SortKey};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{AppConfig, ConfigOverrides};
use operations::{load_feed, run_interactive};
use state::AppState;
use ui::{render_filter_panel, render_listing};

/// Doctor directory - search, filter and sort a published doctor feed
///
/// Examples:
///   # Everyone, in feed order
///   doclist
///
///   # Open a shared link
///   doclist --query '?search=john&sort=fees'
///
///   # Video consultations with a cardiologist or ENT, cheapest first
///   doclist --consultation video --specialty Cardiologist --specialty ENT --sort fees
///
///   # Browse interactively
///   doclist --interactive
#[derive(Parser, Debug)]
#[command(name = "doclist")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Search matches any part of the doctor's name, ignoring case\n  \
    - Multiple --specialty values are combined with OR\n  \
    - Search, consultation type and specialties are combined with AND\n\n\
Sorting Options:\n  \
    - fees: consultation fee, lowest first\n  \
    - experience: years of experience, highest first\n\n\
Environment:\n  \
    DOCLIST_ENDPOINT, DOCLIST_SOURCE_FILE, DOCLIST_PAGE_URL, NO_COLOR, RUST_LOG")]
struct Cli {
    /// Link or query string to start from (e.g. '?search=john&sort=fees')
    #[arg(short, long, value_name = "LINK")]
    query: Option<String>,

    /// Search doctors by name
    #[arg(short, long, value_name = "TEXT")]
    search: Option<String>,

    /// Consultation type: all, video or clinic
    #[arg(short, long, value_name = "TYPE")]
    consultation: Option<ConsultationType>,

    /// Select a specialty (can be specified multiple times for OR logic)
    #[arg(short = 'p', long = "specialty", value_name = "NAME")]
    specialties: Vec<String>,

    /// Sort by: none, fees or experience
    #[arg(short = 'o', long, value_name = "KEY")]
    sort: Option<SortKey>,

    /// Fetch the feed from this URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Read the feed from a local JSON file instead of fetching it
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Page the printed links point at
    #[arg(long, value_name = "URL")]
    page_url: Option<String>,

    /// Show the filter panel above the listing
    #[arg(long)]
    panel: bool,

    /// Print the listing as JSON
    #[arg(long, conflicts_with = "interactive")]
    json: bool,

    /// Start an interactive session
    #[arg(short, long)]
    interactive: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

#[derive(Serialize)]
struct ListingOutput<'a> {
    link: String,
    total: usize,
    shown: usize,
    doctors: Vec<&'a Doctor>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::resolve(ConfigOverrides {
        endpoint: cli.endpoint.clone(),
        file: cli.file.clone(),
        page_url: cli.page_url.clone(),
        no_color: cli.no_color,
    })
    .context("invalid configuration")?;

    init_logging(config.color);
    colored::control::set_override(config.color);

    let report = load_feed(&config.source);
    let initial_query = cli.query.as_deref().map(query_part).unwrap_or_default();
    let mut state = AppState::new(config, report, initial_query);
    apply_flag_filters(&cli, &mut state);

    if cli.interactive {
        return run_interactive(&mut state);
    }

    let mut out = io::stdout().lock();
    if cli.json {
        let output = ListingOutput {
            link: state.share_link(),
            total: state.session.doctors().len(),
            shown: state.session.visible_count(),
            doctors: state.visible_doctors(),
        };
        serde_json::to_writer_pretty(&mut out, &output)?;
        writeln!(out)?;
        return Ok(());
    }

    if cli.panel {
        render_filter_panel(&mut out, &state)?;
        writeln!(out)?;
    }
    render_listing(&mut out, &state)?;
    Ok(())
}

const DEFAULT_LOG_FILTER: &str = "doclist=info";

fn init_logging(color: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(log_filter(rust_log.as_deref()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(color),
        )
        .init();
}

/// `RUST_LOG` when it is set and valid, otherwise [`DEFAULT_LOG_FILTER`]
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// The query part of a full link, or the input itself when it has no `?`
fn query_part(link: &str) -> &str {
    link.find('?').map_or(link, |idx| &link[idx..])
}

/// Flags refine the starting link, in the same order a user would click
fn apply_flag_filters(cli: &Cli, state: &mut AppState) {
    if let Some(search) = &cli.search {
        state.session.set_search(search.clone());
    }
    if let Some(consultation) = cli.consultation {
        state.session.set_consultation(consultation);
    }
    for specialty in cli.specialties.iter().flat_map(|value| parse_specialty_list(value)) {
        let specialty = canonical_specialty(state, specialty.trim());
        if specialty.is_empty() {
            continue;
        }
        if !state.session.filters().specialties.contains(&specialty) {
            state.session.toggle_specialty(&specialty);
        }
    }
    if let Some(sort) = cli.sort {
        state.session.set_sort(sort);
    }
}

/// The feed's spelling of a specialty name, matched ignoring case.
/// Names the feed does not offer are kept as given.
fn canonical_specialty(state: &AppState, name: &str) -> String {
    let found = state
        .session
        .available_specialties()
        .iter()
        .find(|s| s.eq_ignore_ascii_case(name));

    match found {
        Some(specialty) => specialty.clone(),
        None => {
            if !name.is_empty() && state.feed_available {
                tracing::warn!(specialty = name, "specialty not offered by the feed");
            }
            name.to_string()
        }
    }
}
