//! `moodcheck` — terminal mood check-in wizard.
//!
//! # Usage
//!
//! ```
//! moodcheck --endpoint http://127.0.0.1:5280/checkins
//! moodcheck --config ~/.config/moodcheck/config.toml --log-file moodcheck.log
//! ```

mod app;
mod client;
mod ui;

use std::{
  fs::OpenOptions,
  io,
  path::{Path, PathBuf},
  sync::Mutex,
  time::Duration,
};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use client::{GatewayConfig, HttpGateway};
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use moodcheck_core::reminder::ReminderConfig;
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5280/checkins";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "moodcheck", about = "Check in with how you feel, from the terminal")]
struct Args {
  /// Path to a TOML config file (endpoint, timeout_secs).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// URL that receives check-ins (default: http://127.0.0.1:5280/checkins).
  #[arg(long, env = "MOODCHECK_ENDPOINT")]
  endpoint: Option<String>,

  /// Request timeout in seconds (default: 30).
  #[arg(long)]
  timeout_secs: Option<u64>,

  /// Seed for the activity shuffle; random when omitted.
  #[arg(long)]
  seed: Option<u64>,

  /// Write logs to this file. Nothing is logged without it.
  #[arg(long, value_name = "FILE")]
  log_file: Option<PathBuf>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  endpoint:     String,
  #[serde(default)]
  timeout_secs: Option<u64>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  if let Some(path) = &args.log_file {
    init_tracing(path)?;
  }

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let gateway_config = GatewayConfig {
    endpoint: args
      .endpoint
      .or_else(|| (!file_cfg.endpoint.is_empty()).then(|| file_cfg.endpoint.clone()))
      .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
    timeout:  Duration::from_secs(
      args
        .timeout_secs
        .or(file_cfg.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS),
    ),
  };

  let rng = match args.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };

  let gateway = HttpGateway::new(gateway_config)?;
  tracing::info!(endpoint = gateway.endpoint(), "starting moodcheck");
  let mut app = App::new(gateway, rng).with_reminder_handler(log_reminder);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app).await;

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

/// Reminders are not scheduled; saving one only records it in the log.
fn log_reminder(config: &ReminderConfig) {
  tracing::info!(
    time = %config.time,
    period = %config.period,
    days = ?config.days,
    "reminder saved"
  );
}

/// The terminal owns stdout, so logs go to `path` without colour codes.
fn init_tracing(path: &Path) -> Result<()> {
  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("opening log file {}", path.display()))?;
  tracing_subscriber::fmt()
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();
  Ok(())
}

// ─── Event loop ───────────────────────────────────────────────────────────────

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App<HttpGateway>,
) -> Result<()> {
  loop {
    app.poll_submission().await;
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    match maybe_event {
      // Windows reports both press and release.
      Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
        if !app.handle_key(key) {
          break;
        }
      }
      // Resize and other events redraw on the next iteration.
      _ => {}
    }
  }

  Ok(())
}
