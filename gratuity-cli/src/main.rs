//! # Gratuity CLI - Interactive Tip Calculator TUI
//!
//! A terminal user interface for computing tips from a bill total, a tip
//! percentage, and a round-up toggle.
//!
//! ## Features
//! - Single-screen interactive TUI: the tip recomputes on every keystroke
//! - Locale-aware currency formatting (en-US, de-DE, ja-JP)
//! - Round-up policy (ceiling to the next whole currency unit)
//! - Non-interactive `compute` subcommand with JSON output
//!
//! ## Usage
//! ```bash
//! # Run the interactive TUI
//! gratuity-cli
//!
//! # One-shot computation
//! gratuity-cli compute --bill 50.00 --percent 15 --round-up
//!
//! # Full breakdown as JSON
//! gratuity-cli compute --bill 50.00 --percent 15 --json
//! ```

use clap::{Parser, Subcommand};
use tracing::info;

use gratuity::prelude::*;

mod config_loader;
mod tui;

use config_loader::CliConfig;
use tui::{App, handle_events, ui};

/// Interactive tip calculator CLI
#[derive(Parser, Debug)]
#[command(name = "gratuity-cli")]
#[command(author = "gratuity-rs contributors")]
#[command(version)]
#[command(about = "Interactive tip calculator with locale-aware formatting", long_about = None)]
struct Args {
    /// Enable file logging to logs/ directory
    #[arg(long, default_value = "false")]
    log: bool,

    /// Locale for currency formatting (overrides the config file)
    #[arg(long)]
    locale: Option<TipLocale>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute a tip without entering the TUI
    Compute {
        /// Bill total (free-form; non-numeric defaults to zero)
        #[arg(long)]
        bill: String,

        /// Tip percentage (free-form; non-numeric defaults to zero)
        #[arg(long)]
        percent: String,

        /// Round the tip up to the next whole currency unit
        #[arg(long, default_value = "false")]
        round_up: bool,

        /// Output the full breakdown as JSON
        #[arg(long, default_value = "false")]
        json: bool,

        /// Print the step-by-step explanation
        #[arg(long, default_value = "false")]
        explain: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let file_config = CliConfig::load();

    // Initialize tracing with optional file logging
    // NOTE: In TUI mode, we only log to file (no console) to avoid corrupting the UI
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>;
    let is_tui_mode = args.command.is_none();
    let logging = args.log || file_config.enable_logging.unwrap_or(false);

    if logging {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        std::fs::create_dir_all("logs")?;

        let file_appender = tracing_appender::rolling::daily("logs", "gratuity.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        _file_guard = Some(guard);

        let env_filter = tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("gratuity=debug".parse().unwrap());

        // Only add console layer if NOT in TUI mode
        if is_tui_mode {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
        }

        info!(
            "--- Tip Calculation Session Started [{}] ---",
            chrono::Utc::now()
        );
    } else {
        _file_guard = None;
        // In TUI mode without logging, completely disable tracing to stdout
        if !is_tui_mode {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive("gratuity=info".parse().unwrap()),
                )
                .init();
        }
    }

    let config = resolve_tip_config(&args, &file_config);

    match args.command {
        Some(Commands::Compute {
            bill,
            percent,
            round_up,
            json,
            explain,
        }) => run_compute(&config, &bill, &percent, round_up, json, explain),
        None => run_tui(config, &file_config),
    }
}

/// Resolves the effective locale: CLI flag > config file > default.
fn resolve_tip_config(args: &Args, file_config: &CliConfig) -> TipConfig {
    let locale = args
        .locale
        .or_else(|| {
            file_config
                .locale
                .as_deref()
                .and_then(|raw| raw.parse::<TipLocale>().ok())
        })
        .unwrap_or_default();
    TipConfig::new().with_locale(locale)
}

/// One-shot computation (non-interactive mode)
fn run_compute(
    config: &TipConfig,
    bill: &str,
    percent: &str,
    round_up: bool,
    json: bool,
    explain: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = TipInputs::from_text(bill, percent, round_up);
    let breakdown = TipCalculator::from(inputs).compute_tip(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    if explain {
        print!("{}", breakdown.explain());
    }

    let display = breakdown.to_display(config);
    println!("Bill:  {}", display.formatted_bill);
    println!("Tip:   {} ({})", display.formatted_tip, display.status);
    println!("Total: {}", display.formatted_total);

    Ok(())
}

/// Run the TUI application
fn run_tui(config: TipConfig, file_config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);

    if let Some(percent) = file_config.default_tip_percent {
        app.prefill_percent(percent);
    }
    if let Some(round_up) = file_config.round_up {
        app.round_up = round_up;
        app.recompute();
    }

    // Initialize terminal
    let mut terminal = ratatui::init();

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main application loop
fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui(frame, app))?;

        // Handle events
        if handle_events(app)? {
            break;
        }
    }

    Ok(())
}
