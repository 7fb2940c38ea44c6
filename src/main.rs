//! mdbar - A terminal markdown editor with a formatting toolbar.
//!
//! # Usage
//!
//! ```bash
//! mdbar README.md
//! mdbar --toolbar-bottom README.md
//! mdbar --link-pattern '\bgh:\S+' notes.md
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mdbar::app::App;
use mdbar::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use mdbar::link::{LinkDetector, default_detector, detector_from_pattern};

/// A terminal markdown editor with a formatting toolbar
#[derive(Parser, Debug)]
#[command(name = "mdbar", version, about, long_about = None)]
struct Cli {
    /// Markdown file to edit (created on first save if missing)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Hide the formatting toolbar
    #[arg(long)]
    no_toolbar: bool,

    /// Show the toolbar below the editing area
    #[arg(long)]
    toolbar_bottom: bool,

    /// Disable markdown highlighting
    #[arg(long)]
    no_highlight: bool,

    /// Highlight colours for a light or dark terminal background
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Regex deciding whether selected text is a link
    #[arg(long, value_name = "REGEX")]
    link_pattern: Option<String>,

    /// Write logs to this file (logging is off without it)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

/// Send logs to `log_file`. Without one, no subscriber is installed and
/// events are dropped, since the editor owns the terminal.
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// The detector for `pattern`, or the default plus a warning when it does not compile.
fn link_detector(pattern: Option<&str>, warnings: &mut Vec<String>) -> LinkDetector {
    let Some(pattern) = pattern else {
        return default_detector();
    };
    match detector_from_pattern(pattern) {
        Ok(detector) => detector,
        Err(err) => {
            tracing::warn!(pattern, error = %err, "invalid link pattern; using default");
            warnings.push(format!("Invalid link pattern {pattern:?}, using default"));
            default_detector()
        }
    }
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log_file.as_ref())?;
    tracing::info!(
        global = %global_path.display(),
        local = %local_path.display(),
        ?effective,
        "configuration loaded"
    );

    let mut warnings = Vec::new();
    let detector = link_detector(effective.link_pattern.as_deref(), &mut warnings);
    let background = effective.theme.unwrap_or(ThemeMode::Auto).background();

    let file = cli.file.unwrap_or_else(|| PathBuf::from("untitled.md"));
    let mut app = App::new(file)
        .with_toolbar(!effective.no_toolbar, effective.toolbar_position())
        .with_highlight(!effective.no_highlight, background)
        .with_link_detector(detector)
        .with_startup_warnings(warnings);

    app.run().context("Application error")
}
