// VisitDesk - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading (platform dir or --config-dir)
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::ui::...` etc.
pub use visitdesk::app;
pub use visitdesk::platform;
pub use visitdesk::ui;
pub use visitdesk::util;

use clap::Parser;
use std::path::PathBuf;

/// VisitDesk - Clinical visit recording with CPAP compliance tracking.
#[derive(Parser, Debug)]
#[command(name = "VisitDesk", version, about)]
struct Cli {
    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Pre-fill the patient name of the first visit form.
    #[arg(short = 'p', long = "patient")]
    patient: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before the subscriber exists so its [logging] level can
    // take part; its own trace events before init are dropped.
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_dir);
    let (config, warnings) = platform::config::load_config(&config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %config_dir.display(),
        "VisitDesk starting"
    );
    for warning in &warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;

    let mut state = app::state::AppState::new(config, warnings, cli.debug);
    if let Some(patient) = cli.patient {
        state.draft.patient = patient;
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([760.0, 480.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply_appearance(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::VisitDeskApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch VisitDesk GUI: {e}");
        std::process::exit(1);
    }
}
