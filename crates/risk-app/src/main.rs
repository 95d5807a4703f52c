//! Risk Gauge - standalone risk level gauge
//!
//! Loads the gauge configuration, level colours and the last pointer
//! position from ~/.config/risk-gauge/ and runs the iced application.
//!
//! ## Command line flags
//!
//! - `--reset-state`: Ignore the saved pointer and start at the default level

mod app;

use iced::{Size, Task};
use risk_core::{
    default_config_path, default_state_path, load_gauge_config, load_pointer, save_gauge_config,
    GaugeEngine, TextMetrics,
};
use risk_widgets::{default_theme_path, load_theme, ApproxTextMetrics, LevelColors};

use app::RiskApp;

fn main() -> iced::Result {
    let reset_state = std::env::args().any(|arg| arg == "--reset-state");

    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("risk-gauge starting up");

    let config_path = default_config_path();
    let config = load_gauge_config(&config_path);
    if !config_path.exists() {
        // First run: leave an editable copy of the defaults
        if let Err(e) = save_gauge_config(&config, &config_path) {
            log::warn!("Could not write default config: {:#}", e);
        }
    }
    let scale = match config.to_scale() {
        Ok(scale) => scale,
        Err(e) => {
            log::error!("Invalid gauge configuration: {}", e);
            eprintln!("Invalid gauge configuration: {}", e);
            std::process::exit(1);
        }
    };

    let colors = LevelColors::from_theme(&load_theme(&default_theme_path()));
    if colors.is_empty() {
        log::warn!("Theme has no valid level colours, every pill uses the fallback colour");
    } else {
        log::info!("Theme provides {} level colours", colors.len());
    }
    let text_height = ApproxTextMetrics.digit_height(scale.text_size());
    let mut engine = GaugeEngine::new(scale, text_height);

    let state_path = default_state_path();
    if reset_state {
        log::info!("Saved pointer ignored (--reset-state)");
    } else if let Some(saved) = load_pointer(&state_path) {
        engine.restore(saved);
    }

    iced::application(
        move || {
            let app = RiskApp::new(engine.clone(), colors.clone(), state_path.clone());
            (app, Task::none())
        },
        RiskApp::update,
        RiskApp::view,
    )
    .title("Risk Gauge")
    .window_size(Size::new(420.0, 640.0))
    .run()
}
