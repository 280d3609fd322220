use std::{error::Error, path::PathBuf};

use eframe::egui;
use tracing_subscriber::EnvFilter;

use fifthswheel::{config::Config, gui::toplevel::Toplevel};

const DEFAULT_CONFIG_PATH: &str = "conf.yaml";

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = Config::load(&config_path)?;
    tracing::info!(?config, "starting");

    let width = 2.0 * config.wheel_radius + 480.0;
    let height = 2.0 * config.wheel_radius + 260.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([width, height]),
        ..Default::default()
    };

    eframe::run_native(
        "fifthswheel",
        options,
        Box::new(move |_cc| Ok(Box::new(Toplevel::new(&config)))),
    )?;

    Ok(())
}
