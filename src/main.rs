//! Design Kit - Gallery Entry Point
//!
//! Usage: `design-kit [config.toml]`

use std::path::PathBuf;

use design_kit::app::application::run_gallery;
use design_kit::utils::{app_data_dir, default_config_path, load_gallery_config};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log to stdout and to a daily file under the data directory.
/// The returned guard flushes the file writer on drop.
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout = fmt::layer().with_timer(fmt::time::LocalTime::rfc_3339());

    match app_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), "design-kit.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry().with(filter).with(stdout).init();
            tracing::warn!("File logging disabled: {}", e);
            None
        }
    }
}

fn main() {
    let _guard = init_tracing();
    tracing::info!("Starting Design Kit...");

    let config_arg = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_gallery_config(config_arg.clone());
    let config_path = config_arg.or_else(|| default_config_path().ok());

    run_gallery(config, config_path);
}
