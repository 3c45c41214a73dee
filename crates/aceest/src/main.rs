use std::path::PathBuf;

use aceest::{App, init_logging};
use aceest_core::WorkoutStore;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "aceest")]
#[command(about = "Terminal form for logging workouts")]
struct Args {
    /// Directory for the log file (default: ~/.aceest/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".aceest")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut app = App::new(WorkoutStore::new());

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    Ok(())
}
