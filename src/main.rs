use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::info;

use clientbook::config::{data_dir, load_settings, resolve_dir, CONFIG_TEMPLATE};
use clientbook::{logging, ClientBook, Menu, Result};

#[derive(Parser)]
#[command(name = "clientbook")]
#[command(version, about = "Minimal interactive client-record manager", long_about = None)]
struct Cli {
    /// Path to data directory (default: platform data dir or ~/.clientbook)
    #[arg(short = 'C', long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Determine data directory
    let dir = match cli.data_dir {
        Some(p) => p,
        None => data_dir()?,
    };

    // First run: lay down the directory and a commented config
    fs::create_dir_all(&dir)?;
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        fs::write(&config_path, CONFIG_TEMPLATE)?;
    }

    let settings = load_settings(&dir)?;
    let _log_guard = logging::init(&dir, &settings.log);

    let store_dir = resolve_dir(&settings.store.dir, &dir);
    info!(store = %store_dir.display(), "starting client manager");
    let mut book = ClientBook::open(store_dir)?;

    let stdin = io::stdin();
    let mut menu = Menu::new(&mut book, stdin.lock(), io::stdout());
    menu.run()
}
