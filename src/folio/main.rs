use clap::Parser;
use directories::ProjectDirs;
use folio::auth::{sha256_hex, FixedCredentials};
use folio::config::{FolioConfig, CONFIG_FILENAME};
use folio::error::Result;
use folio::server::{self, AppState};
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod args;
use args::{Cli, Commands};

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::HashPassword { password }) => {
            println!("{}", sha256_hex(password));
            Ok(())
        }
        Some(Commands::Serve) | None => serve(&cli).await,
    }
}

async fn serve(cli: &Cli) -> Result<()> {
    let data_dir = resolve_dir(&cli.data_dir, &cli.site_root, "data");
    let images_dir = resolve_dir(&cli.images_dir, &cli.site_root, "images");
    let config = load_config(&data_dir)?;
    let bind = cli.bind.clone().unwrap_or_else(|| config.bind.clone());

    log::info!("data dir: {}", data_dir.display());
    log::info!("images dir: {}", images_dir.display());

    let credentials = Arc::new(FixedCredentials::new(
        config.admin_username.clone(),
        config.admin_password_sha256.clone(),
    ));
    let state = AppState::new(data_dir, images_dir, credentials, config.session_cookie);
    server::serve(state, &bind).await
}

fn resolve_dir(explicit: &Option<PathBuf>, site_root: &Path, name: &str) -> PathBuf {
    explicit
        .clone()
        .unwrap_or_else(|| site_root.join("assets").join(name))
}

/// Config next to the data takes precedence; otherwise fall back to the
/// user-wide config directory, then to built-in defaults.
fn load_config(data_dir: &Path) -> Result<FolioConfig> {
    if data_dir.join(CONFIG_FILENAME).exists() {
        return FolioConfig::load(data_dir);
    }
    match ProjectDirs::from("com", "folio", "folio") {
        Some(dirs) => FolioConfig::load(dirs.config_dir()),
        None => Ok(FolioConfig::default()),
    }
}
