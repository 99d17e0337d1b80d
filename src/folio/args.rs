use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Content management backend for a personal portfolio site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Site root; data and images default to assets/ beneath it
    #[arg(long, default_value = ".", global = true)]
    pub site_root: PathBuf,

    /// JSON data directory (overrides <site-root>/assets/data)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Image upload directory (overrides <site-root>/assets/images)
    #[arg(long, global = true)]
    pub images_dir: Option<PathBuf>,

    /// Bind address (overrides the config file)
    #[arg(long, global = true)]
    pub bind: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (the default when no command is given)
    Serve,

    /// Print the sha-256 digest of a password, for the config file
    HashPassword {
        /// Password to hash
        password: String,
    },
}
