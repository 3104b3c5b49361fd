use clap::Parser;
use std::path::PathBuf;

/// modsel: choose the optional modules compiled into the application
#[derive(Parser, Debug)]
#[command(name = "modsel")]
#[command(version = "0.1.0")]
#[command(about = "Select optional modules and generate the module facade and build manifest")]
#[command(
    long_about = "modsel restores the facade and build manifest left by a previous run, lets you pick modules from the descriptor catalog, then rewrites the facade's include and registration markers and appends the module sources to the manifest."
)]
pub struct Cli {
    /// Project root containing the descriptors, facade and manifest
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file (defaults to <root>/modsel.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Ask about each module with a Y/n prompt instead of the checklist
    #[arg(long)]
    pub no_tui: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
