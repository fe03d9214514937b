use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Resolve the agent torrent settings, print them as JSON and exit.
    #[arg(long)]
    pub print_settings: bool,
}
