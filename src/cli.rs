use clap::Parser;
use std::path::PathBuf;

/// Environment variable that supplies the service base URL.
pub const API_URL_ENV_VAR: &str = "LINKSNAP_API_URL";

#[derive(Debug, Clone, Parser)]
#[command(name = "linksnap", version, about = "Shorten URLs from the terminal")]
pub struct Cli {
    /// Base URL of the shortening service (overrides the config file)
    #[arg(long, value_name = "URL", env = API_URL_ENV_VAR)]
    pub api_url: Option<String>,

    /// Path to the config file (default: <config dir>/linksnap/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
