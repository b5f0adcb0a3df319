use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::api::client::DEFAULT_API_URL;
use crate::api::ApiConfig;
use crate::app::Route;
use crate::error::Result;

#[derive(Parser, Debug)]
#[command(name = "watchlist", version, about = "A terminal client for a personal movie watchlist")]
pub struct CliArgs {
    /// Base URL of the watchlist backend
    #[arg(long = "api-url", value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Initial location: "/" or "/movies/ID"
    #[arg(long = "route", value_name = "PATH", default_value = "/")]
    pub route: String,

    /// Print the movie list and exit
    #[arg(short = 'l', long = "list", conflicts_with = "show")]
    pub list: bool,

    /// Print one movie and exit
    #[arg(short = 's', long = "show", value_name = "ID")]
    pub show: Option<String>,

    /// Per-request timeout in seconds, at least 1 (no timeout by default)
    #[arg(
        long = "timeout-secs",
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: Option<u64>,

    /// Log file for the interactive UI
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    pub fn api_config(&self) -> Result<ApiConfig> {
        ApiConfig::new(&self.api_url, self.timeout_secs.map(Duration::from_secs))
    }

    pub fn initial_route(&self) -> Result<Route> {
        Route::parse(&self.route)
    }

    pub fn is_interactive(&self) -> bool {
        !self.list && self.show.is_none()
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("watchlist.log"))
    }
}
