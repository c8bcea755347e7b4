use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "minidash",
    version,
    about = "Terminal admin dashboard for a users REST API"
)]
pub struct Cli {
    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the users API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override rows per page on the users table
    #[arg(long, value_name = "N")]
    pub rows_per_page: Option<usize>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Log file path, defaulting to `<data_dir>/minidash/minidash.log`.
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("minidash")
                .join("minidash.log")
        })
    }

    /// Apply flag overrides on top of file values.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(rows) = self.rows_per_page {
            config.ui.rows_per_page = rows;
        }
    }
}
