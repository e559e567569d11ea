use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::listing::TimeWindow;

/// External video extractor invocation (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Program to run; looked up on `PATH` when not absolute.
    pub program: String,
    /// Arguments placed before the output directory and URL.
    pub args: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            program: "yt-dlp".to_string(),
            args: vec![
                "--no-playlist".to_string(),
                "--format".to_string(),
                "best".to_string(),
            ],
        }
    }
}

/// Global configuration loaded from `~/.config/rcd/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RcdConfig {
    /// Maximum file name length in bytes, extension included.
    pub max_filename_len: usize,
    /// Candidates requested from the listing per wanted download.
    pub overfetch_factor: usize,
    /// Ranking window for the top listing.
    pub time_window: TimeWindow,
    /// Listing host, without trailing slash.
    pub listing_base_url: String,
    /// User-Agent sent with every request (Reddit rejects generic agents).
    pub user_agent: String,
    pub connect_timeout_secs: u64,
    /// Whole-request timeout for listing pages and media bodies.
    pub request_timeout_secs: u64,
    /// Optional extractor override; if missing, `yt-dlp` defaults are used.
    #[serde(default)]
    pub video_extractor: Option<ExtractorConfig>,
}

impl Default for RcdConfig {
    fn default() -> Self {
        Self {
            max_filename_len: 180,
            overfetch_factor: 3,
            time_window: TimeWindow::Day,
            listing_base_url: "https://www.reddit.com".to_string(),
            user_agent: concat!("rcd/", env!("CARGO_PKG_VERSION"), " (content downloader)")
                .to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 300,
            video_extractor: None,
        }
    }
}

impl RcdConfig {
    pub fn extractor(&self) -> ExtractorConfig {
        self.video_extractor.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rcd")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RcdConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RcdConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)
            .with_context(|| format!("failed to write default config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RcdConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
