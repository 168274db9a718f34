use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/wmd/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WmdConfig {
    /// User-Agent sent with every request. Some wikis reject requests from
    /// unfamiliar client identifiers, so the default mimics a common tool.
    pub user_agent: String,
    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds (listing pages and file content).
    pub request_timeout_secs: u64,
}

impl Default for WmdConfig {
    fn default() -> Self {
        Self {
            user_agent: "PostmanRuntime/7.43.0".to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 600,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wmd")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WmdConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WmdConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: WmdConfig = toml::from_str(&data)?;
    Ok(cfg)
}
