use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub etherscan: EtherscanConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EtherscanConfig {
    pub api_url: String,
    /// Injected at deploy time; requests go out unauthenticated (and
    /// heavily rate-limited) when unset.
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of most recent transactions scored per analysis.
    pub tx_window: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            etherscan: EtherscanConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl Default for EtherscanConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.etherscan.io/api".into(),
            api_key: None,
            timeout_seconds: 30,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { tx_window: 100 }
    }
}

impl Config {
    /// Load config from a TOML file. Falls back to defaults if file doesn't exist.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("Config file {} not found, using defaults", path.display());
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Config loaded from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
