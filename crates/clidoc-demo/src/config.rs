use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Host configuration for the demo
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directories searched for documentation fragments before any listed on
    /// the command line, so command line directories take precedence
    #[serde(default)]
    pub template_dirs: Vec<PathBuf>,
}

impl Config {
    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // Return default config if file doesn't exist
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
