use crate::endpoints::DEFAULT_BASE_URL;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Static configuration of the source: where the site lives and how the
/// transport should identify itself. Everything defaults to the real site;
/// overriding `base_url` is mainly for tests and mirrors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl SourceConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SourceConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: None,
            headers: None,
        }
    }
}
