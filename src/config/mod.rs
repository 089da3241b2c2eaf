//! Configuration loading and management

use crate::ui::views::DEFAULT_BILLS_TITLE;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bills page presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BillsPageConfig {
    /// Heading of the bills table
    pub title: String,

    /// Show ISO dates as French short dates (`4 Avr. 04`)
    pub format_dates: bool,

    /// Width in pixels of the receipt image in the modal
    pub receipt_width: u32,
}

impl Default for BillsPageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_BILLS_TITLE.to_string(),
            format_dates: true,
            receipt_width: 400,
        }
    }
}

/// Bounded waits on the rendered document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub wait_timeout_ms: u64,
    pub poll_interval_ms: u64,
}

impl NavigationConfig {
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.wait_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            wait_timeout_ms: 1000,
            poll_interval_ms: 50,
        }
    }
}

/// Preview server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bills_page: BillsPageConfig,
    pub navigation: NavigationConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
