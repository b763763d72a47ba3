// Configuration type definitions

use serde::Deserialize;

use crate::advice::DEFAULT_ENDPOINT;

/// Count pre-filled in the history input
pub const DEFAULT_HISTORY_COUNT: u32 = 3;

/// Advice source configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdviceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        AdviceConfig {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// History reveal configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_history_count")]
    pub default_count: u32,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            default_count: DEFAULT_HISTORY_COUNT,
        }
    }
}

fn default_history_count() -> u32 {
    DEFAULT_HISTORY_COUNT
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub advice: AdviceConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}
