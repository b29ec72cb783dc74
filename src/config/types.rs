// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_BLUR_GRACE_MS: u64 = 200;
pub const DEFAULT_MAX_VISIBLE: u16 = 8;
pub const DEFAULT_PLACEHOLDER: &str = "Search for movies...";

/// Suggestion service section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout; unset leaves the transport default in place
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            base_url: default_base_url(),
            timeout_ms: None,
        }
    }
}

/// Timer section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_blur_grace_ms")]
    pub blur_grace_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            blur_grace_ms: DEFAULT_BLUR_GRACE_MS,
        }
    }
}

/// Display section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_max_visible")]
    pub max_visible: u16,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            max_visible: DEFAULT_MAX_VISIBLE,
            placeholder: default_placeholder(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_blur_grace_ms() -> u64 {
    DEFAULT_BLUR_GRACE_MS
}

fn default_max_visible() -> u16 {
    DEFAULT_MAX_VISIBLE
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}
