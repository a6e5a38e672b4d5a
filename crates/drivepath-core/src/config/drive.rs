//! Remote drive connection configuration.

use serde::{Deserialize, Serialize};

use crate::types::pagination::{DEFAULT_PAGE_SIZE, clamp_page_size};

/// Settings for the Drive REST store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveConfig {
    /// Base URL of the Drive v3 API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// OAuth bearer token. A token set at runtime takes precedence.
    #[serde(default)]
    pub authorization_token: Option<String>,
    /// Records requested per listing call.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Whether listings span shared drives as well as "My Drive".
    #[serde(default = "default_true")]
    pub include_all_drives: bool,
    /// Whole-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl DriveConfig {
    /// The page size clamped into the range the API accepts.
    pub fn effective_page_size(&self) -> u32 {
        clamp_page_size(self.page_size)
    }
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            authorization_token: None,
            page_size: default_page_size(),
            include_all_drives: true,
            request_timeout_seconds: default_request_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://www.googleapis.com/drive/v3".to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}
