use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://random-word-api.herokuapp.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Word provider endpoint configuration
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ApiConfig {
    pub fn new() -> Self {
        let base_url = env::var("PALAVRA_API_URL").unwrap_or_else(|_| default_base_url());

        let timeout_seconds = env::var("PALAVRA_API_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            base_url,
            timeout_seconds,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
