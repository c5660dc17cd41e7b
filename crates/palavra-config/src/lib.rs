use std::env;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::ui::UiConfig;

pub mod api;
pub mod ui;

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,

    /// Capacity of the UI <-> backend event channels
    pub channel_capacity: usize,
}

impl Config {
    pub fn new() -> Self {
        let channel_capacity = env::var("PALAVRA_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64);

        Config {
            api: ApiConfig::new(),
            ui: UiConfig::new(),
            channel_capacity,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
