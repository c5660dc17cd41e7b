use serde::{Deserialize, Serialize};

use palavra_core::settings::RequestSettings;

fn default_window_title() -> String {
    "Palavras aleatórias".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    /// Settings used for the startup fetch and the initial form values
    #[serde(default)]
    pub initial_settings: RequestSettings,
}

impl UiConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            initial_settings: RequestSettings::default(),
        }
    }
}
